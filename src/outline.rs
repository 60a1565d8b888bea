//! Outline types for the Roam JSON import format
//!
//! A Roam export is a list of pages. Each page has a title and a list of
//! bullets, and bullets nest arbitrarily. Authorship and timestamp fields
//! that Roam itself exports are not needed for import and are never written.

use serde::Serialize;

/// Anything that owns an ordered list of child bullets.
pub trait Outline {
    fn children(&self) -> &[Bullet];

    fn children_mut(&mut self) -> &mut Vec<Bullet>;

    /// Append a bullet and return a mutable reference to it.
    fn push_child(&mut self, child: Bullet) -> &mut Bullet {
        let children = self.children_mut();
        children.push(child);
        let last = children.len() - 1;
        &mut children[last]
    }
}

/// A top-level titled document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub children: Vec<Bullet>,
}

/// An untitled outline node nested inside a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bullet {
    #[serde(rename = "string")]
    pub text: String,
    pub children: Vec<Bullet>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// A page holding a file's contents as a single code-block bullet.
    pub fn code(title: impl Into<String>, contents: &str) -> Self {
        let mut page = Self::new(title);
        page.push_child(Bullet::code_block(contents));
        page
    }
}

impl Bullet {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// A `[[name]]` reference to the page titled `name`.
    pub fn page_ref(name: &str) -> Self {
        Self::new(format!("[[{}]]", name))
    }

    /// Contents wrapped in triple backticks.
    ///
    /// Backticks inside `contents` are not escaped, so a file that itself
    /// contains a ``` fence will close the block early when rendered.
    pub fn code_block(contents: &str) -> Self {
        Self::new(format!("```{}```", contents))
    }
}

impl Outline for Page {
    fn children(&self) -> &[Bullet] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.children
    }
}

impl Outline for Bullet {
    fn children(&self) -> &[Bullet] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.children
    }
}
