//! Name-based entry filtering

use std::path::Path;

use glob::Pattern;

use crate::error::{Error, Result};

/// Prefix marking directories that are never descended into.
pub const HIDDEN_PREFIX: char = '.';

/// Compiled `--ignore` patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| Error::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Check if an entry name matches any pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

/// Hidden directories are skipped along with their whole subtree.
pub fn is_hidden_dir(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with(HIDDEN_PREFIX))
}
