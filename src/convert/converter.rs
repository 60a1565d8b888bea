//! Converter - walks a directory and builds the TOC and page list together

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::file_utils::read_text_file;
use crate::outline::{Bullet, Outline, Page};

use super::config::ConverterConfig;
use super::filter::{IgnoreFilter, is_hidden_dir};

/// Counters collected during a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Directories walked, including the root.
    pub directories: usize,
    /// Files given a TOC reference.
    pub files: usize,
    /// Files that got a page.
    pub pages: usize,
    /// Files whose page was skipped because they could not be read as text.
    pub skipped: usize,
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// Always exactly one page: the table of contents for the root directory.
    pub toc: Vec<Page>,
    /// One page per readable file, in traversal order.
    pub pages: Vec<Page>,
    pub stats: ConversionStats,
}

/// Mutable accumulators shared across one walk.
#[derive(Default)]
struct WalkState {
    pages: Vec<Page>,
    stats: ConversionStats,
}

/// Builds a Roam table of contents and one page per file from a directory.
pub struct Converter {
    config: ConverterConfig,
    filter: IgnoreFilter,
}

impl Converter {
    /// Create a converter, compiling the configured ignore patterns.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        let filter = IgnoreFilter::new(&config.ignore_patterns)?;
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Walk `root` and return the TOC forest and the page list.
    ///
    /// Fails if `root` is not an accessible directory or if any directory
    /// below it cannot be listed. Files that cannot be read are skipped.
    pub fn convert(&self, root: &Path) -> Result<ConversionOutput> {
        let root = root.canonicalize().map_err(|source| Error::InvalidRoot {
            path: root.to_path_buf(),
            source,
        })?;
        if !root.is_dir() {
            return Err(Error::NotADirectory { path: root });
        }

        let title = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        info!("Creating top-level page with name: {}", title);
        let mut toc_page = Page::new(title);

        let mut state = WalkState::default();
        self.walk_dir(&root, &mut toc_page, &mut state)?;

        Ok(ConversionOutput {
            toc: vec![toc_page],
            pages: state.pages,
            stats: state.stats,
        })
    }

    fn walk_dir(&self, dir: &Path, toc: &mut dyn Outline, state: &mut WalkState) -> Result<()> {
        state.stats.directories += 1;

        let (files, dirs) = self.read_entries(dir)?;

        for path in files {
            let name = entry_name(&path);
            toc.push_child(Bullet::page_ref(&name));
            state.stats.files += 1;

            info!("Creating page for file: {}", name);
            match read_text_file(&path, self.config.max_file_size) {
                Ok(contents) => {
                    state.pages.push(Page::code(name, &contents));
                    state.stats.pages += 1;
                }
                Err(e) => {
                    warn!("Unable to open file {}: {}", path.display(), e);
                    state.stats.skipped += 1;
                }
            }
        }

        for path in dirs {
            let name = entry_name(&path);
            info!("Opening directory: {}", name);
            let child = toc.push_child(Bullet::new(name));
            self.walk_dir(&path, child, state)?;
        }

        Ok(())
    }

    /// List a directory, sorted by name and split into (files, directories).
    ///
    /// Ignored entries and hidden directories are dropped here.
    fn read_entries(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let read_dir_error = |source: std::io::Error| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = std::fs::read_dir(dir)
            .map_err(read_dir_error)?
            .collect::<std::io::Result<Vec<DirEntry>>>()
            .map_err(read_dir_error)?;
        entries.sort_by_key(|e| e.file_name());

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for entry in entries {
            let path = entry.path();
            let name = entry.file_name();
            if self.filter.is_ignored(&name.to_string_lossy()) {
                debug!("Ignoring {}", path.display());
                continue;
            }
            if path.is_dir() {
                if is_hidden_dir(&path) {
                    debug!("Skipping hidden directory {}", path.display());
                    continue;
                }
                dirs.push(path);
            } else {
                files.push(path);
            }
        }

        Ok((files, dirs))
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
