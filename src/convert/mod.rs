//! Directory-to-outline conversion
//!
//! `Converter` walks a directory once, depth first, and builds two outputs
//! at the same time: a single table-of-contents page mirroring the tree, and
//! a flat list of pages holding file contents.

mod config;
mod converter;
mod filter;

pub use config::ConverterConfig;
pub use converter::{ConversionOutput, ConversionStats, Converter};
pub use filter::IgnoreFilter;

use std::path::Path;

use crate::error::Result;

/// Convert `root` with the default configuration.
pub fn convert(root: &Path) -> Result<ConversionOutput> {
    Converter::new(ConverterConfig::default())?.convert(root)
}
