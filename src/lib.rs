//! Roamtree - turn a directory tree into a Roam Research JSON import

pub mod convert;
pub mod error;
pub mod file_utils;
pub mod outline;
pub mod output;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use convert::{
    ConversionOutput, ConversionStats, Converter, ConverterConfig, IgnoreFilter, convert,
};
pub use error::{Error, Result};
pub use outline::{Bullet, Outline, Page};
pub use output::{to_json, write_json};
