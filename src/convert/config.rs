//! Configuration types for the converter

/// Configuration for conversion behavior.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Glob patterns matched against entry names; matches are left out entirely.
    pub ignore_patterns: Vec<String>,
    /// Files larger than this many bytes get a TOC entry but no page.
    pub max_file_size: Option<u64>,
}
