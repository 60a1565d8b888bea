//! Serialization of outline documents
//!
//! Both output documents are JSON arrays of pages in the Roam import format.

mod json;

pub use json::{to_json, write_json};
