//! Helper functions shared by commands and generators
//!
//! Date formatting per language and URL building.

mod date;
mod url;

pub use date::*;
pub use url::*;
