//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

use super::Lang;

/// Errors raised while reading posts from the content tree
#[derive(Error, Debug)]
pub enum ContentError {
    /// A required front-matter field is absent, not a string, or empty
    #[error("Missing or invalid {field} in {lang}/{slug}")]
    InvalidField {
        field: &'static str,
        lang: Lang,
        slug: String,
    },

    #[error("Malformed front-matter in {lang}/{slug}: {source}")]
    FrontMatter {
        lang: Lang,
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error when reading `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }
}
