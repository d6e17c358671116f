//! Corpus errors. Member-level variants are collected as warnings and never
//! abort a comparison; `NotADirectory` is fatal.

use super::error_code::{self, MotifErrorCode};
use super::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Corpus path is not a readable directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to list corpus entry under {path}: {message}")]
    Walk { path: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Skipping {path}: {size} bytes exceeds limit of {limit}")]
    TooLarge { path: String, size: u64, limit: u64 },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

impl CorpusError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::NotADirectory { path }
            | Self::Walk { path, .. }
            | Self::Read { path, .. }
            | Self::TooLarge { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }

    /// Whether the error should abort the whole comparison.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }
}

impl MotifErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { source, .. } => source.error_code(),
            _ => error_code::CORPUS_ERROR,
        }
    }
}
