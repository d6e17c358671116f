//! Analysis errors and non-fatal warning collection.

use super::error_code::MotifErrorCode;
use super::{ConfigError, CorpusError, ParseError};

/// Errors that abort an analysis call.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MotifErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Corpus(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of an analysis call that accumulates non-fatal corpus warnings.
/// Allows a result to be returned even when some corpus files fail.
#[derive(Debug, Default)]
pub struct AnalysisResult<T> {
    /// The successful result data.
    pub data: T,
    /// Corpus members that were skipped.
    pub warnings: Vec<CorpusError>,
}

impl<T> AnalysisResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: CorpusError) {
        self.warnings.push(warning);
    }

    /// Returns true if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Replace the data, carrying the warnings over.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AnalysisResult<U> {
        AnalysisResult {
            data: f(self.data),
            warnings: self.warnings,
        }
    }
}
