//! Parse errors.

use super::error_code::{self, MotifErrorCode};

/// Errors raised when component source cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at {line}:{column} ({error_count} error nodes)")]
    Syntax {
        error_count: u32,
        line: u32,
        column: u32,
    },

    #[error("Expected closing tag for <{opening}> but found </{closing}> at line {line}")]
    MismatchedTag {
        opening: String,
        closing: String,
        line: u32,
    },

    #[error("Nesting exceeds {limit} levels at line {line}")]
    TooDeep { limit: u32, line: u32 },

    #[error("Failed to load grammar: {0}")]
    LanguageInit(String),

    #[error("Parser returned no tree")]
    NoTree,
}

impl MotifErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
