//! Stable string codes surfaced to host tools.

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const CORPUS_ERROR: &str = "CORPUS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait MotifErrorCode {
    fn error_code(&self) -> &'static str;
}
