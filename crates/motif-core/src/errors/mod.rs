//! Error handling for Motif.
//! One error enum per concern, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod parse_error;

pub use analysis_error::{AnalysisError, AnalysisResult};
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::MotifErrorCode;
pub use parse_error::ParseError;
