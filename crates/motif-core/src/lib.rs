//! motif-core: shared foundation for the Motif component analysis engine.
//!
//! - Errors: one `thiserror` enum per concern with stable error codes
//! - Config: layered TOML configuration
//! - Logging: `tracing-subscriber` setup

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{AnalysisConfig, CorpusConfig, MotifConfig, PropScope};
pub use errors::{
    AnalysisError, AnalysisResult, ConfigError, CorpusError, MotifErrorCode, ParseError,
};
