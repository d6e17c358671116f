//! Configuration system for Motif.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod analysis_config;
pub mod corpus_config;
pub mod motif_config;

pub use analysis_config::{AnalysisConfig, PropScope};
pub use corpus_config::CorpusConfig;
pub use motif_config::MotifConfig;
