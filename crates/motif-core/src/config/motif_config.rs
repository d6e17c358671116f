//! Top-level Motif configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, CorpusConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MOTIF_*`)
/// 2. Project config (`motif.toml` in project root)
/// 3. User config (`~/.motif/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MotifConfig {
    pub analysis: AnalysisConfig,
    pub corpus: CorpusConfig,
}

impl MotifConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("motif.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MotifConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.analysis.novelty_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.novelty_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.analysis.style_attributes.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.style_attributes".to_string(),
                message: "attribute names must not be empty".to_string(),
            });
        }
        if config.analysis.max_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.corpus.extensions.iter().any(|e| e.trim_start_matches('.').is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "corpus.extensions".to_string(),
                message: "extensions must not be empty".to_string(),
            });
        }
        if config.corpus.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "corpus.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".motif").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut MotifConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MotifConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it is set.
    fn merge(base: &mut MotifConfig, other: &MotifConfig) {
        // Analysis
        if other.analysis.novelty_threshold.is_some() {
            base.analysis.novelty_threshold = other.analysis.novelty_threshold;
        }
        if !other.analysis.style_attributes.is_empty() {
            base.analysis.style_attributes = other.analysis.style_attributes.clone();
        }
        if other.analysis.prop_scope.is_some() {
            base.analysis.prop_scope = other.analysis.prop_scope;
        }
        if other.analysis.max_depth.is_some() {
            base.analysis.max_depth = other.analysis.max_depth;
        }

        // Corpus
        if !other.corpus.extensions.is_empty() {
            base.corpus.extensions = other.corpus.extensions.clone();
        }
        if other.corpus.max_file_size.is_some() {
            base.corpus.max_file_size = other.corpus.max_file_size;
        }
        if other.corpus.parallel.is_some() {
            base.corpus.parallel = other.corpus.parallel;
        }
        if other.corpus.cache_capacity.is_some() {
            base.corpus.cache_capacity = other.corpus.cache_capacity;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MOTIF_ANALYSIS_NOVELTY_THRESHOLD`, `MOTIF_CORPUS_EXTENSIONS`, etc.
    fn apply_env_overrides(config: &mut MotifConfig) {
        if let Ok(val) = std::env::var("MOTIF_ANALYSIS_NOVELTY_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.novelty_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOTIF_ANALYSIS_PROP_SCOPE") {
            if let Ok(v) = val.parse() {
                config.analysis.prop_scope = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOTIF_ANALYSIS_MAX_DEPTH") {
            if let Ok(v) = val.parse::<u32>() {
                config.analysis.max_depth = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOTIF_CORPUS_EXTENSIONS") {
            let extensions: Vec<String> = val
                .split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect();
            if !extensions.is_empty() {
                config.corpus.extensions = extensions;
            }
        }
        if let Ok(val) = std::env::var("MOTIF_CORPUS_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.corpus.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOTIF_CORPUS_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.corpus.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOTIF_CORPUS_CACHE_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                config.corpus.cache_capacity = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
