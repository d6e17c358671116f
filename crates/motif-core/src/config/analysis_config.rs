//! Fingerprinting and classification configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NOVELTY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_STYLE_ATTRIBUTES: &[&str] = &["className", "css"];
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Which function declarations contribute to a fingerprint's prop set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropScope {
    /// First parameter of every function declaration in the file.
    #[default]
    AllFunctions,
    /// Only the default-exported function.
    DefaultExport,
}

impl std::str::FromStr for PropScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_functions" | "all" => Ok(Self::AllFunctions),
            "default_export" => Ok(Self::DefaultExport),
            other => Err(format!("unknown prop scope '{other}'")),
        }
    }
}

/// Configuration for fingerprinting and classification.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Similarity below which a consistent candidate counts as novel. Default: 0.5.
    pub novelty_threshold: Option<f64>,
    /// JSX attributes whose string-literal values are style tokens.
    /// Default: `className`, `css`.
    #[serde(default)]
    pub style_attributes: Vec<String>,
    /// Prop extraction scope. Default: all function declarations.
    pub prop_scope: Option<PropScope>,
    /// Deepest syntax tree accepted, counted in tree-sitter nodes from the
    /// root. Deeper sources fail to parse. Default: 256.
    pub max_depth: Option<u32>,
}

impl AnalysisConfig {
    pub fn effective_novelty_threshold(&self) -> f64 {
        self.novelty_threshold.unwrap_or(DEFAULT_NOVELTY_THRESHOLD)
    }

    pub fn effective_style_attributes(&self) -> Vec<String> {
        if self.style_attributes.is_empty() {
            DEFAULT_STYLE_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
        } else {
            self.style_attributes.clone()
        }
    }

    pub fn effective_prop_scope(&self) -> PropScope {
        self.prop_scope.unwrap_or_default()
    }

    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
