//! Corpus loading configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx"];
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Configuration for reading a corpus directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    /// Component file extensions, without the dot. Default: `tsx`.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Files larger than this (bytes) are skipped with a warning. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Fingerprint corpus files on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Fingerprint cache entries; 0 disables the cache. Default: 0.
    pub cache_capacity: Option<u64>,
}

impl CorpusConfig {
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect()
        }
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity.unwrap_or(0)
    }
}
