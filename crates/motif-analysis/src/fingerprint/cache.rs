//! Fingerprint cache: moka-backed, keyed by the xxh3 hash of the source text.
//!
//! A cache belongs to one `SourceFingerprinter` configuration; sharing it
//! between fingerprinters with different style attributes or prop scopes
//! would return fingerprints computed under the other configuration.

use std::sync::Arc;

use moka::sync::Cache;
use motif_core::errors::ParseError;
use xxhash_rust::xxh3::xxh3_64;

use super::types::ComponentFingerprint;

pub struct FingerprintCache {
    cache: Cache<u64, Arc<ComponentFingerprint>>,
}

impl FingerprintCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::new(capacity),
        }
    }

    pub fn content_key(source: &str) -> u64 {
        xxh3_64(source.as_bytes())
    }

    /// Look up a cached fingerprint for `source`.
    pub fn get(&self, source: &str) -> Option<Arc<ComponentFingerprint>> {
        self.cache.get(&Self::content_key(source))
    }

    /// Return the cached fingerprint or compute and insert it.
    /// Parse failures are not cached.
    pub fn get_or_compute<F>(
        &self,
        source: &str,
        compute: F,
    ) -> Result<Arc<ComponentFingerprint>, ParseError>
    where
        F: FnOnce(&str) -> Result<ComponentFingerprint, ParseError>,
    {
        let key = Self::content_key(source);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let fingerprint = Arc::new(compute(source)?);
        self.cache.insert(key, Arc::clone(&fingerprint));
        Ok(fingerprint)
    }

    /// Approximate number of cached entries.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
