//! Corpus loading: list component files in one directory, fingerprint each
//! member, and keep the failures as warnings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use motif_core::config::CorpusConfig;
use motif_core::errors::{AnalysisResult, CorpusError};
use rayon::prelude::*;

use crate::fingerprint::{ComponentFingerprint, FingerprintCache, SourceFingerprinter};

/// One fingerprinted corpus member.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    /// File name within the corpus directory.
    pub id: String,
    pub path: PathBuf,
    pub fingerprint: Arc<ComponentFingerprint>,
}

/// Fingerprinted corpus, ordered by member id.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Build a corpus from already-fingerprinted members.
    pub fn from_entries(mut entries: Vec<CorpusEntry>) -> Self {
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Self { entries }
    }

    /// List, read, and fingerprint every component file directly inside `dir`.
    pub fn load(
        dir: &Path,
        fingerprinter: &SourceFingerprinter,
        config: &CorpusConfig,
        cache: Option<&FingerprintCache>,
    ) -> Result<AnalysisResult<Corpus>, CorpusError> {
        let listing = list_component_files(dir, config)?;
        Ok(fingerprint_files(listing, fingerprinter, config, cache))
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CorpusEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Component files directly inside `dir` (no recursion, hidden files
/// skipped), sorted by file name. Unlistable entries become warnings; a
/// missing or unreadable directory is an error.
pub fn list_component_files(
    dir: &Path,
    config: &CorpusConfig,
) -> Result<AnalysisResult<Vec<PathBuf>>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: dir.display().to_string(),
        });
    }

    let extensions = config.effective_extensions();
    let mut result = AnalysisResult::new(Vec::new());

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to list corpus entry");
                result.add_warning(CorpusError::Walk {
                    path: dir.display().to_string(),
                    message: e.to_string(),
                });
                continue;
            }
        };
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)));
        if matches_extension {
            result.data.push(path);
        }
    }

    result.data.sort_by_key(|p| member_id(p));
    Ok(result)
}

/// Read and fingerprint listed files. Order of the listing is preserved.
pub fn fingerprint_files(
    listing: AnalysisResult<Vec<PathBuf>>,
    fingerprinter: &SourceFingerprinter,
    config: &CorpusConfig,
    cache: Option<&FingerprintCache>,
) -> AnalysisResult<Corpus> {
    let AnalysisResult {
        data: paths,
        warnings,
    } = listing;
    let max_file_size = config.effective_max_file_size();

    let load = |path: &PathBuf| load_member(path, fingerprinter, max_file_size, cache);
    let loaded: Vec<Result<CorpusEntry, CorpusError>> = if config.effective_parallel() {
        paths.par_iter().map(load).collect()
    } else {
        paths.iter().map(load).collect()
    };

    let mut result = AnalysisResult::new(Corpus::default());
    result.warnings = warnings;
    for outcome in loaded {
        match outcome {
            Ok(entry) => result.data.entries.push(entry),
            Err(e) => {
                tracing::warn!(file = %e.path(), error = %e, "skipping corpus member");
                result.add_warning(e);
            }
        }
    }

    tracing::debug!(
        members = result.data.len(),
        skipped = result.warning_count(),
        "corpus fingerprinted"
    );
    result
}

fn load_member(
    path: &Path,
    fingerprinter: &SourceFingerprinter,
    max_file_size: u64,
    cache: Option<&FingerprintCache>,
) -> Result<CorpusEntry, CorpusError> {
    let display = path.display().to_string();

    let size = std::fs::metadata(path)
        .map_err(|e| CorpusError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?
        .len();
    if size > max_file_size {
        return Err(CorpusError::TooLarge {
            path: display,
            size,
            limit: max_file_size,
        });
    }

    let source = std::fs::read_to_string(path).map_err(|e| CorpusError::Read {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let fingerprint = match cache {
        Some(cache) => cache.get_or_compute(&source, |s| fingerprinter.fingerprint(s)),
        None => fingerprinter.fingerprint(&source).map(Arc::new),
    }
    .map_err(|source| CorpusError::Parse {
        path: display,
        source,
    })?;

    Ok(CorpusEntry {
        id: member_id(path),
        path: path.to_path_buf(),
        fingerprint,
    })
}

fn member_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
