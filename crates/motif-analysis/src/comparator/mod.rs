//! Pattern comparator: score a candidate against every corpus member and
//! classify it as novel/derivative and consistent/inconsistent.

pub mod classify;
pub mod corpus;
pub mod similarity;
pub mod types;

use std::path::Path;
use std::sync::Arc;

use motif_core::config::MotifConfig;
use motif_core::errors::{AnalysisError, AnalysisResult, ParseError};

pub use corpus::{Corpus, CorpusEntry};
pub use similarity::{jaccard_similarity, score, SimilarityBreakdown};
pub use types::{PatternMatchResult, RankedMatch};

use crate::fingerprint::{ComponentFingerprint, FingerprintCache, SourceFingerprinter};

/// Best-scoring corpus member so far.
#[derive(Debug, Clone, Copy)]
pub struct BestMatch<'c> {
    pub entry: &'c CorpusEntry,
    pub breakdown: SimilarityBreakdown,
}

impl<'c> BestMatch<'c> {
    /// Combine two partial maxima; `earlier` wins ties.
    pub fn prefer(earlier: Option<Self>, later: Option<Self>) -> Option<Self> {
        match (earlier, later) {
            (Some(a), Some(b)) if b.breakdown.total > a.breakdown.total => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        }
    }
}

/// Reduce the corpus to its best match. Only a strictly positive score can
/// match, and ties go to the member that sorts first.
pub fn best_match<'c>(
    candidate: &ComponentFingerprint,
    corpus: &'c Corpus,
) -> Option<BestMatch<'c>> {
    corpus.entries().iter().fold(None, |best, entry| {
        let breakdown = score(candidate, &entry.fingerprint);
        let scored = (breakdown.total > 0.0).then_some(BestMatch { entry, breakdown });
        BestMatch::prefer(best, scored)
    })
}

pub struct PatternComparator {
    fingerprinter: SourceFingerprinter,
    config: MotifConfig,
    cache: Option<FingerprintCache>,
}

impl Default for PatternComparator {
    fn default() -> Self {
        Self::new(MotifConfig::default())
    }
}

impl PatternComparator {
    pub fn new(config: MotifConfig) -> Self {
        let capacity = config.corpus.effective_cache_capacity();
        Self {
            fingerprinter: SourceFingerprinter::new(&config.analysis),
            cache: (capacity > 0).then(|| FingerprintCache::new(capacity)),
            config,
        }
    }

    pub fn config(&self) -> &MotifConfig {
        &self.config
    }

    pub fn fingerprinter(&self) -> &SourceFingerprinter {
        &self.fingerprinter
    }

    pub fn cache(&self) -> Option<&FingerprintCache> {
        self.cache.as_ref()
    }

    /// Fingerprint `source`, going through the cache when one is configured.
    pub fn fingerprint(&self, source: &str) -> Result<Arc<ComponentFingerprint>, ParseError> {
        match &self.cache {
            Some(cache) => cache.get_or_compute(source, |s| self.fingerprinter.fingerprint(s)),
            None => self.fingerprinter.fingerprint(source).map(Arc::new),
        }
    }

    /// Fingerprint and load every component file directly inside `dir`.
    pub fn load_corpus(&self, dir: &Path) -> Result<AnalysisResult<Corpus>, AnalysisError> {
        Ok(Corpus::load(
            dir,
            &self.fingerprinter,
            &self.config.corpus,
            self.cache.as_ref(),
        )?)
    }

    /// Compare candidate source against the corpus in `corpus_dir`.
    ///
    /// A candidate that fails to parse aborts the call; corpus members that
    /// fail are skipped and returned as warnings.
    pub fn compare(
        &self,
        candidate_source: &str,
        corpus_dir: &Path,
    ) -> Result<AnalysisResult<PatternMatchResult>, AnalysisError> {
        let listing = corpus::list_component_files(corpus_dir, &self.config.corpus)?;
        let candidate = self.fingerprint(candidate_source)?;
        let corpus = corpus::fingerprint_files(
            listing,
            &self.fingerprinter,
            &self.config.corpus,
            self.cache.as_ref(),
        );
        let outcome = corpus.map(|corpus| self.compare_fingerprint(&candidate, &corpus));

        tracing::debug!(
            corpus = %corpus_dir.display(),
            similarity = outcome.data.similarity_score,
            matched = ?outcome.data.matched_component,
            novel = outcome.data.is_novel,
            consistent = outcome.data.is_consistent,
            "candidate classified"
        );
        Ok(outcome)
    }

    /// Classify an already-fingerprinted candidate against a loaded corpus.
    pub fn compare_fingerprint(
        &self,
        candidate: &ComponentFingerprint,
        corpus: &Corpus,
    ) -> PatternMatchResult {
        let best = best_match(candidate, corpus);

        let similarity_score = best.map_or(0.0, |b| b.breakdown.total);
        let is_consistent = best.is_some_and(|b| {
            classify::shares_style_convention(
                &candidate.style_tokens,
                &b.entry.fingerprint.style_tokens,
            )
        });
        let is_novel = classify::is_novel(
            similarity_score,
            is_consistent,
            self.config.analysis.effective_novelty_threshold(),
        );

        PatternMatchResult {
            is_novel,
            is_consistent,
            similarity_score,
            matched_component: best.map(|b| b.entry.id.clone()),
        }
    }

    /// Every corpus member scored against `candidate`, best first; ties keep
    /// corpus order.
    pub fn rank(&self, candidate: &ComponentFingerprint, corpus: &Corpus) -> Vec<RankedMatch> {
        let mut ranked: Vec<RankedMatch> = corpus
            .entries()
            .iter()
            .map(|entry| RankedMatch {
                component: entry.id.clone(),
                breakdown: score(candidate, &entry.fingerprint),
            })
            .collect();
        ranked.sort_by(|a, b| b.breakdown.total.total_cmp(&a.breakdown.total));
        ranked
    }
}
