//! motif-analysis: component pattern analysis engine.
//!
//! - Parsers: tree-sitter TSX parsing with strict validation
//! - AST: normalization into the `ComponentNode` tagged union
//! - Fingerprint: name, props, style tokens, structural signature
//! - Comparator: corpus loading, Jaccard similarity, novelty/consistency

pub mod ast;
pub mod comparator;
pub mod fingerprint;
pub mod parsers;

pub use comparator::{
    best_match, jaccard_similarity, score, BestMatch, Corpus, CorpusEntry, PatternComparator,
    PatternMatchResult, RankedMatch, SimilarityBreakdown,
};
pub use fingerprint::{fingerprint, ComponentFingerprint, FingerprintCache, SourceFingerprinter};
pub use parsers::ParserManager;
