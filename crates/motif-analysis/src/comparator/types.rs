//! Comparison result types.

use serde::{Deserialize, Serialize};

use super::similarity::SimilarityBreakdown;

/// Classification of one candidate against a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatternMatchResult {
    pub is_novel: bool,
    pub is_consistent: bool,
    /// Highest similarity against any corpus member, in `[0, 1]`.
    pub similarity_score: f64,
    /// Id of the member that produced `similarity_score`.
    pub matched_component: Option<String>,
}

/// One corpus member scored against a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub component: String,
    pub breakdown: SimilarityBreakdown,
}
