//! Pairwise fingerprint similarity: mean of prop Jaccard, style-token
//! Jaccard, and structural-signature equality.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::fingerprint::ComponentFingerprint;

/// Compute exact Jaccard similarity between two sets.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
/// Returns 0.0 if both sets are empty.
pub fn jaccard_similarity(set_a: &BTreeSet<String>, set_b: &BTreeSet<String>) -> f64 {
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.len() + set_b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// The three components of a similarity score and their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityBreakdown {
    pub prop_score: f64,
    pub style_score: f64,
    pub structure_score: f64,
    /// Mean of the three scores, in `[0, 1]`.
    pub total: f64,
}

/// Score `member` against `candidate`.
pub fn score(
    candidate: &ComponentFingerprint,
    member: &ComponentFingerprint,
) -> SimilarityBreakdown {
    let prop_score = jaccard_similarity(&candidate.props, &member.props);
    let style_score = jaccard_similarity(&candidate.style_tokens, &member.style_tokens);
    let structure_score = if candidate.structural_signature == member.structural_signature {
        1.0
    } else {
        0.0
    };
    SimilarityBreakdown {
        prop_score,
        style_score,
        structure_score,
        total: (prop_score + style_score + structure_score) / 3.0,
    }
}
