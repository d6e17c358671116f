//! Consistency and novelty classification.

use std::collections::BTreeSet;

/// True if any candidate token is a substring or a superstring of any
/// member token (`"card"` vs `"card-unique"`).
pub fn shares_style_convention(candidate: &BTreeSet<String>, member: &BTreeSet<String>) -> bool {
    candidate.iter().any(|c| {
        member
            .iter()
            .any(|m| m.contains(c.as_str()) || c.contains(m.as_str()))
    })
}

/// Novel: dissimilar from every corpus member yet still speaking the
/// corpus's style vocabulary.
pub fn is_novel(max_similarity: f64, is_consistent: bool, threshold: f64) -> bool {
    max_similarity < threshold && is_consistent
}
