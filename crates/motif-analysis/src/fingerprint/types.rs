//! Fingerprint types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Structural summary of one component's source.
///
/// Ordered sets keep equality and serialization independent of extraction
/// order, so identical source always yields an identical fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFingerprint {
    /// Name bound to the default export; empty if indeterminable.
    pub name: String,
    pub props: BTreeSet<String>,
    pub style_tokens: BTreeSet<String>,
    /// Opening tag of the first rendered-tree node; empty if none.
    pub structural_signature: String,
}

impl ComponentFingerprint {
    /// Whether the source rendered any JSX at all.
    pub fn has_rendered_tree(&self) -> bool {
        !self.structural_signature.is_empty()
    }

    /// Stable xxh3-64 hex digest over every field.
    pub fn digest(&self) -> String {
        // Unit/record separators cannot appear in identifiers and are
        // vanishingly rare in class names.
        let mut canonical = String::new();
        canonical.push_str(&self.name);
        for set in [&self.props, &self.style_tokens] {
            canonical.push('\u{1e}');
            for item in set {
                canonical.push_str(item);
                canonical.push('\u{1f}');
            }
        }
        canonical.push('\u{1e}');
        canonical.push_str(&self.structural_signature);
        format!("{:016x}", xxh3_64(canonical.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(props: &[&str]) -> ComponentFingerprint {
        ComponentFingerprint {
            name: "Btn".to_string(),
            props: props.iter().map(|s| s.to_string()).collect(),
            style_tokens: BTreeSet::new(),
            structural_signature: "<button>".to_string(),
        }
    }

    #[test]
    fn test_digest_ignores_insertion_order() {
        assert_eq!(fp(&["a", "b"]).digest(), fp(&["b", "a"]).digest());
        assert_ne!(fp(&["a", "b"]).digest(), fp(&["ab"]).digest());
        assert_eq!(fp(&[]).digest().len(), 16);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(fp(&["label"])).unwrap();
        assert_eq!(json["structuralSignature"], "<button>");
        assert_eq!(json["styleTokens"], serde_json::json!([]));
        assert_eq!(json["props"], serde_json::json!(["label"]));
    }
}
