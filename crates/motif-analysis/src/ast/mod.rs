//! Component syntax layer.
//!
//! Normalizes the tree-sitter TSX tree into a small tagged union so the
//! fingerprint visitor can match node shapes exhaustively.

pub mod normalizer;
pub mod types;

pub use normalizer::ComponentNormalizer;
pub use types::{ComponentNode, FunctionKind, JsxAttrValue, JsxAttribute, ParamPattern};
