//! Source positions.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// Zero-based line/column position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn from_ts_node(node: &Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row as u32,
            column: start.column as u32,
        }
    }
}
