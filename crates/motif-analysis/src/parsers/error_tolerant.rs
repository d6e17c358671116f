//! Tree validation: nesting depth, ERROR/MISSING nodes and mismatched JSX tags.
//!
//! Tree-sitter always produces a tree; anything it had to recover from is
//! surfaced here as a `ParseError` so malformed components never fingerprint.
//! The depth check runs first and without recursion; every later walk over
//! the tree recurses and relies on it.

use motif_core::errors::ParseError;
use tree_sitter::{Node, Tree, TreeCursor};

use super::types::Position;

/// Count ERROR and MISSING nodes in a tree-sitter tree.
pub fn count_errors(root: Node) -> (u32, Vec<Position>) {
    let mut count = 0u32;
    let mut positions = Vec::new();
    collect_errors(root, &mut count, &mut positions);
    (count, positions)
}

fn collect_errors(node: Node, count: &mut u32, positions: &mut Vec<Position>) {
    if node.is_error() || node.is_missing() {
        *count += 1;
        positions.push(Position::from_ts_node(&node));
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, count, positions);
    }
}

/// Fail with `TooDeep` on the first node more than `limit` levels below the root.
pub fn check_depth(root: Node, limit: u32) -> Result<(), ParseError> {
    let mut cursor = root.walk();
    let mut depth = 0u32;
    loop {
        if depth > limit {
            return Err(ParseError::TooDeep {
                limit,
                line: Position::from_ts_node(&cursor.node()).line + 1,
            });
        }
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        if !advance(&mut cursor, &mut depth) {
            return Ok(());
        }
    }
}

/// Move to the next sibling, climbing until one exists. False once the walk
/// is back at the root.
fn advance(cursor: &mut TreeCursor, depth: &mut u32) -> bool {
    loop {
        if cursor.goto_next_sibling() {
            return true;
        }
        if !cursor.goto_parent() {
            return false;
        }
        *depth -= 1;
    }
}

/// Reject trees nested deeper than `max_depth`, with recovered syntax errors,
/// or with mismatched JSX tags.
pub fn validate(tree: &Tree, source: &[u8], max_depth: u32) -> Result<(), ParseError> {
    let root = tree.root_node();
    check_depth(root, max_depth)?;
    if root.has_error() {
        let (count, positions) = count_errors(root);
        let first = positions.first().copied().unwrap_or_default();
        return Err(ParseError::Syntax {
            error_count: count.max(1),
            line: first.line + 1,
            column: first.column + 1,
        });
    }
    check_jsx_tags(root, source)
}

/// Tree-sitter does not require a closing tag to name its opening tag.
fn check_jsx_tags(node: Node, source: &[u8]) -> Result<(), ParseError> {
    if node.kind() == "jsx_element" {
        let opening = node
            .child_by_field_name("open_tag")
            .map(|n| tag_name(&n, source))
            .unwrap_or_default();
        let closing = node
            .child_by_field_name("close_tag")
            .map(|n| tag_name(&n, source))
            .unwrap_or_default();
        if opening != closing {
            return Err(ParseError::MismatchedTag {
                opening,
                closing,
                line: Position::from_ts_node(&node).line + 1,
            });
        }
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        check_jsx_tags(child, source)?;
    }
    Ok(())
}

/// Tag name of an opening or closing element with whitespace removed;
/// empty for fragments.
pub fn tag_name(element: &Node, source: &[u8]) -> String {
    element
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source).ok())
        .map(|t| t.chars().filter(|c| !c.is_whitespace()).collect())
        .unwrap_or_default()
}
