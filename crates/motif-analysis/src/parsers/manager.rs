//! ParserManager: one TSX parser per thread, validated parse results.

use std::cell::RefCell;

use motif_core::config::analysis_config::DEFAULT_MAX_DEPTH;
use motif_core::errors::ParseError;
use tree_sitter::{Node, Parser, Tree};

use super::error_tolerant;

thread_local! {
    static TSX_PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

fn new_tsx_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
        .map_err(|e| ParseError::LanguageInit(e.to_string()))?;
    Ok(parser)
}

/// A source string together with its validated syntax tree.
pub struct ParsedSource<'s> {
    pub source: &'s str,
    pub tree: Tree,
}

impl<'s> ParsedSource<'s> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn bytes(&self) -> &'s [u8] {
        self.source.as_bytes()
    }
}

/// Parses component source with the TSX grammar. Type annotations are
/// accepted without being checked.
#[derive(Debug, Clone, Copy)]
pub struct ParserManager {
    max_depth: u32,
}

impl Default for ParserManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserManager {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Parser that rejects trees nested deeper than `max_depth` nodes.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Parse and validate `source`. Any recovered syntax error fails the parse.
    pub fn parse<'s>(&self, source: &'s str) -> Result<ParsedSource<'s>, ParseError> {
        let tree = TSX_PARSER.with(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.is_none() {
                *slot = Some(new_tsx_parser()?);
            }
            slot.as_mut()
                .and_then(|parser| parser.parse(source, None))
                .ok_or(ParseError::NoTree)
        })?;

        error_tolerant::validate(&tree, source.as_bytes(), self.max_depth)?;
        Ok(ParsedSource { source, tree })
    }
}
