//! Tree-sitter parser subsystem: TSX grammar, thread_local instances,
//! strict validation of the resulting tree.

pub mod error_tolerant;
pub mod manager;
pub mod types;

pub use manager::{ParsedSource, ParserManager};
pub use types::Position;
