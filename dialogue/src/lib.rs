pub mod config;
pub mod directive;
pub mod parser;

use crate::directive::Line;

/// A classified dialogue block.
#[derive(Debug, Clone)]
pub struct Script {
    /// Non-empty lines in document order, each with its directive.
    pub lines: Vec<Line>,
    /// The source file ID (for error reporting with codespan-reporting).
    pub source_id: usize,
}

impl Script {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
