pub mod classify;
pub mod lines;

pub use classify::classify_line;
pub use lines::{SourceLine, split_lines};

use crate::Script;
use crate::directive::Line;

/// Parser entry point.
pub struct Parser {
    source: String,
    file_id: usize,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// Split the block into lines and classify each of them.
    ///
    /// Never fails: every line is some directive, with `Unparsed` as the
    /// fallback.
    pub fn parse(&self) -> Script {
        let lines = split_lines(&self.source)
            .into_iter()
            .map(|line| {
                let directive = classify_line(line.text);
                log::trace!(
                    "line {:?} classified as {}",
                    line.text,
                    directive.kind_name()
                );
                Line {
                    directive,
                    span: line.span,
                }
            })
            .collect();

        Script {
            lines,
            source_id: self.file_id,
        }
    }
}
