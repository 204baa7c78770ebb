use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use thiserror::Error;

use crate::sink::NodeId;

/// Failures of the render collaborators. The directive core itself never
/// fails; these only come out of a sink or a markdown renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown render node {0}")]
    UnknownNode(NodeId),
    #[error("render sink failed: {0}")]
    Sink(String),
    #[error("markdown rendering failed: {0}")]
    Markdown(String),
}

/// A non-fatal problem with a line: an ignored setting value or a footer
/// attachment with no message to attach to.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    pub span: Range<usize>,
    pub source_id: usize,
}

impl Warning {
    pub fn new(message: impl Into<String>, span: Range<usize>, source_id: usize) -> Self {
        Warning {
            message: message.into(),
            span,
            source_id,
        }
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::new(Severity::Warning)
            .with_message(&self.message)
            .with_labels(vec![Label::primary(self.source_id, self.span.clone())])
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
