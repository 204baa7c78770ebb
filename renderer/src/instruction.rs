use std::ops::Range;

use dialogue::directive::Side;

/// Who a message belongs to, as resolved when the message line was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParticipant {
    pub title: String,
    /// Enforced id when one was given, else the registry ordinal.
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageInstruction {
    pub side: Side,
    pub content: String,
    pub participant: ResolvedParticipant,
    /// Footer to attach when the next line is not an explicit `::`.
    pub default_footer: Option<String>,
    /// Whether a footer for this message goes through the markdown renderer.
    pub markdown_footer: bool,
    pub span: Range<usize>,
}

/// What the executor asks the dispatcher to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    Message(MessageInstruction),
    Comment(String),
    Delimiter,
    UnparsedLine(String),
}
