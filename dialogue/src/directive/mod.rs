pub mod setting;
pub mod side;

use std::ops::Range;

pub use setting::{FooterMode, Setting, TitleMode, parse_toggle};
pub use side::{BySide, Side};

/// A single non-empty line of a dialogue block and what it means.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub directive: Directive,
    /// Byte span of the trimmed line in the block source.
    pub span: Range<usize>,
}

/// The meaning of one line. Exactly one variant applies to any line.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Participant title: `left: Alice`, `r-2: Bob`, `c: Narrator`.
    Title {
        side: Side,
        title: String,
        enforced_id: Option<String>,
    },
    /// Default footer text for a side: `lf: sent`, `rightFooter: read`.
    FooterDefault { side: Side, content: String },
    /// A named setting such as `titleMode: all`. The value is trimmed and,
    /// for enum and boolean settings, lower-cased.
    Setting { setting: Setting, value: String },
    /// `-` or `delimiter`
    Delimiter,
    /// `#text`
    Comment(String),
    /// `<text`, `>text`, `=text`
    Message { side: Side, content: String },
    /// `::text` -- explicit footer for the message on the previous line.
    FooterAttachment(String),
    /// Anything else, kept verbatim.
    Unparsed(String),
}

impl Directive {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Directive::Title { .. } => "title",
            Directive::FooterDefault { .. } => "footer default",
            Directive::Setting { .. } => "setting",
            Directive::Delimiter => "delimiter",
            Directive::Comment(_) => "comment",
            Directive::Message { .. } => "message",
            Directive::FooterAttachment(_) => "footer attachment",
            Directive::Unparsed(_) => "unparsed",
        }
    }
}
