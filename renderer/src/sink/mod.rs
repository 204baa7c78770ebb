pub mod tree;

use std::fmt;

use dialogue::directive::Side;

use crate::error::RenderError;

/// Handle to a node created by a [`RenderSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a rendered node is, independent of its CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The mount point handed in by the host.
    Root,
    /// One per dialogue block, holds everything else.
    Wrapper,
    /// Outer wrapper of a message, aligned by side.
    Message(Side),
    /// The message box: title, content and footer.
    Bubble,
    Title,
    Content,
    Footer,
    Comment,
    CommentBody,
    Delimiter,
    DelimiterLine,
    DelimiterDot,
    Unparsed,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Root => "root",
            Role::Wrapper => "wrapper",
            Role::Message(Side::Left) => "message-left",
            Role::Message(Side::Right) => "message-right",
            Role::Message(Side::Center) => "message-center",
            Role::Bubble => "bubble",
            Role::Title => "title",
            Role::Content => "content",
            Role::Footer => "footer",
            Role::Comment => "comment",
            Role::CommentBody => "comment-body",
            Role::Delimiter => "delimiter",
            Role::DelimiterLine => "delimiter-line",
            Role::DelimiterDot => "dot",
            Role::Unparsed => "unparsed",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The capability that materializes visual nodes.
///
/// Nodes are only ever appended, in document order. Every operation may fail;
/// failures propagate to the caller of the driver unchanged.
pub trait RenderSink {
    /// The mount point the dialogue is rendered under.
    fn root(&self) -> NodeId;

    /// Append a new child element to `parent`.
    fn create_element(
        &mut self,
        parent: NodeId,
        role: Role,
        classes: &[&str],
    ) -> Result<NodeId, RenderError>;

    /// Replace the node's content with plain text.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), RenderError>;

    /// Append already-rendered HTML to the node's content.
    fn append_html(&mut self, node: NodeId, html: &str) -> Result<(), RenderError>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), RenderError>;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), RenderError>;
}
