use crate::classes;
use crate::error::RenderError;
use crate::instruction::{MessageInstruction, RenderInstruction};
use crate::markdown::{MarkdownContext, MarkdownRenderer};
use crate::session::SessionState;
use crate::sink::{NodeId, RenderSink, Role};

/// Turns render instructions into nodes through the sink and the markdown
/// renderer. Holds no dialogue state of its own.
pub struct Dispatcher<'a> {
    sink: &'a mut dyn RenderSink,
    markdown: &'a mut dyn MarkdownRenderer,
    context: &'a MarkdownContext,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        sink: &'a mut dyn RenderSink,
        markdown: &'a mut dyn MarkdownRenderer,
        context: &'a MarkdownContext,
    ) -> Self {
        Dispatcher {
            sink,
            markdown,
            context,
        }
    }

    /// Render one instruction. For a message, returns the message box node a
    /// footer will later be attached to.
    pub fn dispatch(
        &mut self,
        instruction: &RenderInstruction,
        state: &mut SessionState,
    ) -> Result<Option<NodeId>, RenderError> {
        match instruction {
            RenderInstruction::Message(message) => self.render_message(message, state).map(Some),
            RenderInstruction::Comment(content) => {
                self.render_comment(content, state)?;
                Ok(None)
            }
            RenderInstruction::Delimiter => {
                self.render_delimiter(state)?;
                Ok(None)
            }
            RenderInstruction::UnparsedLine(content) => {
                self.render_unparsed(content, state)?;
                Ok(None)
            }
        }
    }

    /// Message wrapper, box, optional title and content. The footer is not
    /// rendered here; see [`Dispatcher::render_footer`].
    pub fn render_message(
        &mut self,
        message: &MessageInstruction,
        state: &mut SessionState,
    ) -> Result<NodeId, RenderError> {
        let wrapper = self.sink.create_element(
            state.wrapper,
            Role::Message(message.side),
            &[classes::BLOCK_WRAPPER, classes::message_wrapper(message.side)],
        )?;
        if !message.participant.title.is_empty() {
            self.sink
                .set_attribute(wrapper, "data-participant", &message.participant.title)?;
        }
        if let Some(id) = &message.participant.id {
            self.sink.set_attribute(wrapper, "data-participant-id", id)?;
        }

        let bubble = self
            .sink
            .create_element(wrapper, Role::Bubble, &[classes::MESSAGE])?;
        self.sink
            .set_style(bubble, "max-width", &state.message_max_width)?;

        if state.participants[message.side].should_render_title(state.title_mode) {
            let markdown = state.markdown.title;
            self.render_text(
                bubble,
                Role::Title,
                classes::MESSAGE_TITLE,
                &message.participant.title,
                markdown,
            )?;
        }

        let markdown = state.markdown.content;
        self.render_text(
            bubble,
            Role::Content,
            classes::MESSAGE_CONTENT,
            &message.content,
            markdown,
        )?;

        Ok(bubble)
    }

    /// Attach footer text to a message box rendered earlier.
    pub fn render_footer(
        &mut self,
        bubble: NodeId,
        content: &str,
        markdown: bool,
    ) -> Result<NodeId, RenderError> {
        self.render_text(bubble, Role::Footer, classes::MESSAGE_FOOTER, content, markdown)
    }

    pub fn render_comment(
        &mut self,
        content: &str,
        state: &SessionState,
    ) -> Result<NodeId, RenderError> {
        let wrapper = self.sink.create_element(
            state.wrapper,
            Role::Comment,
            &[classes::BLOCK_WRAPPER, classes::COMMENT_WRAPPER],
        )?;
        let body = self.render_text(
            wrapper,
            Role::CommentBody,
            classes::COMMENT,
            content,
            state.markdown.comment,
        )?;
        self.sink
            .set_style(body, "max-width", &state.comment_max_width)?;
        Ok(wrapper)
    }

    pub fn render_delimiter(&mut self, state: &SessionState) -> Result<NodeId, RenderError> {
        let wrapper = self.sink.create_element(
            state.wrapper,
            Role::Delimiter,
            &[classes::BLOCK_WRAPPER, classes::DELIMITER_WRAPPER],
        )?;
        let line = self
            .sink
            .create_element(wrapper, Role::DelimiterLine, &[classes::DELIMITER])?;
        for _ in 0..3 {
            self.sink
                .create_element(line, Role::DelimiterDot, &[classes::DELIMITER_DOT])?;
        }
        Ok(wrapper)
    }

    pub fn render_unparsed(
        &mut self,
        content: &str,
        state: &SessionState,
    ) -> Result<NodeId, RenderError> {
        let node = self
            .sink
            .create_element(state.wrapper, Role::Unparsed, &[classes::UNPARSED])?;
        self.sink.set_text(node, content)?;
        Ok(node)
    }

    /// Create a child node and fill it either verbatim or through the
    /// markdown renderer.
    fn render_text(
        &mut self,
        parent: NodeId,
        role: Role,
        class: &str,
        text: &str,
        markdown: bool,
    ) -> Result<NodeId, RenderError> {
        if markdown {
            let node = self
                .sink
                .create_element(parent, role, &[class, classes::RENDER])?;
            self.markdown
                .render_markdown(text, node, &mut *self.sink, self.context)?;
            Ok(node)
        } else {
            let node = self.sink.create_element(parent, role, &[class])?;
            self.sink.set_text(node, text)?;
            Ok(node)
        }
    }
}
