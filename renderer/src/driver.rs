use std::ops::Range;

use dialogue::Script;
use dialogue::config::DialogueConfig;
use dialogue::parser::Parser;

use crate::classes;
use crate::dispatcher::Dispatcher;
use crate::error::{RenderError, Warning};
use crate::executor::{Step, execute_directive};
use crate::instruction::RenderInstruction;
use crate::markdown::{CmarkRenderer, MarkdownContext, MarkdownRenderer};
use crate::session::{ParticipantRegistry, SessionState};
use crate::sink::tree::ElementTree;
use crate::sink::{NodeId, RenderSink, Role};

/// A rendered message still waiting to learn whether it gets a footer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMessage {
    /// Message box the footer goes into.
    pub bubble: NodeId,
    pub default_footer: Option<String>,
    pub markdown: bool,
    pub span: Range<usize>,
}

/// The one-message lookback slot used for footer attachment.
///
/// Every line after a message resolves the slot: an explicit `::` payload
/// wins, otherwise the message's default footer (if any) is used.
#[derive(Debug, Default)]
pub struct PendingFooter {
    slot: Option<PendingMessage>,
}

impl PendingFooter {
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn hold(&mut self, message: PendingMessage) {
        self.slot = Some(message);
    }

    /// Empty the slot and return the message with the footer it should get,
    /// if it gets one.
    pub fn resolve(&mut self, explicit: Option<String>) -> Option<(PendingMessage, String)> {
        let message = self.slot.take()?;
        let footer = explicit.or_else(|| message.default_footer.clone())?;
        Some((message, footer))
    }
}

/// What a render produced besides the nodes themselves.
#[derive(Debug, Clone, Default)]
pub struct RenderOutcome {
    pub warnings: Vec<Warning>,
    pub registry: ParticipantRegistry,
}

/// Parse and render a block under the sink's root.
pub fn render_dialogue(
    source: &str,
    config: &DialogueConfig,
    sink: &mut dyn RenderSink,
    markdown: &mut dyn MarkdownRenderer,
    context: &MarkdownContext,
) -> Result<RenderOutcome, RenderError> {
    let script = Parser::new(source.to_string(), 0).parse();
    render_script(&script, config, sink, markdown, context)
}

/// Render an already-parsed block under the sink's root.
pub fn render_script(
    script: &Script,
    config: &DialogueConfig,
    sink: &mut dyn RenderSink,
    markdown: &mut dyn MarkdownRenderer,
    context: &MarkdownContext,
) -> Result<RenderOutcome, RenderError> {
    let root = sink.root();
    let wrapper = sink.create_element(root, Role::Wrapper, &[classes::DIALOGUE_WRAPPER])?;
    let mut state = SessionState::new(config, wrapper);
    let mut warnings = Vec::new();
    let mut pending = PendingFooter::default();
    let mut dispatcher = Dispatcher::new(sink, markdown, context);

    for line in &script.lines {
        let step = execute_directive(line, &mut state, &mut warnings, script.source_id);

        let mut explicit = None;
        let mut next = None;
        match step {
            Step::Render(RenderInstruction::Message(message)) => {
                let bubble = dispatcher.render_message(&message, &mut state)?;
                next = Some(PendingMessage {
                    bubble,
                    default_footer: message.default_footer,
                    markdown: message.markdown_footer,
                    span: message.span,
                });
            }
            Step::Render(instruction) => {
                dispatcher.dispatch(&instruction, &mut state)?;
            }
            Step::AttachFooter(content) => explicit = Some(content),
            Step::Nothing => {}
        }

        let dangling = explicit.is_some() && pending.is_empty();
        if let Some((message, footer)) = pending.resolve(explicit) {
            log::debug!("attaching footer {:?} to message at {:?}", footer, message.span);
            dispatcher.render_footer(message.bubble, &footer, message.markdown)?;
        } else if dangling {
            log::debug!("footer attachment at {:?} has no message", line.span);
            warnings.push(Warning::new(
                "footer attachment does not directly follow a message; ignored",
                line.span.clone(),
                script.source_id,
            ));
        }

        if let Some(message) = next {
            pending.hold(message);
        }
    }

    if let Some((message, footer)) = pending.resolve(None) {
        dispatcher.render_footer(message.bubble, &footer, message.markdown)?;
    }

    Ok(RenderOutcome {
        warnings,
        registry: state.registry,
    })
}

/// Renders blocks with a fixed configuration and markdown renderer.
pub struct DialogueRenderer<M: MarkdownRenderer = CmarkRenderer> {
    config: DialogueConfig,
    markdown: M,
}

impl DialogueRenderer<CmarkRenderer> {
    pub fn new(config: DialogueConfig) -> Self {
        DialogueRenderer {
            config,
            markdown: CmarkRenderer::default(),
        }
    }
}

impl<M: MarkdownRenderer> DialogueRenderer<M> {
    pub fn with_markdown(config: DialogueConfig, markdown: M) -> Self {
        DialogueRenderer { config, markdown }
    }

    pub fn markdown(&self) -> &M {
        &self.markdown
    }

    pub fn render(
        &mut self,
        source: &str,
        sink: &mut dyn RenderSink,
        context: &MarkdownContext,
    ) -> Result<RenderOutcome, RenderError> {
        render_dialogue(source, &self.config, sink, &mut self.markdown, context)
    }

    /// Render into a fresh [`ElementTree`].
    pub fn render_to_tree(
        &mut self,
        source: &str,
        context: &MarkdownContext,
    ) -> Result<(ElementTree, RenderOutcome), RenderError> {
        let mut tree = ElementTree::new();
        let outcome = self.render(source, &mut tree, context)?;
        Ok((tree, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(default_footer: Option<&str>) -> PendingMessage {
        PendingMessage {
            bubble: NodeId(3),
            default_footer: default_footer.map(str::to_string),
            markdown: false,
            span: 0..3,
        }
    }

    #[test]
    fn empty_slot_resolves_to_nothing() {
        let mut slot = PendingFooter::default();
        assert!(slot.resolve(None).is_none());
        assert!(slot.resolve(Some("bye".to_string())).is_none());
    }

    #[test]
    fn explicit_footer_wins_over_default() {
        let mut slot = PendingFooter::default();
        slot.hold(pending(Some("sent")));
        let (message, footer) = slot.resolve(Some("bye".to_string())).unwrap();
        assert_eq!(message.bubble, NodeId(3));
        assert_eq!(footer, "bye");
        assert!(slot.is_empty());
    }

    #[test]
    fn default_footer_used_without_explicit() {
        let mut slot = PendingFooter::default();
        slot.hold(pending(Some("sent")));
        assert_eq!(slot.resolve(None).unwrap().1, "sent");
    }

    #[test]
    fn no_footer_still_clears_slot() {
        let mut slot = PendingFooter::default();
        slot.hold(pending(None));
        assert!(slot.resolve(None).is_none());
        assert!(slot.is_empty());
        // A later explicit footer finds nothing to attach to.
        assert!(slot.resolve(Some("late".to_string())).is_none());
    }

    #[test]
    fn holding_replaces_previous_message() {
        let mut slot = PendingFooter::default();
        slot.hold(pending(Some("first")));
        slot.hold(PendingMessage {
            bubble: NodeId(9),
            ..pending(Some("second"))
        });
        let (message, footer) = slot.resolve(None).unwrap();
        assert_eq!(message.bubble, NodeId(9));
        assert_eq!(footer, "second");
    }

    #[test]
    fn empty_explicit_footer_is_still_attached() {
        let mut slot = PendingFooter::default();
        slot.hold(pending(None));
        assert_eq!(slot.resolve(Some(String::new())).unwrap().1, "");
    }
}
