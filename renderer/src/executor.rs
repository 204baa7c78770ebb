use dialogue::directive::{Directive, FooterMode, Line, Setting, TitleMode, parse_toggle};

use crate::error::Warning;
use crate::instruction::{MessageInstruction, RenderInstruction, ResolvedParticipant};
use crate::session::SessionState;

/// Outcome of executing one line against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Only session state changed (or nothing did).
    Nothing,
    Render(RenderInstruction),
    /// Explicit footer for the message on the previous line.
    AttachFooter(String),
}

/// Apply one classified line to the session.
///
/// Settings with values outside their grammar leave the session untouched and
/// push a warning; nothing here ever fails.
pub fn execute_directive(
    line: &Line,
    state: &mut SessionState,
    warnings: &mut Vec<Warning>,
    source_id: usize,
) -> Step {
    match &line.directive {
        Directive::Title {
            side,
            title,
            enforced_id,
        } => {
            log::debug!("{} title set to {:?}", side, title);
            state.participants[*side].retitle(title.clone(), enforced_id.clone());
            Step::Nothing
        }
        Directive::FooterDefault { side, content } => {
            log::debug!("{} default footer set to {:?}", side, content);
            state.footers[*side].content = content.clone();
            Step::Nothing
        }
        Directive::Setting { setting, value } => {
            if let Err(message) = apply_setting(state, *setting, value) {
                warnings.push(Warning::new(message, line.span.clone(), source_id));
            }
            Step::Nothing
        }
        Directive::Delimiter => Step::Render(RenderInstruction::Delimiter),
        Directive::Comment(content) => Step::Render(RenderInstruction::Comment(content.clone())),
        Directive::Message { side, content } => {
            let participant = &state.participants[*side];
            let title = participant.title.clone();
            let enforced_id = participant.enforced_id.clone();
            let ordinal = state.registry.register(&title);
            let id = enforced_id.or_else(|| ordinal.map(|n| n.to_string()));

            Step::Render(RenderInstruction::Message(MessageInstruction {
                side: *side,
                content: content.clone(),
                participant: ResolvedParticipant { title, id },
                default_footer: state.default_footer(*side),
                markdown_footer: state.markdown.footer,
                span: line.span.clone(),
            }))
        }
        Directive::FooterAttachment(content) => Step::AttachFooter(content.clone()),
        Directive::Unparsed(content) => {
            if state.clean {
                log::debug!("dropping unparsed line {:?}", content);
                Step::Nothing
            } else {
                Step::Render(RenderInstruction::UnparsedLine(content.clone()))
            }
        }
    }
}

/// Overwrite the session field behind `setting`. Returns a message when the
/// value is not valid for an enum setting.
pub fn apply_setting(state: &mut SessionState, setting: Setting, value: &str) -> Result<(), String> {
    log::debug!("setting {} to {:?}", setting, value);
    match setting {
        Setting::TitleMode => {
            state.title_mode = TitleMode::parse(value).ok_or_else(|| {
                unknown_value(setting, value, &TitleMode::ALL.map(TitleMode::as_str))
            })?;
        }
        Setting::FooterMode => {
            state.footer_mode = FooterMode::parse(value).ok_or_else(|| {
                unknown_value(setting, value, &FooterMode::ALL.map(FooterMode::as_str))
            })?;
        }
        Setting::MessageMaxWidth => state.message_max_width = value.to_string(),
        Setting::CommentMaxWidth => state.comment_max_width = value.to_string(),
        Setting::Clean => state.clean = parse_toggle(value),
        Setting::RenderMarkdownTitle => state.markdown.title = parse_toggle(value),
        Setting::RenderMarkdownContent => state.markdown.content = parse_toggle(value),
        Setting::RenderMarkdownFooter => state.markdown.footer = parse_toggle(value),
        Setting::RenderMarkdownComment => state.markdown.comment = parse_toggle(value),
    }
    Ok(())
}

fn unknown_value(setting: Setting, value: &str, expected: &[&str]) -> String {
    format!(
        "unknown {} value '{}' (expected one of: {}); keeping the previous value",
        setting,
        value,
        expected.join(", ")
    )
}
