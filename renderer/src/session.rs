use std::collections::HashMap;

use dialogue::config::DialogueConfig;
use dialogue::directive::{BySide, FooterMode, Side, TitleMode};

use crate::sink::NodeId;

/// The title and identity bound to one side.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub title: String,
    /// Set once the title has been shown under `first` title mode.
    pub rendered_once: bool,
    /// Identity override from a `-N` suffix on the title directive.
    pub enforced_id: Option<String>,
}

impl Participant {
    pub fn new(title: impl Into<String>) -> Self {
        Participant {
            title: title.into(),
            rendered_once: false,
            enforced_id: None,
        }
    }

    /// Reassign the title. A new title is eligible to be shown again.
    pub fn retitle(&mut self, title: String, enforced_id: Option<String>) {
        self.title = title;
        self.enforced_id = enforced_id;
        self.rendered_once = false;
    }

    /// Decide whether a message for this participant shows its title, and
    /// record the showing under `first` mode.
    pub fn should_render_title(&mut self, mode: TitleMode) -> bool {
        match mode {
            TitleMode::Disabled => false,
            TitleMode::All => !self.title.is_empty(),
            TitleMode::First => {
                if self.rendered_once || self.title.is_empty() {
                    false
                } else {
                    self.rendered_once = true;
                    true
                }
            }
        }
    }
}

/// Current default trailing text for a side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footer {
    pub content: String,
}

/// Title → ordinal, in first-seen order starting at 1.
#[derive(Debug, Default, Clone)]
pub struct ParticipantRegistry {
    ordinals: HashMap<String, usize>,
    order: Vec<String>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a title and return its ordinal. Known titles keep the
    /// ordinal they were first given; empty titles are never registered.
    pub fn register(&mut self, title: &str) -> Option<usize> {
        if title.is_empty() {
            return None;
        }
        if let Some(ordinal) = self.ordinals.get(title) {
            return Some(*ordinal);
        }
        self.order.push(title.to_string());
        let ordinal = self.order.len();
        self.ordinals.insert(title.to_string(), ordinal);
        Some(ordinal)
    }

    pub fn ordinal(&self, title: &str) -> Option<usize> {
        self.ordinals.get(title).copied()
    }

    /// Registered titles, in ordinal order.
    pub fn titles(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Per-field markdown switches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarkdownToggles {
    pub title: bool,
    pub content: bool,
    pub footer: bool,
    pub comment: bool,
}

/// Everything a dialogue block can change while it is being rendered.
///
/// Built fresh from the configuration for every block and mutated line by
/// line, in order.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub participants: BySide<Participant>,
    pub footers: BySide<Footer>,
    pub title_mode: TitleMode,
    pub footer_mode: FooterMode,
    /// Drop unparsed lines instead of echoing them.
    pub clean: bool,
    pub markdown: MarkdownToggles,
    pub message_max_width: String,
    pub comment_max_width: String,
    pub registry: ParticipantRegistry,
    /// The wrapper node every element of this block goes under.
    pub wrapper: NodeId,
}

impl SessionState {
    pub fn new(config: &DialogueConfig, wrapper: NodeId) -> Self {
        SessionState {
            participants: BySide::from_fn(|side| Participant::new(config.default_title(side))),
            footers: BySide::from_fn(|side| Footer {
                content: config.default_footer(side).to_string(),
            }),
            title_mode: config.default_title_mode,
            footer_mode: config.default_footer_mode,
            clean: config.default_clean,
            markdown: MarkdownToggles {
                title: config.default_render_markdown_title,
                content: config.default_render_markdown_content,
                footer: config.default_render_markdown_footer,
                comment: config.default_render_markdown_comment,
            },
            message_max_width: config.default_message_max_width.clone(),
            comment_max_width: config.default_comment_max_width.clone(),
            registry: ParticipantRegistry::new(),
            wrapper,
        }
    }

    /// The default footer a message on `side` gets if nothing explicit
    /// follows it, given the current footer mode.
    pub fn default_footer(&self, side: Side) -> Option<String> {
        let content = &self.footers[side].content;
        match self.footer_mode {
            FooterMode::All if !content.is_empty() => Some(content.clone()),
            _ => None,
        }
    }
}
