use std::fmt;

use serde::{Deserialize, Serialize};

/// How participant titles are shown above messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleMode {
    /// Never show titles.
    Disabled,
    /// Show the title on every message.
    All,
    /// Show the title on the first message after it was (re)assigned.
    #[default]
    First,
}

impl TitleMode {
    pub const ALL: [TitleMode; 3] = [TitleMode::Disabled, TitleMode::All, TitleMode::First];

    /// Parse a lower-case mode name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        TitleMode::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TitleMode::Disabled => "disabled",
            TitleMode::All => "all",
            TitleMode::First => "first",
        }
    }
}

impl fmt::Display for TitleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether per-side default footers are attached automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterMode {
    #[default]
    Disabled,
    All,
}

impl FooterMode {
    pub const ALL: [FooterMode; 2] = [FooterMode::Disabled, FooterMode::All];

    pub fn parse(value: &str) -> Option<Self> {
        FooterMode::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FooterMode::Disabled => "disabled",
            FooterMode::All => "all",
        }
    }
}

impl fmt::Display for FooterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named `keyword: value` setting that can be changed mid-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    TitleMode,
    FooterMode,
    MessageMaxWidth,
    CommentMaxWidth,
    Clean,
    RenderMarkdownTitle,
    RenderMarkdownContent,
    RenderMarkdownFooter,
    RenderMarkdownComment,
}

impl Setting {
    pub const ALL: [Setting; 9] = [
        Setting::TitleMode,
        Setting::FooterMode,
        Setting::MessageMaxWidth,
        Setting::CommentMaxWidth,
        Setting::Clean,
        Setting::RenderMarkdownTitle,
        Setting::RenderMarkdownContent,
        Setting::RenderMarkdownFooter,
        Setting::RenderMarkdownComment,
    ];

    /// The directive keyword, without the trailing colon.
    pub fn keyword(self) -> &'static str {
        match self {
            Setting::TitleMode => "titleMode",
            Setting::FooterMode => "footerMode",
            Setting::MessageMaxWidth => "messageMaxWidth",
            Setting::CommentMaxWidth => "commentMaxWidth",
            Setting::Clean => "clean",
            Setting::RenderMarkdownTitle => "renderMarkdownTitle",
            Setting::RenderMarkdownContent => "renderMarkdownContent",
            Setting::RenderMarkdownFooter => "renderMarkdownFooter",
            Setting::RenderMarkdownComment => "renderMarkdownComment",
        }
    }

    /// Width values are free-form CSS lengths and keep their case.
    pub fn lowercases_value(self) -> bool {
        !matches!(self, Setting::MessageMaxWidth | Setting::CommentMaxWidth)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Boolean setting grammar: only `true` turns a toggle on.
pub fn parse_toggle(value: &str) -> bool {
    value == "true"
}
