use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directive::{FooterMode, Side, TitleMode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults every dialogue block starts from. Directives inside a block
/// override these for the rest of that block only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    pub default_left_title: String,
    pub default_right_title: String,
    pub default_center_title: String,
    pub default_left_footer: String,
    pub default_right_footer: String,
    pub default_center_footer: String,
    pub default_title_mode: TitleMode,
    pub default_footer_mode: FooterMode,
    pub default_clean: bool,
    pub default_render_markdown_title: bool,
    pub default_render_markdown_content: bool,
    pub default_render_markdown_footer: bool,
    pub default_render_markdown_comment: bool,
    /// CSS length, e.g. `60%`.
    pub default_message_max_width: String,
    pub default_comment_max_width: String,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        DialogueConfig {
            default_left_title: String::new(),
            default_right_title: String::new(),
            default_center_title: String::new(),
            default_left_footer: String::new(),
            default_right_footer: String::new(),
            default_center_footer: String::new(),
            default_title_mode: TitleMode::First,
            default_footer_mode: FooterMode::Disabled,
            default_clean: false,
            default_render_markdown_title: false,
            default_render_markdown_content: false,
            default_render_markdown_footer: false,
            default_render_markdown_comment: false,
            default_message_max_width: "60%".to_string(),
            default_comment_max_width: "60%".to_string(),
        }
    }
}

impl DialogueConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        log::debug!("loaded dialogue config from {}", config_path.display());
        Ok(config)
    }

    pub fn default_title(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.default_left_title,
            Side::Right => &self.default_right_title,
            Side::Center => &self.default_center_title,
        }
    }

    pub fn default_footer(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.default_left_footer,
            Side::Right => &self.default_right_footer,
            Side::Center => &self.default_center_footer,
        }
    }
}
