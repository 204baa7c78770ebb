//! CSS class names put on rendered elements, shared with host stylesheets.

use dialogue::directive::Side;

pub const DIALOGUE_WRAPPER: &str = "dialogue-plugin-wrapper";
pub const BLOCK_WRAPPER: &str = "dialogue-plugin-block-wrapper";
pub const MESSAGE_WRAPPER_LEFT: &str = "dialogue-plugin-message-wrapper-left";
pub const MESSAGE_WRAPPER_RIGHT: &str = "dialogue-plugin-message-wrapper-right";
pub const MESSAGE_WRAPPER_CENTER: &str = "dialogue-plugin-message-wrapper-center";
pub const MESSAGE: &str = "dialogue-plugin-message";
pub const MESSAGE_TITLE: &str = "dialogue-plugin-message-title";
pub const MESSAGE_CONTENT: &str = "dialogue-plugin-message-content";
pub const MESSAGE_FOOTER: &str = "dialogue-plugin-message-footer";
pub const DELIMITER_WRAPPER: &str = "dialogue-plugin-delimiter-wrapper";
pub const DELIMITER: &str = "dialogue-plugin-delimiter";
pub const DELIMITER_DOT: &str = "dialogue-plugin-delimiter-dot";
pub const COMMENT_WRAPPER: &str = "dialogue-plugin-comment-wrapper";
pub const COMMENT: &str = "dialogue-plugin-comment";
/// Marks nodes whose content went through the markdown renderer.
pub const RENDER: &str = "dialogue-plugin-render";
pub const UNPARSED: &str = "dialogue-plugin-unparsed";

pub fn message_wrapper(side: Side) -> &'static str {
    match side {
        Side::Left => MESSAGE_WRAPPER_LEFT,
        Side::Right => MESSAGE_WRAPPER_RIGHT,
        Side::Center => MESSAGE_WRAPPER_CENTER,
    }
}
