use pulldown_cmark::{Options, Parser as CmarkParser};

use crate::error::RenderError;
use crate::sink::{NodeId, RenderSink};

/// Passed through to the markdown renderer untouched, e.g. so links can be
/// resolved relative to the document the block came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownContext {
    pub source_path: String,
}

impl MarkdownContext {
    pub fn new(source_path: impl Into<String>) -> Self {
        MarkdownContext {
            source_path: source_path.into(),
        }
    }
}

/// Renders inline markdown source into an already-created node.
pub trait MarkdownRenderer {
    fn render_markdown(
        &mut self,
        source: &str,
        target: NodeId,
        sink: &mut dyn RenderSink,
        context: &MarkdownContext,
    ) -> Result<(), RenderError>;
}

/// Markdown to HTML through pulldown-cmark.
#[derive(Debug, Clone)]
pub struct CmarkRenderer {
    options: Options,
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        CmarkRenderer {
            options: Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES,
        }
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render_markdown(
        &mut self,
        source: &str,
        target: NodeId,
        sink: &mut dyn RenderSink,
        context: &MarkdownContext,
    ) -> Result<(), RenderError> {
        let parser = CmarkParser::new_ext(source, self.options);
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, parser);
        log::trace!(
            "rendered markdown for {} into {}",
            context.source_path,
            target
        );
        sink.append_html(target, html.trim_end())
    }
}

/// Shows the source as-is. Useful where no markdown engine is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl MarkdownRenderer for PlainTextRenderer {
    fn render_markdown(
        &mut self,
        source: &str,
        target: NodeId,
        sink: &mut dyn RenderSink,
        _context: &MarkdownContext,
    ) -> Result<(), RenderError> {
        sink.set_text(target, source)
    }
}
