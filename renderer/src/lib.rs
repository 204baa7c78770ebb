pub mod classes;
pub mod dispatcher;
pub mod driver;
pub mod error;
pub mod executor;
pub mod instruction;
pub mod markdown;
pub mod session;
pub mod sink;

pub use driver::{DialogueRenderer, RenderOutcome, render_dialogue, render_script};
pub use error::{RenderError, Warning};
pub use markdown::{CmarkRenderer, MarkdownContext, MarkdownRenderer, PlainTextRenderer};
pub use sink::tree::ElementTree;
pub use sink::{NodeId, RenderSink, Role};
