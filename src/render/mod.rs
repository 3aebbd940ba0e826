//! Rendering module for converting resolved documents to output formats.

mod cleanup;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use json::{to_json, to_json_with_blocks, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{FieldStyle, RenderOptions};
pub use result::{RenderResult, ResolutionStats};
pub use text::to_text;
