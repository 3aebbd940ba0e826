//! # unform
//!
//! Form-field and table reconstruction from document-analysis block graphs.
//!
//! A document-analysis service returns a flat list of typed blocks plus
//! relationships between them. This library resolves that graph into a
//! structured document: an ordered mapping of form-field labels to values,
//! and a sequence of tables with their cell grids.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unform::{resolve_file, render};
//!
//! fn main() -> unform::Result<()> {
//!     // Resolve an analysis-result JSON file
//!     let doc = resolve_file("analysis.json")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Graceful degradation**: unresolvable references, unpaired keys, and
//!   orphaned cells contribute nothing instead of failing
//! - **Deterministic**: the same block list always yields the same document
//! - **Parallel resolution**: field and table passes run on separate threads
//! - **Multiple output formats**: JSON, Markdown, plain text
//! - **Cleanup pipeline**: normalization for recognized-text artifacts

pub mod error;
pub mod ingest;
pub mod model;
pub mod render;
pub mod resolver;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ingest::{blocks_from_file, blocks_from_json, blocks_from_json_bytes};
pub use model::{
    Block, BlockType, EntityRole, Relationship, RelationshipKind, ResolvedDocument, ResolvedTable,
};
pub use render::{
    CleanupOptions, CleanupPreset, FieldStyle, JsonFormat, RenderOptions, RenderResult,
    ResolutionStats,
};
pub use resolver::{resolve, resolve_with_options, BlockIndex, BoundsPolicy, ResolveOptions};

use std::path::Path;

/// Resolve an analysis result from a JSON string.
///
/// # Example
///
/// ```
/// let doc = unform::resolve_json(r#"{"blocks": []}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn resolve_json(json: &str) -> Result<ResolvedDocument> {
    let blocks = blocks_from_json(json)?;
    Ok(resolve(&blocks))
}

/// Resolve an analysis result from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = unform::resolve_file("analysis.json").unwrap();
/// println!("Fields: {}", doc.field_count());
/// ```
pub fn resolve_file<P: AsRef<Path>>(path: P) -> Result<ResolvedDocument> {
    let blocks = blocks_from_file(path)?;
    Ok(resolve(&blocks))
}

/// Builder for resolving and rendering analysis results.
///
/// # Example
///
/// ```no_run
/// use unform::{Unform, CleanupPreset, FieldStyle};
///
/// let markdown = Unform::new()
///     .with_cleanup(CleanupPreset::Standard)
///     .with_field_style(FieldStyle::Table)
///     .resolve_file("analysis.json")?
///     .to_markdown()?;
/// # Ok::<(), unform::Error>(())
/// ```
pub struct Unform {
    resolve_options: ResolveOptions,
    render_options: RenderOptions,
}

impl Unform {
    /// Create a new Unform builder.
    pub fn new() -> Self {
        Self {
            resolve_options: ResolveOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Disable parallel resolver passes.
    pub fn sequential(mut self) -> Self {
        self.resolve_options = self.resolve_options.sequential();
        self
    }

    /// Set the out-of-bounds cell policy.
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.resolve_options = self.resolve_options.with_bounds(bounds);
        self
    }

    /// Set cleanup preset for rendered output.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Set the form-field rendering style.
    pub fn with_field_style(mut self, style: FieldStyle) -> Self {
        self.render_options = self.render_options.with_field_style(style);
        self
    }

    /// Omit section headings from Markdown output.
    pub fn without_headings(mut self) -> Self {
        self.render_options = self.render_options.with_headings(false);
        self
    }

    /// Include the verbatim block list in JSON output.
    pub fn with_raw_blocks(mut self) -> Self {
        self.render_options = self.render_options.with_raw_blocks(true);
        self
    }

    /// Resolve a block list already in memory.
    pub fn resolve(self, blocks: Vec<Block>) -> UnformResult {
        let document = resolve_with_options(&blocks, &self.resolve_options);
        UnformResult {
            document,
            blocks,
            render_options: self.render_options,
        }
    }

    /// Resolve an analysis result from a JSON string.
    pub fn resolve_json(self, json: &str) -> Result<UnformResult> {
        let blocks = blocks_from_json(json)?;
        Ok(self.resolve(blocks))
    }

    /// Resolve an analysis result from a JSON file.
    pub fn resolve_file<P: AsRef<Path>>(self, path: P) -> Result<UnformResult> {
        let blocks = blocks_from_file(path)?;
        Ok(self.resolve(blocks))
    }
}

impl Default for Unform {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of resolving an analysis result.
///
/// Holds the structured document plus the untouched block list, so the raw
/// analysis result can be passed through to downstream consumers verbatim.
pub struct UnformResult {
    /// The resolved document
    pub document: ResolvedDocument,
    /// The verbatim input block list
    pub blocks: Vec<Block>,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnformResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON. With raw blocks enabled, the verbatim block list
    /// rides alongside the structured output.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        if self.render_options.include_raw_blocks {
            render::to_json_with_blocks(&self.document, &self.blocks, format)
        } else {
            render::to_json(&self.document, format)
        }
    }

    /// Get plain text without cleanup.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the resolved document.
    pub fn document(&self) -> &ResolvedDocument {
        &self.document
    }

    /// Get resolution statistics.
    pub fn stats(&self) -> ResolutionStats {
        ResolutionStats::from_document(&self.document)
    }
}
