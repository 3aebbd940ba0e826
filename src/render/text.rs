//! Plain text rendering for resolved documents.

use crate::error::Result;
use crate::model::ResolvedDocument;

use super::{CleanupPipeline, RenderOptions};

/// Convert a resolved document to plain text.
pub fn to_text(doc: &ResolvedDocument, options: &RenderOptions) -> Result<String> {
    let mut output = doc.plain_text();

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}
