//! Rendering result with resolution statistics.

use crate::model::ResolvedDocument;
use serde::{Deserialize, Serialize};

/// Result of rendering a resolved document, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Resolution statistics
    pub stats: ResolutionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ResolutionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics describing a resolved document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionStats {
    /// Number of resolved form fields
    pub field_count: u32,

    /// Number of resolved tables
    pub table_count: u32,

    /// Number of non-empty table cells
    pub populated_cell_count: u32,

    /// Number of empty table cells (allocated but never written)
    pub empty_cell_count: u32,

    /// Approximate word count of the rendered content
    pub word_count: u32,

    /// Character count of the rendered content (excluding whitespace)
    pub char_count: u32,
}

impl ResolutionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect structural counts from a resolved document.
    pub fn from_document(doc: &ResolvedDocument) -> Self {
        let mut stats = Self::new();
        stats.field_count = doc.field_count() as u32;
        stats.table_count = doc.table_count() as u32;
        for table in &doc.tables {
            for row in &table.rows {
                for cell in row {
                    if cell.is_empty() {
                        stats.empty_cell_count += 1;
                    } else {
                        stats.populated_cell_count += 1;
                    }
                }
            }
        }
        stats
    }

    /// Count words and non-whitespace characters in rendered content.
    pub fn count_text(&mut self, content: &str) {
        self.word_count = content.split_whitespace().count() as u32;
        self.char_count = content.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResolvedTable;

    #[test]
    fn test_from_document() {
        let mut doc = ResolvedDocument::new();
        doc.form_fields.insert("A".to_string(), "1".to_string());
        let mut table = ResolvedTable::new(2, 2);
        table.place(1, 1, "x".to_string());
        doc.tables.push(table);

        let stats = ResolutionStats::from_document(&doc);
        assert_eq!(stats.field_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.populated_cell_count, 1);
        assert_eq!(stats.empty_cell_count, 3);
    }

    #[test]
    fn test_count_text() {
        let mut stats = ResolutionStats::new();
        stats.count_text("one two  three\n");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.char_count, 11);
    }
}
