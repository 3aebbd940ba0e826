//! Markdown rendering for resolved documents.

use crate::error::Result;
use crate::model::{ResolvedDocument, ResolvedTable};

use super::{CleanupPipeline, FieldStyle, RenderOptions, RenderResult, ResolutionStats};

/// Convert a resolved document to Markdown.
pub fn to_markdown(doc: &ResolvedDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a resolved document to Markdown with statistics.
pub fn to_markdown_with_stats(
    doc: &ResolvedDocument,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &ResolvedDocument) -> Result<String> {
        let mut output = String::new();

        self.render_fields(&mut output, doc);
        for (i, table) in doc.tables.iter().enumerate() {
            self.render_table(&mut output, table, i + 1);
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        Ok(output.trim().to_string())
    }

    /// Render a document to Markdown with resolution statistics.
    pub fn render_with_stats(&self, doc: &ResolvedDocument) -> Result<RenderResult> {
        let content = self.render(doc)?;
        let mut stats = ResolutionStats::from_document(doc);
        stats.count_text(&content);
        Ok(RenderResult::new(content, stats))
    }

    fn render_fields(&self, output: &mut String, doc: &ResolvedDocument) {
        if doc.form_fields.is_empty() {
            return;
        }

        if self.options.include_headings {
            output.push_str("## Form Fields\n\n");
        }

        match self.options.field_style {
            FieldStyle::List => {
                for (label, value) in &doc.form_fields {
                    output.push_str(&format!(
                        "- **{}**: {}\n",
                        escape_cell(label),
                        escape_cell(value)
                    ));
                }
                output.push('\n');
            }
            FieldStyle::Table => {
                output.push_str("| Field | Value |\n| --- | --- |\n");
                for (label, value) in &doc.form_fields {
                    output.push_str(&format!(
                        "| {} | {} |\n",
                        escape_cell(label),
                        escape_cell(value)
                    ));
                }
                output.push('\n');
            }
        }
    }

    fn render_table(&self, output: &mut String, table: &ResolvedTable, number: usize) {
        if table.is_empty() {
            return;
        }

        if self.options.include_headings {
            output.push_str(&format!("## Table {}\n\n", number));
        }

        // Pad ragged rows so the pipe grid stays rectangular
        let width = table
            .rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(table.column_count as usize);

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for col in 0..width {
                let content = row.get(col).map(String::as_str).unwrap_or("");
                output.push_str(&format!(" {} |", escape_cell(content)));
            }
            output.push('\n');

            // Separator after the first row
            if i == 0 {
                output.push('|');
                for _ in 0..width {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }
}

/// Escape pipes and newlines so cell text cannot break the grid.
fn escape_cell(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> ResolvedDocument {
        let mut doc = ResolvedDocument::new();
        doc.form_fields
            .insert("Name".to_string(), "John Doe".to_string());
        let mut table = ResolvedTable::new(2, 2);
        table.place(0, 0, "a".to_string());
        table.place(0, 1, "b".to_string());
        table.place(1, 0, "c".to_string());
        table.place(1, 1, "d".to_string());
        doc.tables.push(table);
        doc
    }

    #[test]
    fn test_field_list_style() {
        let doc = sample_doc();
        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();

        assert!(md.contains("## Form Fields"));
        assert!(md.contains("- **Name**: John Doe"));
    }

    #[test]
    fn test_field_table_style() {
        let doc = sample_doc();
        let options = RenderOptions::new().with_field_style(FieldStyle::Table);
        let md = to_markdown(&doc, &options).unwrap();

        assert!(md.contains("| Field | Value |"));
        assert!(md.contains("| Name | John Doe |"));
    }

    #[test]
    fn test_table_grid() {
        let doc = sample_doc();
        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();

        assert!(md.contains("## Table 1"));
        assert!(md.contains("| a | b |"));
        assert!(md.contains("| --- | --- |"));
        assert!(md.contains("| c | d |"));
    }

    #[test]
    fn test_no_headings() {
        let doc = sample_doc();
        let options = RenderOptions::new().with_headings(false);
        let md = to_markdown(&doc, &options).unwrap();

        assert!(!md.contains("##"));
        assert!(md.contains("- **Name**: John Doe"));
    }

    #[test]
    fn test_pipe_escaped() {
        let mut doc = ResolvedDocument::new();
        let mut table = ResolvedTable::new(1, 1);
        table.place(0, 0, "a|b".to_string());
        doc.tables.push(table);

        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();
        assert!(md.contains("a\\|b"));
    }

    #[test]
    fn test_ragged_rows_padded() {
        let mut doc = ResolvedDocument::new();
        let mut table = ResolvedTable::new(2, 2);
        table.place(0, 0, "a".to_string());
        table.place(1, 3, "far".to_string());
        doc.tables.push(table);

        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();
        // both rows render four columns
        assert!(md.contains("| a |  |  |  |"));
        assert!(md.contains("|  |  |  | far |"));
    }

    #[test]
    fn test_empty_document() {
        let doc = ResolvedDocument::new();
        let md = to_markdown(&doc, &RenderOptions::default()).unwrap();
        assert!(md.is_empty());
    }

    #[test]
    fn test_render_with_stats() {
        let doc = sample_doc();
        let result = to_markdown_with_stats(&doc, &RenderOptions::default()).unwrap();

        assert_eq!(result.stats.field_count, 1);
        assert_eq!(result.stats.table_count, 1);
        assert_eq!(result.stats.populated_cell_count, 4);
        assert!(result.stats.word_count > 0);
    }
}
