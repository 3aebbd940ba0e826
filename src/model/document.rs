//! Resolved document: the structured output of block graph resolution.

use super::ResolvedTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The structured document reconstructed from a block graph.
///
/// Form fields keep first-insertion order of their labels; a repeated label
/// overwrites the value in place. Tables appear in the order their `TABLE`
/// blocks appeared in the input list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDocument {
    /// Ordered label → value mapping of form fields
    pub form_fields: IndexMap<String, String>,

    /// Tables in declaration order
    pub tables: Vec<ResolvedTable>,
}

impl ResolvedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resolved form fields.
    pub fn field_count(&self) -> usize {
        self.form_fields.len()
    }

    /// Number of resolved tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Look up a form field value by label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.form_fields.get(label).map(String::as_str)
    }

    /// Check if the document has no fields and no tables.
    pub fn is_empty(&self) -> bool {
        self.form_fields.is_empty() && self.tables.is_empty()
    }

    /// Get plain text content: `label: value` lines, then table grids.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = self
            .form_fields
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        parts.extend(
            self.tables
                .iter()
                .filter(|t| !t.is_empty())
                .map(|t| t.plain_text()),
        );
        parts.join("\n")
    }
}
