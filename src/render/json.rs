//! JSON rendering for resolved documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Block, ResolvedDocument};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a resolved document to JSON.
pub fn to_json(doc: &ResolvedDocument, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Convert a resolved document to JSON with the verbatim block list
/// alongside, for downstream consumers of the raw analysis result.
pub fn to_json_with_blocks(
    doc: &ResolvedDocument,
    blocks: &[Block],
    format: JsonFormat,
) -> Result<String> {
    #[derive(Serialize)]
    struct Envelope<'a> {
        #[serde(flatten)]
        document: &'a ResolvedDocument,
        blocks: &'a [Block],
    }

    serialize(&Envelope { document: doc, blocks }, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockType, ResolvedTable};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = ResolvedDocument::new();
        doc.form_fields
            .insert("Name".to_string(), "Jane".to_string());
        doc.tables.push(ResolvedTable::new(1, 1));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"formFields\""));
        assert!(json.contains("\"rowCount\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = ResolvedDocument::new();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_to_json_with_blocks_passthrough() {
        let doc = ResolvedDocument::new();
        let blocks = vec![Block::leaf("w-1", BlockType::Word, "hello")];

        let json = to_json_with_blocks(&doc, &blocks, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"formFields\""));
        assert!(json.contains("\"blocks\""));
        assert!(json.contains("\"w-1\""));
        assert!(json.contains("\"WORD\""));
    }
}
