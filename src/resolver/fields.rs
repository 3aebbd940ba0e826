//! Field resolution: key/value block pairs → ordered label/value mapping.

use indexmap::IndexMap;

use crate::model::{Block, BlockType, EntityRole, RelationshipKind};

use super::index::BlockIndex;

/// Resolve form fields from the block list.
///
/// Walks blocks in list order, selecting `KeyValueSet` blocks carrying the
/// `Key` role. For each, the label is the key block's child text and the
/// value is the child text of the paired `Value`-role block reached through
/// the key's `Value` relationship. An entry is inserted only when both
/// sides are non-empty after trimming; a repeated label overwrites the
/// earlier value while keeping its position.
pub fn resolve_fields(blocks: &[Block], index: &BlockIndex) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();

    for block in blocks {
        if block.kind != BlockType::KeyValueSet || !block.has_role(EntityRole::Key) {
            continue;
        }

        if let Some(confidence) = block.confidence {
            if confidence < 50.0 {
                log::debug!("low-confidence key block {} ({:.1})", block.id, confidence);
            }
        }

        let label = index.child_text(block);
        if label.is_empty() {
            continue;
        }

        let Some(value_block) = find_value_block(block, index) else {
            log::debug!("key block {} has no resolvable value, omitted", block.id);
            continue;
        };

        let value = index.child_text(value_block);
        if value.is_empty() {
            continue;
        }

        fields.insert(label, value);
    }

    fields
}

/// Follow a key block's `Value` relationship to its paired value block.
fn find_value_block<'a>(key: &Block, index: &BlockIndex<'a>) -> Option<&'a Block> {
    key.relationships
        .iter()
        .filter(|r| r.kind == RelationshipKind::Value)
        .flat_map(|r| r.target_ids.iter())
        .filter_map(|id| index.get(id))
        .find(|b| b.kind == BlockType::KeyValueSet && b.has_role(EntityRole::Value))
}
