//! Block index: id → block lookup over a borrowed block list.

use std::collections::HashMap;

use crate::model::{Block, RelationshipKind};

/// An id-keyed view of a block list, built once per resolution and shared
/// read-only by the field and table passes.
#[derive(Debug)]
pub struct BlockIndex<'a> {
    map: HashMap<&'a str, &'a Block>,
}

impl<'a> BlockIndex<'a> {
    /// Build an index over the given blocks.
    ///
    /// If the same id appears twice the later occurrence wins. Source data
    /// should not contain duplicates; this is defensive only.
    pub fn build(blocks: &'a [Block]) -> Self {
        let mut map = HashMap::with_capacity(blocks.len());
        for block in blocks {
            if map.insert(block.id.as_str(), block).is_some() {
                log::debug!("duplicate block id {}, later occurrence wins", block.id);
            }
        }
        Self { map }
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&'a Block> {
        self.map.get(id).copied()
    }

    /// Number of indexed blocks.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolve a block's `Child`-related leaf text: the space-joined,
    /// trimmed concatenation of each target's text, in relationship order.
    ///
    /// Targets missing from the index and targets without text contribute
    /// nothing.
    pub fn child_text(&self, block: &Block) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for relationship in block
            .relationships
            .iter()
            .filter(|r| r.kind == RelationshipKind::Child)
        {
            for id in &relationship.target_ids {
                match self.get(id) {
                    Some(child) => {
                        if let Some(text) = child.text.as_deref() {
                            if !text.is_empty() {
                                parts.push(text);
                            }
                        }
                    }
                    None => {
                        log::debug!(
                            "unresolvable child reference {} on block {}, skipped",
                            id,
                            block.id
                        );
                    }
                }
            }
        }
        parts.join(" ").trim().to_string()
    }
}
