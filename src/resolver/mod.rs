//! Block graph resolution.
//!
//! Three phases share one indexed view of the block list: the index is
//! built once, then the field and table passes each walk the list in
//! order, resolving relationships through the index. The two passes are
//! independent of each other and run on separate threads for large inputs.

mod fields;
mod index;
mod options;
mod tables;

pub use fields::resolve_fields;
pub use index::BlockIndex;
pub use options::{BoundsPolicy, ResolveOptions};
pub use tables::resolve_tables;

use crate::model::{Block, ResolvedDocument};

/// Below this many blocks the thread-join overhead outweighs the passes.
const PARALLEL_THRESHOLD: usize = 64;

/// Resolve a block list into a structured document with default options.
pub fn resolve(blocks: &[Block]) -> ResolvedDocument {
    resolve_with_options(blocks, &ResolveOptions::default())
}

/// Resolve a block list into a structured document.
///
/// Resolution is total: malformed relationships, orphaned cells, and
/// unresolvable ids degrade to empty text rather than failing. The same
/// input always yields the same output, whether the passes run
/// sequentially or in parallel.
pub fn resolve_with_options(blocks: &[Block], options: &ResolveOptions) -> ResolvedDocument {
    let index = BlockIndex::build(blocks);
    log::debug!("resolving {} blocks ({} indexed)", blocks.len(), index.len());

    let (form_fields, tables) = if options.parallel && blocks.len() >= PARALLEL_THRESHOLD {
        rayon::join(
            || resolve_fields(blocks, &index),
            || resolve_tables(blocks, &index, options),
        )
    } else {
        (
            resolve_fields(blocks, &index),
            resolve_tables(blocks, &index, options),
        )
    };

    ResolvedDocument {
        form_fields,
        tables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockType, EntityRole, Relationship};

    #[test]
    fn test_empty_input() {
        let doc = resolve(&[]);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_no_structural_blocks() {
        let blocks = vec![
            Block::new("p-1", BlockType::Page),
            Block::leaf("l-1", BlockType::Line, "just text"),
            Block::leaf("w-1", BlockType::Word, "just"),
        ];
        let doc = resolve(&blocks);
        assert!(doc.form_fields.is_empty());
        assert!(doc.tables.is_empty());
    }

    #[test]
    fn test_fields_and_tables_together() {
        let blocks = vec![
            Block::leaf("w-k", BlockType::Word, "Total"),
            Block::leaf("w-v", BlockType::Word, "42"),
            Block::new("key-1", BlockType::KeyValueSet)
                .with_roles(vec![EntityRole::Key])
                .with_relationship(Relationship::value(vec!["val-1".to_string()]))
                .with_relationship(Relationship::child(vec!["w-k".to_string()])),
            Block::new("val-1", BlockType::KeyValueSet)
                .with_roles(vec![EntityRole::Value])
                .with_relationship(Relationship::child(vec!["w-v".to_string()])),
            Block::new("t-1", BlockType::Table).with_dimensions(1, 1),
            Block::leaf("w-c", BlockType::Word, "cell"),
            Block::new("c-1", BlockType::Cell)
                .at(1, 1)
                .with_relationship(Relationship::child(vec!["w-c".to_string()])),
        ];
        let doc = resolve(&blocks);

        assert_eq!(doc.field("Total"), Some("42"));
        assert_eq!(doc.tables[0].cell(0, 0), Some("cell"));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        // Build a graph large enough to cross the parallel threshold.
        let mut blocks = Vec::new();
        for n in 0..40 {
            blocks.push(Block::leaf(format!("w-k-{}", n), BlockType::Word, format!("Key{}", n)));
            blocks.push(Block::leaf(format!("w-v-{}", n), BlockType::Word, format!("Val{}", n)));
            blocks.push(
                Block::new(format!("key-{}", n), BlockType::KeyValueSet)
                    .with_roles(vec![EntityRole::Key])
                    .with_relationship(Relationship::value(vec![format!("val-{}", n)]))
                    .with_relationship(Relationship::child(vec![format!("w-k-{}", n)])),
            );
            blocks.push(
                Block::new(format!("val-{}", n), BlockType::KeyValueSet)
                    .with_roles(vec![EntityRole::Value])
                    .with_relationship(Relationship::child(vec![format!("w-v-{}", n)])),
            );
        }
        blocks.push(Block::new("t-1", BlockType::Table).with_dimensions(1, 1));
        blocks.push(Block::leaf("w-c", BlockType::Word, "cell"));
        blocks.push(
            Block::new("c-1", BlockType::Cell)
                .at(1, 1)
                .with_relationship(Relationship::child(vec!["w-c".to_string()])),
        );

        let parallel = resolve_with_options(&blocks, &ResolveOptions::default());
        let sequential = resolve_with_options(&blocks, &ResolveOptions::new().sequential());

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.field_count(), 40);
    }

    #[test]
    fn test_idempotent() {
        let blocks = vec![
            Block::new("t-1", BlockType::Table).with_dimensions(1, 1),
            Block::leaf("w-1", BlockType::Word, "x"),
            Block::new("c-1", BlockType::Cell)
                .at(1, 1)
                .with_relationship(Relationship::child(vec!["w-1".to_string()])),
        ];
        assert_eq!(resolve(&blocks), resolve(&blocks));
    }
}
