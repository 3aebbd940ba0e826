//! Data model for analysis-result blocks and their resolved form.
//!
//! The input side (`Block` and friends) mirrors the wire format of the
//! document-analysis service: a flat list of typed nodes with directed
//! relationships. The output side (`ResolvedDocument`, `ResolvedTable`)
//! is the structured document the resolver reconstructs from that graph.

mod block;
mod document;
mod table;

pub use block::{Block, BlockType, EntityRole, Relationship, RelationshipKind};
pub use document::ResolvedDocument;
pub use table::ResolvedTable;
