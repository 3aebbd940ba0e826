//! Block types: the nodes of an analysis-result graph.
//!
//! A document-analysis service returns a flat list of typed blocks plus
//! directed relationships between them. Wire names are camelCase; the
//! PascalCase aliases accept the casing some providers emit.

use serde::{Deserialize, Serialize};

/// A single recognized element of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Opaque unique identifier, stable within one analysis result.
    #[serde(alias = "Id")]
    pub id: String,

    /// What kind of element this block describes.
    #[serde(rename = "type", alias = "BlockType")]
    pub kind: BlockType,

    /// Role tags, only meaningful on `KeyValueSet` blocks.
    #[serde(default, alias = "EntityRoles", skip_serializing_if = "Vec::is_empty")]
    pub entity_roles: Vec<EntityRole>,

    /// Literal text, present on leaf blocks (words, lines).
    #[serde(default, alias = "Text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Recognition confidence score. Carried through verbatim; resolution
    /// never filters on it.
    #[serde(default, alias = "Confidence", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Directed edges to other blocks, in relationship order.
    #[serde(default, alias = "Relationships", skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,

    /// 1-based row position, present only on `Cell` blocks.
    #[serde(default, alias = "RowIndex", skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    /// 1-based column position, present only on `Cell` blocks.
    #[serde(default, alias = "ColumnIndex", skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,

    /// Declared row count, present only on `Table` blocks.
    #[serde(default, alias = "RowCount", skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,

    /// Declared column count, present only on `Table` blocks.
    #[serde(default, alias = "ColumnCount", skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u32>,
}

impl Block {
    /// Create a new block with the given id and kind.
    pub fn new(id: impl Into<String>, kind: BlockType) -> Self {
        Self {
            id: id.into(),
            kind,
            entity_roles: Vec::new(),
            text: None,
            confidence: None,
            relationships: Vec::new(),
            row_index: None,
            column_index: None,
            row_count: None,
            column_count: None,
        }
    }

    /// Create a leaf block carrying literal text.
    pub fn leaf(id: impl Into<String>, kind: BlockType, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(id, kind)
        }
    }

    /// Set entity roles and return self.
    pub fn with_roles(mut self, roles: Vec<EntityRole>) -> Self {
        self.entity_roles = roles;
        self
    }

    /// Add a relationship and return self.
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Set the cell position (1-based) and return self.
    pub fn at(mut self, row_index: u32, column_index: u32) -> Self {
        self.row_index = Some(row_index);
        self.column_index = Some(column_index);
        self
    }

    /// Set declared grid dimensions and return self.
    pub fn with_dimensions(mut self, row_count: u32, column_count: u32) -> Self {
        self.row_count = Some(row_count);
        self.column_count = Some(column_count);
        self
    }

    /// Set confidence and return self.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Check if this block carries the given role.
    pub fn has_role(&self, role: EntityRole) -> bool {
        self.entity_roles.contains(&role)
    }

    /// Get the target ids of the first relationship of the given kind.
    pub fn related_ids(&self, kind: RelationshipKind) -> &[String] {
        self.relationships
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.target_ids.as_slice())
            .unwrap_or(&[])
    }
}

/// The closed set of block kinds the resolver understands.
///
/// Services add new kinds over time; anything unrecognized deserializes to
/// `Other` and is ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// A page of the analyzed document
    Page,
    /// A line of text
    Line,
    /// A single word
    Word,
    /// One side of a key/value form pairing
    KeyValueSet,
    /// A table container
    Table,
    /// A table cell
    Cell,
    /// Any kind this version does not understand
    #[serde(other)]
    Other,
}

/// Role tags carried by `KeyValueSet` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityRole {
    /// The label side of a form field
    Key,
    /// The value side of a form field
    Value,
    /// Any role this version does not understand
    #[serde(other)]
    Other,
}

/// A typed directed edge from one block to a set of target blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Edge kind.
    #[serde(alias = "Kind", alias = "Type", alias = "type")]
    pub kind: RelationshipKind,

    /// Target block ids, in order. Order is significant: child text is
    /// concatenated in this order.
    #[serde(default, alias = "TargetIds", alias = "Ids", alias = "ids")]
    pub target_ids: Vec<String>,
}

impl Relationship {
    /// Create a `Child` relationship to the given targets.
    pub fn child(target_ids: Vec<String>) -> Self {
        Self {
            kind: RelationshipKind::Child,
            target_ids,
        }
    }

    /// Create a `Value` relationship to the given targets.
    pub fn value(target_ids: Vec<String>) -> Self {
        Self {
            kind: RelationshipKind::Value,
            target_ids,
        }
    }
}

/// Relationship edge kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    /// Composition: this block's constituent sub-blocks
    Child,
    /// Pairing: a key block's value block
    Value,
    /// Any kind this version does not understand
    #[serde(other)]
    Other,
}
