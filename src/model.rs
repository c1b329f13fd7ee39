//! ERD model value types.
//!
//! Field names are the JSON wire contract shared with the diagram frontend,
//! so renames here are breaking changes.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// One table column with its parsed constraint flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Raw SQL type token, upper-cased on parse (e.g. `VARCHAR(255)`).
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    /// Reference in the canonical `table(column)` form, or `None`.
    #[serde(default)]
    pub foreign_key: Option<String>,
    #[serde(default)]
    pub unique: bool,
    /// Literal default expression, emitted verbatim on generation.
    #[serde(default)]
    pub default: Option<String>,
}

/// Layout hint persisted for the frontend; inert to parsing and generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Lower-cased on parse.
    pub name: String,
    /// Declaration order; duplicate names are kept as-is.
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Directional edge from the referencing column to the referenced one.
///
/// Relationships are derived data: everything inferred from parsing is
/// reconstructible from the columns' `foreign_key` fields, and nothing
/// checks that the referenced table or column actually exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub relationship_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<String>,
}

/// The aggregate exchanged with callers. A plain structural container:
/// no uniqueness constraints, no referential validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErdModel {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
}
