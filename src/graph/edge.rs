//! Relationship (edge) implementation for the ontology graph
//!
//! Edges are directed and typed. There is at most one edge per
//! `(from, to, kind)` triple; upserting the same triple replaces it.

use super::types::{EntityId, RelationKind};
use serde::{Deserialize, Serialize};

/// Composite key identifying a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub from: EntityId,
    pub to: EntityId,
    pub kind: RelationKind,
}

/// A directed, typed connection between two entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Source entity (edge goes FROM this entity)
    pub from: EntityId,

    /// Target entity (edge goes TO this entity)
    pub to: EntityId,

    /// Relationship type
    pub kind: RelationKind,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl Relationship {
    pub fn new(
        from: impl Into<EntityId>,
        to: impl Into<EntityId>,
        kind: RelationKind,
    ) -> Self {
        Relationship {
            from: from.into(),
            to: to.into(),
            kind,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            from: self.from.clone(),
            to: self.to.clone(),
            kind: self.kind,
        }
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.kind == other.kind
    }
}

impl Eq for Relationship {}
