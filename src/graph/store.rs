//! In-memory storage for the ontology graph
//!
//! `EntityStore` is the canonical holder of entities and relationships for
//! one session and the single source of truth queried by the index and the
//! traversal algorithms. Iteration order over entities and edges is
//! insertion order, which downstream traversals rely on for deterministic
//! results.

use super::edge::{EdgeKey, Relationship};
use super::entity::Entity;
use super::types::{EntityId, EntityKind, RelationKind};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("entity {0} not found")]
    NotFound(EntityId),

    #[error("entity {id} already exists as {existing}, cannot reassert as {asserted}")]
    KindConflict {
        id: EntityId,
        existing: EntityKind,
        asserted: EntityKind,
    },

    #[error("edge {from} -[{kind}]-> {to} references missing entity {missing}")]
    DanglingReference {
        from: EntityId,
        to: EntityId,
        kind: RelationKind,
        missing: EntityId,
    },

    #[error("entity {child} already contained by {existing}, cannot also be contained by {asserted}")]
    ParentConflict {
        child: EntityId,
        existing: EntityId,
        asserted: EntityId,
    },

    #[error("operation cancelled")]
    Cancelled,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory entity/relationship storage.
///
/// Uses insertion-ordered maps for O(1) lookup with stable iteration:
/// - entities: EntityId -> Entity
/// - edges: (from, to, kind) -> Relationship
///
/// Every mutation bumps a monotonically increasing `version`; dependent
/// indexes compare against it to detect staleness.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: IndexMap<EntityId, Entity>,

    edges: IndexMap<EdgeKey, Relationship>,

    /// Single `contains` parent per child (the hierarchy is a forest)
    contains_parent: FxHashMap<EntityId, EntityId>,

    /// Bumped by every successful mutation
    version: u64,

    /// Deferred-resolution mode for bulk loads: edges whose endpoints are
    /// not yet present are parked and validated at `finish_bulk_load`.
    bulk_mode: bool,
    pending_edges: Vec<Relationship>,
}

impl EntityStore {
    /// Create a new empty store
    pub fn new() -> Self {
        EntityStore {
            entities: IndexMap::new(),
            edges: IndexMap::new(),
            contains_parent: FxHashMap::default(),
            version: 1,
            bulk_mode: false,
            pending_edges: Vec::new(),
        }
    }

    /// Current mutation counter
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Insert or replace an entity by id.
    ///
    /// Replacing keeps the original creation timestamp. Asserting an
    /// existing id with a different kind is a `KindConflict`, never a
    /// silent overwrite, because edges reference ids without a kind
    /// discriminant.
    pub fn upsert_entity(&mut self, mut entity: Entity) -> GraphResult<()> {
        if let Some(existing) = self.entities.get(&entity.id) {
            if existing.kind != entity.kind {
                return Err(GraphError::KindConflict {
                    id: entity.id.clone(),
                    existing: existing.kind,
                    asserted: entity.kind,
                });
            }
            entity.created_at = existing.created_at;
            entity.touch();
        }
        self.entities.insert(entity.id.clone(), entity);
        self.version += 1;
        Ok(())
    }

    /// Insert or replace an edge by its `(from, to, kind)` composite key.
    ///
    /// Outside bulk mode both endpoints must exist; in bulk mode edges with
    /// missing endpoints are parked until `finish_bulk_load`.
    pub fn upsert_edge(&mut self, edge: Relationship) -> GraphResult<()> {
        if self.bulk_mode
            && (!self.entities.contains_key(&edge.from) || !self.entities.contains_key(&edge.to))
        {
            self.pending_edges.push(edge);
            return Ok(());
        }
        self.insert_edge_checked(edge)?;
        self.version += 1;
        Ok(())
    }

    fn insert_edge_checked(&mut self, edge: Relationship) -> GraphResult<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.entities.contains_key(endpoint) {
                return Err(GraphError::DanglingReference {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    kind: edge.kind,
                    missing: endpoint.clone(),
                });
            }
        }

        // The hierarchy is a forest: one `contains` parent per child.
        if edge.kind == RelationKind::Contains {
            if let Some(existing) = self.contains_parent.get(&edge.to) {
                if *existing != edge.from {
                    return Err(GraphError::ParentConflict {
                        child: edge.to.clone(),
                        existing: existing.clone(),
                        asserted: edge.from.clone(),
                    });
                }
            }
            self.contains_parent
                .insert(edge.to.clone(), edge.from.clone());
        }

        self.edges.insert(edge.key(), edge);
        Ok(())
    }

    /// Remove an entity and cascade removal of every edge referencing it.
    pub fn remove_entity(&mut self, id: &str) -> GraphResult<Entity> {
        let entity = self
            .entities
            .shift_remove(id)
            .ok_or_else(|| GraphError::NotFound(EntityId::new(id)))?;

        let before = self.edges.len();
        self.edges
            .retain(|key, _| key.from.as_str() != id && key.to.as_str() != id);
        self.contains_parent
            .retain(|child, parent| child.as_str() != id && parent.as_str() != id);
        debug!(
            id,
            removed_edges = before - self.edges.len(),
            "removed entity"
        );

        self.version += 1;
        Ok(entity)
    }

    /// Look up an entity by id
    pub fn get_entity(&self, id: &str) -> GraphResult<&Entity> {
        self.entities
            .get(id)
            .ok_or_else(|| GraphError::NotFound(EntityId::new(id)))
    }

    /// Check whether an entity exists
    pub fn contains_entity(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Look up a single edge by its composite key
    pub fn get_edge(&self, from: &str, to: &str, kind: RelationKind) -> Option<&Relationship> {
        let key = EdgeKey {
            from: EntityId::new(from),
            to: EntityId::new(to),
            kind,
        };
        self.edges.get(&key)
    }

    /// Iterate all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Relationship> {
        self.edges.values()
    }

    /// Iterate entities of one kind, in insertion order
    pub fn entities_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(move |e| e.kind == kind)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Enter deferred-resolution mode for a bulk load.
    pub fn begin_bulk_load(&mut self) {
        self.bulk_mode = true;
    }

    /// Leave bulk mode and resolve parked edges.
    ///
    /// Any edge still referencing a missing endpoint fails the load with a
    /// `DanglingReference`; dropping it silently would corrupt expansion and
    /// path results without signal.
    pub fn finish_bulk_load(&mut self) -> GraphResult<()> {
        self.bulk_mode = false;
        let pending = std::mem::take(&mut self.pending_edges);
        for edge in pending {
            self.insert_edge_checked(edge)?;
            self.version += 1;
        }
        Ok(())
    }

    /// Clear all data from the store
    pub fn clear(&mut self) {
        self.entities.clear();
        self.edges.clear();
        self.contains_parent.clear();
        self.pending_edges.clear();
        self.bulk_mode = false;
        self.version += 1;
    }
}
