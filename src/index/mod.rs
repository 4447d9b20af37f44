//! Adjacency index over the entity store
//!
//! Two hash maps (outgoing, incoming) keyed by entity id give amortized
//! O(1) neighbor lookup. The index records the store `version` it was built
//! from; every read revalidates against the store's current version and
//! triggers a full O(E) rebuild when stale. Entity mutation is rare
//! relative to reads in this domain, so a full rebuild beats incremental
//! maintenance on simplicity.

use crate::graph::{EntityId, EntityStore, RelationKind};
use rustc_hash::FxHashMap;
use std::sync::RwLock;
use tracing::debug;

/// Traversal direction for neighbor queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Outgoing,
    Incoming,
    #[default]
    Both,
}

/// A `(neighbor, edge kind)` pair as seen from the queried entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub id: EntityId,
    pub kind: RelationKind,
}

#[derive(Debug, Default)]
struct Adjacency {
    /// Store version this adjacency was built from
    version: u64,
    outgoing: FxHashMap<EntityId, Vec<Neighbor>>,
    incoming: FxHashMap<EntityId, Vec<Neighbor>>,
}

impl Adjacency {
    fn build(store: &EntityStore) -> Self {
        let mut outgoing: FxHashMap<EntityId, Vec<Neighbor>> = FxHashMap::default();
        let mut incoming: FxHashMap<EntityId, Vec<Neighbor>> = FxHashMap::default();

        // Edge insertion order carries over into the neighbor lists, which
        // keeps BFS enumeration order stable across rebuilds.
        for edge in store.edges() {
            outgoing.entry(edge.from.clone()).or_default().push(Neighbor {
                id: edge.to.clone(),
                kind: edge.kind,
            });
            incoming.entry(edge.to.clone()).or_default().push(Neighbor {
                id: edge.from.clone(),
                kind: edge.kind,
            });
        }

        Adjacency {
            version: store.version(),
            outgoing,
            incoming,
        }
    }
}

/// Lazily rebuilt adjacency index.
///
/// Reads share the index through an internal `RwLock`; a rebuild takes the
/// write lock, so a read never observes a half-updated adjacency.
#[derive(Debug, Default)]
pub struct RelationshipIndex {
    inner: RwLock<Adjacency>,
}

impl RelationshipIndex {
    /// Create an empty index; the first read builds it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbors of `id` in the given direction, in edge insertion order
    /// (outgoing first for `Both`). An entity with no edges yields an empty
    /// list, not an error; existence checks belong to the caller.
    pub fn neighbors_of(&self, store: &EntityStore, id: &str, direction: Direction) -> Vec<Neighbor> {
        self.ensure_current(store);

        let adjacency = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut neighbors = Vec::new();
        if matches!(direction, Direction::Outgoing | Direction::Both) {
            if let Some(out) = adjacency.outgoing.get(id) {
                neighbors.extend_from_slice(out);
            }
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            if let Some(inc) = adjacency.incoming.get(id) {
                neighbors.extend_from_slice(inc);
            }
        }
        neighbors
    }

    /// Version of the store the current adjacency was built from.
    pub fn built_version(&self) -> u64 {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).version
    }

    fn ensure_current(&self, store: &EntityStore) {
        {
            let adjacency = self.inner.read().unwrap_or_else(|e| e.into_inner());
            if adjacency.version == store.version() {
                return;
            }
        }
        let mut adjacency = self.inner.write().unwrap_or_else(|e| e.into_inner());
        // Another reader may have rebuilt while we waited for the lock
        if adjacency.version != store.version() {
            debug!(
                from_version = adjacency.version,
                to_version = store.version(),
                edges = store.edge_count(),
                "rebuilding adjacency index"
            );
            *adjacency = Adjacency::build(store);
        }
    }
}
