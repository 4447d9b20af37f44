//! Neighborhood expansion for relationship visualization
//!
//! Answers "what is this entity connected to", one or more hops out.
//! Depth 1 returns the direct neighborhood; deeper expansions run a
//! layered multi-source BFS, accumulating everything encountered. The
//! returned relationships are the edges actually found in the store,
//! nothing is inferred.

use super::CancelFlag;
use crate::graph::{Entity, EntityId, EntityStore, GraphError, GraphResult, RelationKind, Relationship};
use crate::index::{Direction, RelationshipIndex};
use rustc_hash::FxHashSet;

/// Expansion depth is capped to bound result size on dense graphs.
pub const MAX_EXPANSION_DEPTH: usize = 3;

/// An entity's neighborhood: the entity itself, every connected entity
/// (deduplicated by id, in discovery order) and the edges linking them.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub entity: Entity,
    pub connected_entities: Vec<Entity>,
    pub relationships: Vec<Relationship>,
}

/// Expand the neighborhood of `id` out to `depth` hops (clamped to
/// 1..=`MAX_EXPANSION_DEPTH`), across all edge kinds and both directions.
pub fn expand(
    store: &EntityStore,
    index: &RelationshipIndex,
    id: &str,
    depth: usize,
    cancel: Option<&CancelFlag>,
) -> GraphResult<Expansion> {
    let entity = store.get_entity(id)?.clone();
    let depth = depth.clamp(1, MAX_EXPANSION_DEPTH);

    let mut seen: FxHashSet<EntityId> = FxHashSet::default();
    seen.insert(entity.id.clone());
    let mut edge_seen: FxHashSet<(EntityId, EntityId, RelationKind)> =
        FxHashSet::default();

    let mut connected_entities = Vec::new();
    let mut relationships = Vec::new();
    let mut frontier: Vec<EntityId> = vec![entity.id.clone()];

    for _layer in 0..depth {
        if let Some(flag) = cancel {
            if flag.is_cancelled() {
                return Err(GraphError::Cancelled);
            }
        }

        let mut next = Vec::new();
        for node in &frontier {
            // Direction matters for edge reconstruction, so query each
            // side separately instead of `Direction::Both`.
            for neighbor in index.neighbors_of(store, node.as_str(), Direction::Outgoing) {
                collect_edge(store, node, &neighbor.id, neighbor.kind, true, &mut edge_seen, &mut relationships);
                visit(store, neighbor.id, &mut seen, &mut connected_entities, &mut next)?;
            }
            for neighbor in index.neighbors_of(store, node.as_str(), Direction::Incoming) {
                collect_edge(store, node, &neighbor.id, neighbor.kind, false, &mut edge_seen, &mut relationships);
                visit(store, neighbor.id, &mut seen, &mut connected_entities, &mut next)?;
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    Ok(Expansion {
        entity,
        connected_entities,
        relationships,
    })
}

fn collect_edge(
    store: &EntityStore,
    node: &EntityId,
    neighbor: &EntityId,
    kind: RelationKind,
    outgoing: bool,
    edge_seen: &mut FxHashSet<(EntityId, EntityId, RelationKind)>,
    relationships: &mut Vec<Relationship>,
) {
    let (from, to) = if outgoing {
        (node.clone(), neighbor.clone())
    } else {
        (neighbor.clone(), node.clone())
    };
    if edge_seen.insert((from.clone(), to.clone(), kind)) {
        if let Some(edge) = store.get_edge(from.as_str(), to.as_str(), kind) {
            relationships.push(edge.clone());
        }
    }
}

fn visit(
    store: &EntityStore,
    id: EntityId,
    seen: &mut FxHashSet<EntityId>,
    connected_entities: &mut Vec<Entity>,
    next: &mut Vec<EntityId>,
) -> GraphResult<()> {
    if seen.insert(id.clone()) {
        connected_entities.push(store.get_entity(id.as_str())?.clone());
        next.push(id);
    }
    Ok(())
}
