//! Unweighted shortest-path search
//!
//! Breadth-first search over the adjacency index with a predecessor map.
//! BFS guarantees minimum hop count in an unweighted graph; the search
//! stops the moment the target is reached. Neighbors are visited in edge
//! insertion order, so repeated calls on an unchanged graph return the
//! identical path even when several shortest paths exist.

use super::CancelFlag;
use crate::graph::{Entity, EntityId, EntityStore, GraphError, GraphResult, RelationKind};
use crate::index::{Direction, RelationshipIndex};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Options controlling a shortest-path query.
#[derive(Debug, Clone, Default)]
pub struct PathOptions {
    /// Restrict traversal to these relationship kinds; `None` allows all.
    pub edge_kinds: Option<Vec<RelationKind>>,

    /// Whether edges are followed as directed or both ways. The default is
    /// `Both`: the product asks about connectivity, not hierarchy flow.
    pub direction: Direction,

    /// Cap the search depth; `None` is unbounded. This is the intended
    /// backpressure mechanism, graph size determines cost, not wall time.
    pub max_depth: Option<usize>,
}

/// A discovered path: an ordered, non-empty entity sequence plus the hop
/// count (`distance == entities.len() - 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub entities: Vec<Entity>,
    pub distance: usize,
}

/// Outcome of a shortest-path query on two existing entities.
///
/// `NoPath` is a valid answer about a disconnected pair, distinct from the
/// `NotFound` error raised for an id that does not exist at all.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(Path),
    NoPath,
}

/// Unweighted shortest path from `source` to `target`.
///
/// Fails with `NotFound` if either endpoint id is absent and with
/// `Cancelled` if the flag is raised between layers; an unreachable target
/// is the `NoPath` outcome, not an error.
pub fn shortest_path(
    store: &EntityStore,
    index: &RelationshipIndex,
    source: &str,
    target: &str,
    options: &PathOptions,
    cancel: Option<&CancelFlag>,
) -> GraphResult<PathOutcome> {
    let source_entity = store.get_entity(source)?;
    store.get_entity(target)?;

    if source == target {
        return Ok(PathOutcome::Found(Path {
            entities: vec![source_entity.clone()],
            distance: 0,
        }));
    }

    // Predecessor map doubles as the visited set
    let mut predecessor: FxHashMap<EntityId, EntityId> = FxHashMap::default();
    let mut frontier: Vec<EntityId> = vec![EntityId::new(source)];
    let mut visited_total = 1usize;
    let mut depth = 0usize;

    loop {
        if let Some(flag) = cancel {
            if flag.is_cancelled() {
                return Err(GraphError::Cancelled);
            }
        }
        if let Some(max) = options.max_depth {
            if depth >= max {
                return Ok(PathOutcome::NoPath);
            }
        }

        let mut next = Vec::new();
        for node in &frontier {
            for neighbor in index.neighbors_of(store, node.as_str(), options.direction) {
                if !kind_allowed(&options.edge_kinds, neighbor.kind) {
                    continue;
                }
                if neighbor.id.as_str() == source || predecessor.contains_key(&neighbor.id) {
                    continue;
                }
                predecessor.insert(neighbor.id.clone(), node.clone());
                visited_total += 1;

                if neighbor.id.as_str() == target {
                    trace!(source, target, distance = depth + 1, visited = visited_total, "path found");
                    return reconstruct(store, source, target, &predecessor).map(PathOutcome::Found);
                }
                next.push(neighbor.id);
            }
        }

        if next.is_empty() {
            trace!(source, target, visited = visited_total, "no path");
            return Ok(PathOutcome::NoPath);
        }
        frontier = next;
        depth += 1;
    }
}

fn kind_allowed(kinds: &Option<Vec<RelationKind>>, kind: RelationKind) -> bool {
    match kinds {
        Some(allowed) => allowed.contains(&kind),
        None => true,
    }
}

fn reconstruct(
    store: &EntityStore,
    source: &str,
    target: &str,
    predecessor: &FxHashMap<EntityId, EntityId>,
) -> GraphResult<Path> {
    let mut ids = vec![EntityId::new(target)];
    let mut current = target;
    while current != source {
        // Every visited node except the source has a predecessor
        let prev = &predecessor[current];
        ids.push(prev.clone());
        current = prev.as_str();
    }
    ids.reverse();

    let mut entities = Vec::with_capacity(ids.len());
    for id in &ids {
        entities.push(store.get_entity(id.as_str())?.clone());
    }
    let distance = entities.len() - 1;
    Ok(Path { entities, distance })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Entity, EntityKind, Relationship};

    fn chain_store() -> EntityStore {
        // I1 --contains--> D1 --contains--> J1 --requires--> S1 --relates_to--> S2
        let mut store = EntityStore::new();
        for (id, kind) in [
            ("I1", EntityKind::Industry),
            ("D1", EntityKind::Department),
            ("J1", EntityKind::JobRole),
            ("S1", EntityKind::Skill),
            ("S2", EntityKind::Skill),
        ] {
            store.upsert_entity(Entity::new(id, kind, id)).unwrap();
        }
        store
            .upsert_edge(Relationship::new("I1", "D1", RelationKind::Contains))
            .unwrap();
        store
            .upsert_edge(Relationship::new("D1", "J1", RelationKind::Contains))
            .unwrap();
        store
            .upsert_edge(Relationship::new("J1", "S1", RelationKind::Requires))
            .unwrap();
        store
            .upsert_edge(Relationship::new("S1", "S2", RelationKind::RelatesTo))
            .unwrap();
        store
    }

    fn path_ids(outcome: &PathOutcome) -> Vec<&str> {
        match outcome {
            PathOutcome::Found(path) => path.entities.iter().map(|e| e.id.as_str()).collect(),
            PathOutcome::NoPath => Vec::new(),
        }
    }

    #[test]
    fn test_full_chain_path() {
        let store = chain_store();
        let index = RelationshipIndex::new();

        let outcome =
            shortest_path(&store, &index, "I1", "S2", &PathOptions::default(), None).unwrap();
        assert_eq!(path_ids(&outcome), vec!["I1", "D1", "J1", "S1", "S2"]);
        match outcome {
            PathOutcome::Found(path) => assert_eq!(path.distance, 4),
            PathOutcome::NoPath => panic!("expected a path"),
        }
    }

    #[test]
    fn test_degenerate_path() {
        let store = chain_store();
        let index = RelationshipIndex::new();

        let outcome =
            shortest_path(&store, &index, "S1", "S1", &PathOptions::default(), None).unwrap();
        assert_eq!(path_ids(&outcome), vec!["S1"]);
        match outcome {
            PathOutcome::Found(path) => assert_eq!(path.distance, 0),
            PathOutcome::NoPath => panic!("expected a path"),
        }
    }

    #[test]
    fn test_missing_endpoint_is_error() {
        let store = chain_store();
        let index = RelationshipIndex::new();

        let result = shortest_path(&store, &index, "missing-id", "S1", &PathOptions::default(), None);
        assert_eq!(result, Err(GraphError::NotFound(EntityId::new("missing-id"))));

        let result = shortest_path(&store, &index, "S1", "missing-id", &PathOptions::default(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_direction_outgoing_respects_edge_direction() {
        let store = chain_store();
        let index = RelationshipIndex::new();
        let options = PathOptions {
            direction: Direction::Outgoing,
            ..Default::default()
        };

        // Downhill works...
        let down = shortest_path(&store, &index, "I1", "S2", &options, None).unwrap();
        assert_eq!(path_ids(&down).len(), 5);

        // ...uphill does not
        let up = shortest_path(&store, &index, "S2", "I1", &options, None).unwrap();
        assert_eq!(up, PathOutcome::NoPath);
    }

    #[test]
    fn test_edge_kind_restriction() {
        let store = chain_store();
        let index = RelationshipIndex::new();
        let options = PathOptions {
            edge_kinds: Some(vec![RelationKind::Contains]),
            ..Default::default()
        };

        // I1 to J1 only needs contains edges
        let ok = shortest_path(&store, &index, "I1", "J1", &options, None).unwrap();
        assert_eq!(path_ids(&ok), vec!["I1", "D1", "J1"]);

        // I1 to S1 needs a requires hop, which is excluded
        let blocked = shortest_path(&store, &index, "I1", "S1", &options, None).unwrap();
        assert_eq!(blocked, PathOutcome::NoPath);
    }

    #[test]
    fn test_max_depth_bounds_search() {
        let store = chain_store();
        let index = RelationshipIndex::new();

        let short = PathOptions {
            max_depth: Some(3),
            ..Default::default()
        };
        let blocked = shortest_path(&store, &index, "I1", "S2", &short, None).unwrap();
        assert_eq!(blocked, PathOutcome::NoPath);

        let exact = PathOptions {
            max_depth: Some(4),
            ..Default::default()
        };
        let found = shortest_path(&store, &index, "I1", "S2", &exact, None).unwrap();
        assert_eq!(path_ids(&found).len(), 5);
    }

    #[test]
    fn test_bfs_takes_shortcut() {
        let mut store = chain_store();
        // Lateral shortcut: I1 relates directly to S1
        store
            .upsert_edge(Relationship::new("I1", "S1", RelationKind::RelatesTo))
            .unwrap();
        let index = RelationshipIndex::new();

        let outcome =
            shortest_path(&store, &index, "I1", "S2", &PathOptions::default(), None).unwrap();
        assert_eq!(path_ids(&outcome), vec!["I1", "S1", "S2"]);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // Two equally short paths hub -> {a, b} -> sink; the first
        // inserted edge wins, on every call.
        let mut store = EntityStore::new();
        for id in ["hub", "a", "b", "sink"] {
            store
                .upsert_entity(Entity::new(id, EntityKind::Skill, id.to_uppercase()))
                .unwrap();
        }
        for (from, to) in [("hub", "b"), ("hub", "a"), ("b", "sink"), ("a", "sink")] {
            store
                .upsert_edge(Relationship::new(from, to, RelationKind::RelatesTo))
                .unwrap();
        }
        let index = RelationshipIndex::new();

        let first =
            shortest_path(&store, &index, "hub", "sink", &PathOptions::default(), None).unwrap();
        assert_eq!(path_ids(&first), vec!["hub", "b", "sink"]);

        for _ in 0..10 {
            let again =
                shortest_path(&store, &index, "hub", "sink", &PathOptions::default(), None)
                    .unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_disconnected_is_no_path() {
        let mut store = EntityStore::new();
        store
            .upsert_entity(Entity::new("a", EntityKind::Skill, "A"))
            .unwrap();
        store
            .upsert_entity(Entity::new("b", EntityKind::Skill, "B"))
            .unwrap();
        let index = RelationshipIndex::new();

        let outcome =
            shortest_path(&store, &index, "a", "b", &PathOptions::default(), None).unwrap();
        assert_eq!(outcome, PathOutcome::NoPath);
    }

    #[test]
    fn test_cancellation() {
        let store = chain_store();
        let index = RelationshipIndex::new();
        let flag = CancelFlag::new();
        flag.cancel();

        let result = shortest_path(
            &store,
            &index,
            "I1",
            "S2",
            &PathOptions::default(),
            Some(&flag),
        );
        assert_eq!(result, Err(GraphError::Cancelled));
    }
}
