//! Query facade over the ontology engine
//!
//! `QueryEngine` is the single entry point the UI layer calls: search,
//! hierarchy listings, relationship expansion and shortest-path queries.
//! It owns the store and the adjacency index; every query method is a pure
//! read, mutations go through `store_mut` (which implicitly invalidates the
//! index via the store's version counter).

pub mod search;

pub use search::{SearchFilters, SearchHit};

use crate::algo::{self, CancelFlag, Expansion, PathOptions, PathOutcome};
use crate::graph::{Entity, EntityId, EntityKind, EntityStore, GraphResult, RelationKind};
use crate::index::{Direction, RelationshipIndex};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Facade consumed by the UI layer. Stable contract independent of storage
/// internals; no facade query ever mutates the graph.
#[derive(Debug, Default)]
pub struct QueryEngine {
    store: EntityStore,
    index: RelationshipIndex,
}

impl QueryEngine {
    pub fn new(store: EntityStore) -> Self {
        QueryEngine {
            store,
            index: RelationshipIndex::new(),
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable access for the loader and the mutation commands. Any cached
    /// adjacency is revalidated on the next read via the version counter.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Case-insensitive substring search over titles and descriptions,
    /// ranked by relevance (title prefix > title substring > description),
    /// ties broken by title then id. Ancestor filters keep only candidates
    /// whose upward ancestry contains every filter id.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SearchHit> {
        let query_lower = query.trim().to_lowercase();
        let mut hits = Vec::new();

        for entity in self.store.entities() {
            let Some(score) = search::score_entity(entity, &query_lower) else {
                continue;
            };
            if !filters.is_empty() && !self.ancestry_matches(entity, filters) {
                continue;
            }
            hits.push(search::hit_from(entity, score));
        }

        hits.sort_by(|a, b| {
            b.relevance_score
                .total_cmp(&a.relevance_score)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });
        debug!(query, hits = hits.len(), "search");
        hits
    }

    /// Shortest path between two entities; see [`algo::shortest_path`].
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
        options: &PathOptions,
        cancel: Option<&CancelFlag>,
    ) -> GraphResult<PathOutcome> {
        algo::shortest_path(&self.store, &self.index, source, target, options, cancel)
    }

    /// Neighborhood of an entity for visualization; see [`algo::expand`].
    pub fn relationships(
        &self,
        id: &str,
        depth: usize,
        cancel: Option<&CancelFlag>,
    ) -> GraphResult<Expansion> {
        algo::expand(&self.store, &self.index, id, depth, cancel)
    }

    /// All industries, in load order.
    pub fn industries(&self) -> Vec<&Entity> {
        self.store.entities_of_kind(EntityKind::Industry).collect()
    }

    /// Departments contained by an industry.
    pub fn departments_of(&self, industry_id: &str) -> GraphResult<Vec<Entity>> {
        self.children_of(industry_id, RelationKind::Contains, EntityKind::Department)
    }

    /// Job roles contained by a department.
    pub fn jobroles_of(&self, department_id: &str) -> GraphResult<Vec<Entity>> {
        self.children_of(department_id, RelationKind::Contains, EntityKind::JobRole)
    }

    /// Skills required by a job role.
    pub fn skills_of(&self, jobrole_id: &str) -> GraphResult<Vec<Entity>> {
        self.children_of(jobrole_id, RelationKind::Requires, EntityKind::Skill)
    }

    fn children_of(
        &self,
        parent_id: &str,
        edge_kind: RelationKind,
        child_kind: EntityKind,
    ) -> GraphResult<Vec<Entity>> {
        self.store.get_entity(parent_id)?;
        let mut children = Vec::new();
        for neighbor in self
            .index
            .neighbors_of(&self.store, parent_id, Direction::Outgoing)
        {
            if neighbor.kind != edge_kind {
                continue;
            }
            let child = self.store.get_entity(neighbor.id.as_str())?;
            if child.kind == child_kind {
                children.push(child.clone());
            }
        }
        Ok(children)
    }

    /// True when every filter id appears in the entity's upward ancestry
    /// (or is the entity itself).
    fn ancestry_matches(&self, entity: &Entity, filters: &SearchFilters) -> bool {
        let ancestors = self.ancestors_of(entity.id.as_str());
        filters
            .ids()
            .all(|id| id == entity.id.as_str() || ancestors.contains(id))
    }

    /// Transitive upward closure over incoming `contains` edges, plus
    /// incoming `requires` edges so that industry/department/jobrole
    /// filters reach the skills hanging off a job role.
    fn ancestors_of(&self, id: &str) -> FxHashSet<EntityId> {
        let mut ancestors: FxHashSet<EntityId> = FxHashSet::default();
        let mut frontier = vec![EntityId::new(id)];

        while let Some(current) = frontier.pop() {
            for neighbor in self
                .index
                .neighbors_of(&self.store, current.as_str(), Direction::Incoming)
            {
                if neighbor.kind == RelationKind::RelatesTo {
                    continue;
                }
                if neighbor.id.as_str() != id && ancestors.insert(neighbor.id.clone()) {
                    frontier.push(neighbor.id);
                }
            }
        }
        ancestors
    }
}
