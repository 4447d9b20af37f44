//! Skillgraph
//!
//! An in-memory graph engine for a hierarchical skill ontology
//! (Industry → Department → Job Role → Skill) with ranked search,
//! relationship expansion and unweighted shortest-path discovery.
//!
//! # Architecture
//!
//! Dependencies point inward, UI to engine:
//!
//! - [`graph`]: typed entities and relationships, in-memory store with a
//!   version counter
//! - [`index`]: lazily rebuilt adjacency index for O(1) neighbor lookup
//! - [`algo`]: BFS shortest path and bounded neighborhood expansion
//! - [`query`]: the facade consumed by callers (search, listings, paths)
//! - [`loader`]: snapshot parsing and validation at the data boundary
//! - [`http`]: axum API mirroring the explorer UI's endpoints
//!
//! The engine performs no I/O and never substitutes placeholder data: a
//! disconnected pair is a "no path" answer, a missing id is an error, and
//! the two are never conflated.
//!
//! # Example
//!
//! ```rust
//! use skillgraph::loader::demo::demo_store;
//! use skillgraph::query::QueryEngine;
//! use skillgraph::algo::{PathOptions, PathOutcome};
//!
//! let engine = QueryEngine::new(demo_store());
//!
//! match engine
//!     .shortest_path("react-001", "sql-001", &PathOptions::default(), None)
//!     .unwrap()
//! {
//!     PathOutcome::Found(path) => println!("{} hops", path.distance),
//!     PathOutcome::NoPath => println!("not connected"),
//! }
//! ```

pub mod algo;
pub mod graph;
pub mod http;
pub mod index;
pub mod loader;
pub mod query;

pub use algo::{CancelFlag, Expansion, Path, PathOptions, PathOutcome};
pub use graph::{
    Entity, EntityId, EntityKind, EntityStore, GraphError, GraphResult, RelationKind,
    Relationship, SkillLevel,
};
pub use index::{Direction, Neighbor, RelationshipIndex};
pub use query::{QueryEngine, SearchFilters, SearchHit};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the version string
pub fn version() -> &'static str {
    VERSION
}
