//! Core ontology graph implementation
//!
//! This module implements the entity-relationship data model:
//! - Typed entities at each ontology level (Industry, Department, JobRole,
//!   CriticalWorkFunction, Skill, Classification)
//! - Directed, typed edges (`contains`, `requires`, `relates_to`)
//! - In-memory storage with insertion-ordered maps and a version counter
//!   that dependent indexes use for staleness detection

pub mod edge;
pub mod entity;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{EdgeKey, Relationship};
pub use entity::Entity;
pub use store::{EntityStore, GraphError, GraphResult};
pub use types::{EntityId, EntityKind, RelationKind, SkillLevel};
