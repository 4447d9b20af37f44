//! Entity implementation for the ontology graph
//!
//! An entity is a node at one level of the skill ontology: an industry, a
//! department, a job role, a critical work function, a skill, or a
//! classification tag. The kind is a closed enum; ad-hoc dynamic typing is
//! deliberately not supported, validation happens at the loader boundary.

use super::types::{EntityId, EntityKind, SkillLevel};
use serde::{Deserialize, Serialize};

/// A node in the ontology graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier, unique across all kinds
    pub id: EntityId,

    /// Which ontology level this entity belongs to
    pub kind: EntityKind,

    /// Display name
    pub title: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional category tag (e.g. "Frontend Framework")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Proficiency tier; only meaningful for skills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl Entity {
    /// Create a new entity with the current time as both timestamps.
    pub fn new(id: impl Into<EntityId>, kind: EntityKind, title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Entity {
            id: id.into(),
            kind,
            title: title.into(),
            description: None,
            category: None,
            level: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_level(mut self, level: SkillLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_timestamps(mut self, created_at: i64, updated_at: i64) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl std::hash::Hash for Entity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
