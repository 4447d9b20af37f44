//! Snapshot loading for the ontology graph
//!
//! The engine performs no I/O of its own; this loader is the boundary where
//! external data becomes typed entities and edges. Records are validated
//! here (kinds, levels, timestamps), not guessed field-by-field at query
//! time, and the load fails loud on dangling references or kind conflicts.
//! There is deliberately no fallback-to-placeholder data in this path; the
//! binary decides explicitly whether to fall back to the demo ontology.

pub mod demo;

use crate::graph::{Entity, EntityKind, EntityStore, GraphError, RelationKind, Relationship, SkillLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a snapshot
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record {id}: unknown skill level {level:?}")]
    UnknownLevel { id: String, level: String },

    #[error("record {id}: bad timestamp {value:?}")]
    BadTimestamp { id: String, value: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// One record of the snapshot file. All ontology levels share the shape;
/// the parent field and level are interpreted per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Skill proficiency tier; accepted case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// RFC 3339 timestamps, as emitted by the upstream API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Containing industry (departments only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_id: Option<String>,
    /// Containing department (job roles only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    /// Containing job role (critical work functions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobrole_id: Option<String>,
}

/// A jobrole → skill dependency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRoleSkill {
    pub jobrole_id: String,
    pub skill_id: String,
}

/// A lateral skill ↔ skill association (stored as directed from → to)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedSkills {
    pub from: String,
    pub to: String,
}

/// Flat snapshot of the whole ontology, mirroring the upstream fixture
/// layout: entities per level, then the non-hierarchical links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub industries: Vec<EntityRecord>,
    #[serde(default)]
    pub departments: Vec<EntityRecord>,
    #[serde(default)]
    pub jobroles: Vec<EntityRecord>,
    #[serde(default)]
    pub work_functions: Vec<EntityRecord>,
    #[serde(default)]
    pub skills: Vec<EntityRecord>,
    #[serde(default)]
    pub classifications: Vec<EntityRecord>,
    #[serde(default)]
    pub jobrole_skills: Vec<JobRoleSkill>,
    #[serde(default)]
    pub related_skills: Vec<RelatedSkills>,
}

/// Load a snapshot file into a fresh store.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<EntityStore, LoadError> {
    let json = std::fs::read_to_string(path)?;
    load_snapshot_str(&json)
}

/// Load a snapshot from a JSON string into a fresh store.
///
/// Entities are inserted before edges, under deferred resolution, so the
/// section order inside the file does not matter; what must hold is that
/// every referenced id exists somewhere in the snapshot.
pub fn load_snapshot_str(json: &str) -> Result<EntityStore, LoadError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    build_store(&snapshot)
}

/// Build a store from an in-memory snapshot.
pub fn build_store(snapshot: &Snapshot) -> Result<EntityStore, LoadError> {
    let mut store = EntityStore::new();
    store.begin_bulk_load();

    for record in &snapshot.industries {
        store.upsert_entity(to_entity(record, EntityKind::Industry)?)?;
    }
    for record in &snapshot.departments {
        store.upsert_entity(to_entity(record, EntityKind::Department)?)?;
        if let Some(parent) = &record.industry_id {
            store.upsert_edge(Relationship::new(
                parent.as_str(),
                record.id.as_str(),
                RelationKind::Contains,
            ))?;
        }
    }
    for record in &snapshot.jobroles {
        store.upsert_entity(to_entity(record, EntityKind::JobRole)?)?;
        if let Some(parent) = &record.department_id {
            store.upsert_edge(Relationship::new(
                parent.as_str(),
                record.id.as_str(),
                RelationKind::Contains,
            ))?;
        }
    }
    for record in &snapshot.work_functions {
        store.upsert_entity(to_entity(record, EntityKind::CriticalWorkFunction)?)?;
        if let Some(parent) = &record.jobrole_id {
            store.upsert_edge(Relationship::new(
                parent.as_str(),
                record.id.as_str(),
                RelationKind::Contains,
            ))?;
        }
    }
    for record in &snapshot.skills {
        store.upsert_entity(to_entity(record, EntityKind::Skill)?)?;
    }
    for record in &snapshot.classifications {
        store.upsert_entity(to_entity(record, EntityKind::Classification)?)?;
    }

    for link in &snapshot.jobrole_skills {
        store.upsert_edge(Relationship::new(
            link.jobrole_id.as_str(),
            link.skill_id.as_str(),
            RelationKind::Requires,
        ))?;
    }
    for link in &snapshot.related_skills {
        store.upsert_edge(Relationship::new(
            link.from.as_str(),
            link.to.as_str(),
            RelationKind::RelatesTo,
        ))?;
    }

    store.finish_bulk_load()?;
    info!(
        entities = store.entity_count(),
        edges = store.edge_count(),
        "snapshot loaded"
    );
    Ok(store)
}

fn to_entity(record: &EntityRecord, kind: EntityKind) -> Result<Entity, LoadError> {
    let mut entity = Entity::new(record.id.as_str(), kind, record.title.as_str());
    entity.description = record.description.clone();
    entity.category = record.category.clone();

    if let Some(level) = &record.level {
        entity.level = Some(SkillLevel::parse(level).ok_or_else(|| LoadError::UnknownLevel {
            id: record.id.clone(),
            level: level.clone(),
        })?);
    }
    if let Some(created) = &record.created_at {
        entity.created_at = parse_timestamp(&record.id, created)?;
        entity.updated_at = entity.created_at;
    }
    if let Some(updated) = &record.updated_at {
        entity.updated_at = parse_timestamp(&record.id, updated)?;
    }
    Ok(entity)
}

fn parse_timestamp(id: &str, value: &str) -> Result<i64, LoadError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| LoadError::BadTimestamp {
            id: id.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "industries": [
            {"id": "tech-001", "title": "Technology", "created_at": "2024-01-01T00:00:00Z"}
        ],
        "departments": [
            {"id": "eng-001", "title": "Engineering", "industry_id": "tech-001"}
        ],
        "jobroles": [
            {"id": "frontend-001", "title": "Frontend Developer", "department_id": "eng-001"}
        ],
        "skills": [
            {"id": "react-001", "title": "React", "level": "Advanced"},
            {"id": "css-001", "title": "CSS"}
        ],
        "jobrole_skills": [
            {"jobrole_id": "frontend-001", "skill_id": "react-001"}
        ],
        "related_skills": [
            {"from": "react-001", "to": "css-001"}
        ]
    }"#;

    #[test]
    fn test_load_snapshot_str() {
        let store = load_snapshot_str(SNAPSHOT).unwrap();
        assert_eq!(store.entity_count(), 5);
        assert_eq!(store.edge_count(), 4);

        let react = store.get_entity("react-001").unwrap();
        assert_eq!(react.kind, EntityKind::Skill);
        assert_eq!(react.level, Some(SkillLevel::Advanced));

        let tech = store.get_entity("tech-001").unwrap();
        assert_eq!(tech.created_at, 1704067200000);
    }

    #[test]
    fn test_dangling_link_fails_load() {
        let json = r#"{
            "skills": [{"id": "react-001", "title": "React"}],
            "related_skills": [{"from": "react-001", "to": "ghost-001"}]
        }"#;
        let result = load_snapshot_str(json);
        assert!(matches!(
            result,
            Err(LoadError::Graph(GraphError::DanglingReference { .. }))
        ));
    }

    #[test]
    fn test_unknown_level_fails_load() {
        let json = r#"{"skills": [{"id": "x", "title": "X", "level": "ninja"}]}"#;
        assert!(matches!(
            load_snapshot_str(json),
            Err(LoadError::UnknownLevel { .. })
        ));
    }

    #[test]
    fn test_bad_timestamp_fails_load() {
        let json = r#"{"skills": [{"id": "x", "title": "X", "created_at": "yesterday"}]}"#;
        assert!(matches!(
            load_snapshot_str(json),
            Err(LoadError::BadTimestamp { .. })
        ));
    }

    #[test]
    fn test_malformed_json_fails_load() {
        assert!(matches!(load_snapshot_str("{"), Err(LoadError::Parse(_))));
    }
}
