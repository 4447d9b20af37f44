//! HTTP handlers for the ontology query API
//!
//! Thin translation between HTTP shapes and the query facade. The one
//! normalization performed here: a "no path" outcome becomes an empty path
//! with distance -1, a UI-safe shape rather than an error status.

use super::server::SharedEngine;
use crate::graph::{Entity, EntityKind, GraphError, SkillLevel};
use crate::index::Direction;
use crate::query::SearchFilters;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

fn error_response(err: GraphError) -> Response {
    let status = match err {
        GraphError::NotFound(_) => StatusCode::NOT_FOUND,
        GraphError::KindConflict { .. } | GraphError::ParentConflict { .. } => StatusCode::CONFLICT,
        GraphError::DanglingReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        GraphError::Cancelled => StatusCode::REQUEST_TIMEOUT,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.into() })),
    )
        .into_response()
}

/// Handler for system status
pub async fn status(State(engine): State<SharedEngine>) -> impl IntoResponse {
    let engine = engine.read().await;
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "storage": {
            "entities": engine.store().entity_count(),
            "edges": engine.store().edge_count(),
            "graph_version": engine.store().version(),
        }
    }))
}

pub async fn industries(State(engine): State<SharedEngine>) -> impl IntoResponse {
    let engine = engine.read().await;
    Json(engine.industries().into_iter().cloned().collect::<Vec<_>>())
}

pub async fn departments(
    State(engine): State<SharedEngine>,
    Path(id): Path<String>,
) -> Response {
    let engine = engine.read().await;
    match engine.departments_of(&id) {
        Ok(departments) => Json(departments).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn jobroles(State(engine): State<SharedEngine>, Path(id): Path<String>) -> Response {
    let engine = engine.read().await;
    match engine.jobroles_of(&id) {
        Ok(jobroles) => Json(jobroles).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn skills(State(engine): State<SharedEngine>, Path(id): Path<String>) -> Response {
    let engine = engine.read().await;
    match engine.skills_of(&id) {
        Ok(skills) => Json(skills).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub industry: Option<String>,
    pub department: Option<String>,
    pub jobrole: Option<String>,
}

pub async fn search(
    State(engine): State<SharedEngine>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let filters = SearchFilters {
        industry: params.industry,
        department: params.department,
        jobrole: params.jobrole,
    };
    let engine = engine.read().await;
    Json(engine.search(&params.q, &filters))
}

#[derive(Deserialize)]
pub struct ShortestPathParams {
    pub source: String,
    pub target: String,
    /// Comma-separated relationship kinds, e.g. `contains,requires`
    pub kinds: Option<String>,
    /// `outgoing`, `incoming` or `both` (default)
    pub direction: Option<String>,
    pub max_depth: Option<usize>,
}

/// One step of a discovered path, in UI shape
#[derive(Serialize)]
pub struct PathNode {
    pub id: String,
    pub title: String,
    pub kind: EntityKind,
}

/// UI-safe path response: `distance` is -1 and `path` empty when the two
/// entities are disconnected.
#[derive(Serialize)]
pub struct PathResponse {
    pub path: Vec<PathNode>,
    pub distance: i64,
}

pub async fn shortest_path(
    State(engine): State<SharedEngine>,
    Query(params): Query<ShortestPathParams>,
) -> Response {
    use crate::algo::{PathOptions, PathOutcome};
    use crate::graph::RelationKind;

    let edge_kinds = match &params.kinds {
        Some(list) => {
            let mut kinds = Vec::new();
            for raw in list.split(',').filter(|s| !s.is_empty()) {
                match RelationKind::parse(raw) {
                    Some(kind) => kinds.push(kind),
                    None => return bad_request(format!("unknown relationship kind: {raw}")),
                }
            }
            Some(kinds)
        }
        None => None,
    };
    let direction = match params.direction.as_deref() {
        None | Some("both") => Direction::Both,
        Some("outgoing") => Direction::Outgoing,
        Some("incoming") => Direction::Incoming,
        Some(other) => return bad_request(format!("unknown direction: {other}")),
    };
    let options = PathOptions {
        edge_kinds,
        direction,
        max_depth: params.max_depth,
    };

    let engine = engine.read().await;
    match engine.shortest_path(&params.source, &params.target, &options, None) {
        Ok(PathOutcome::Found(path)) => Json(PathResponse {
            distance: path.distance as i64,
            path: path.entities.into_iter().map(path_node).collect(),
        })
        .into_response(),
        Ok(PathOutcome::NoPath) => Json(PathResponse {
            path: Vec::new(),
            distance: -1,
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

fn path_node(entity: Entity) -> PathNode {
    PathNode {
        id: entity.id.to_string(),
        title: entity.title,
        kind: entity.kind,
    }
}

#[derive(Deserialize)]
pub struct RelationshipParams {
    pub depth: Option<usize>,
}

pub async fn relationships(
    State(engine): State<SharedEngine>,
    Path(id): Path<String>,
    Query(params): Query<RelationshipParams>,
) -> Response {
    let engine = engine.read().await;
    match engine.relationships(&id, params.depth.unwrap_or(1), None) {
        Ok(expansion) => Json(json!({
            "entity": expansion.entity,
            "connected_entities": expansion.connected_entities,
            "relationships": expansion.relationships,
        }))
        .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
pub struct SkillPayload {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<SkillLevel>,
}

impl SkillPayload {
    fn into_entity(self) -> Entity {
        let mut entity = Entity::new(self.id, EntityKind::Skill, self.title);
        entity.description = self.description;
        entity.category = self.category;
        entity.level = self.level;
        entity
    }
}

pub async fn create_skill(
    State(engine): State<SharedEngine>,
    Json(payload): Json<SkillPayload>,
) -> Response {
    let entity = payload.into_entity();
    let id = entity.id.clone();
    let mut engine = engine.write().await;
    match engine.store_mut().upsert_entity(entity) {
        Ok(()) => {
            // upsert keeps the stored entity canonical (timestamps)
            let stored = match engine.store().get_entity(id.as_str()) {
                Ok(entity) => entity.clone(),
                Err(err) => return error_response(err),
            };
            (StatusCode::CREATED, Json(stored)).into_response()
        }
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
pub struct SkillUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<SkillLevel>,
}

pub async fn update_skill(
    State(engine): State<SharedEngine>,
    Path(id): Path<String>,
    Json(update): Json<SkillUpdate>,
) -> Response {
    let mut engine = engine.write().await;
    let mut entity = match engine.store().get_entity(&id) {
        Ok(entity) => entity.clone(),
        Err(err) => return error_response(err),
    };
    if let Some(title) = update.title {
        entity.title = title;
    }
    if update.description.is_some() {
        entity.description = update.description;
    }
    if update.category.is_some() {
        entity.category = update.category;
    }
    if update.level.is_some() {
        entity.level = update.level;
    }
    match engine.store_mut().upsert_entity(entity) {
        Ok(()) => {
            let stored = match engine.store().get_entity(&id) {
                Ok(entity) => entity.clone(),
                Err(err) => return error_response(err),
            };
            Json(stored).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn delete_skill(State(engine): State<SharedEngine>, Path(id): Path<String>) -> Response {
    let mut engine = engine.write().await;
    match engine.store_mut().remove_entity(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
pub struct AttachSkill {
    pub skill_id: String,
}

pub async fn attach_skill(
    State(engine): State<SharedEngine>,
    Path(id): Path<String>,
    Json(payload): Json<AttachSkill>,
) -> Response {
    use crate::graph::{RelationKind, Relationship};

    let mut engine = engine.write().await;
    let edge = Relationship::new(id.as_str(), payload.skill_id.as_str(), RelationKind::Requires);
    match engine.store_mut().upsert_edge(edge) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(err),
    }
}
