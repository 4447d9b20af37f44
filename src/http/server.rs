//! HTTP server wiring for the ontology query API

use super::handler;
use crate::query::QueryEngine;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Engine shared between handlers. Queries take the read lock; mutation
/// commands take the write lock, so reads always see a consistent snapshot.
pub type SharedEngine = Arc<RwLock<QueryEngine>>;

/// Build the API router. Exposed separately from [`HttpServer`] so tests
/// can drive it in-process.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/api/status", get(handler::status))
        .route("/api/industries", get(handler::industries))
        .route("/api/industry/:id/departments", get(handler::departments))
        .route("/api/department/:id/jobroles", get(handler::jobroles))
        .route("/api/jobrole/:id/skills", get(handler::skills).post(handler::attach_skill))
        .route("/api/search", get(handler::search))
        .route("/api/graph/shortest-path", get(handler::shortest_path))
        .route("/api/entity/:id/relationships", get(handler::relationships))
        .route("/api/skills", post(handler::create_skill))
        .route("/api/skills/:id", put(handler::update_skill).delete(handler::delete_skill))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// HTTP server serving the ontology query API
pub struct HttpServer {
    engine: SharedEngine,
    port: u16,
}

impl HttpServer {
    pub fn new(engine: SharedEngine, port: u16) -> Self {
        Self { engine, port }
    }

    pub async fn start(&self) -> anyhow::Result<()> {
        let app = router(Arc::clone(&self.engine));

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("ontology API available at http://localhost:{}", self.port);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
