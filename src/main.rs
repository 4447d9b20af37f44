use anyhow::Context;
use skillgraph::http::HttpServer;
use skillgraph::loader;
use skillgraph::query::QueryEngine;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("skillgraph v{}", skillgraph::version());

    // Optional arguments: snapshot path and port
    let mut args = std::env::args().skip(1);
    let snapshot_path = args.next();
    let port: u16 = match args.next() {
        Some(raw) => raw.parse().context("port must be a number")?,
        None => 8080,
    };

    let store = match &snapshot_path {
        Some(path) => loader::load_snapshot(path)
            .with_context(|| format!("loading snapshot {path}"))?,
        None => {
            // Explicit fallback at the binary boundary; the engine itself
            // never substitutes demo data for a failed load.
            info!("no snapshot given, serving the built-in demo ontology");
            loader::demo::demo_store()
        }
    };
    info!(
        entities = store.entity_count(),
        edges = store.edge_count(),
        "ontology ready"
    );

    let engine = Arc::new(RwLock::new(QueryEngine::new(store)));
    HttpServer::new(engine, port).start().await
}
