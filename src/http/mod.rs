//! HTTP query surface for the ontology explorer UI

pub mod handler;
pub mod server;

pub use server::{router, HttpServer, SharedEngine};
