//! Axum-based HTTP server for the translation service.
//!
//! # Components
//!
//! - `handlers`: implementation of individual endpoints (translate, health, metrics).
//! - `middleware`: request ID layers and per-request metrics recording.
//! - `routes`: the main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
