// HTTP routes configuration

use super::handlers::{health_handler, metrics_handler, translate_handler};
use super::middleware::{request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::engine::Translator;
use crate::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub translator: Arc<dyn Translator>,
}

pub fn create_router(config: AppConfig, translator: Arc<dyn Translator>) -> Result<Router> {
    let body_limit = config.server.body_limit_bytes;
    let state = AppState { config, translator };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/translate", post(translate_handler))
        .layer(axum::middleware::from_fn(track_metrics))
        .layer(RequestBodyLimitLayer::new(body_limit))
        // Browser front end posts directly to this service
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
