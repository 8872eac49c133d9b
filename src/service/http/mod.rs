use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::TutorialService;

pub mod health;
pub mod openapi;
pub mod tutorial;

pub fn http_router(tutorial_service: Arc<TutorialService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi::openapi))
        .route("/api/tutorials", post(tutorial::create))
        .route(
            "/api/tutorials/:id",
            get(tutorial::get_by_id)
                .put(tutorial::update)
                .delete(tutorial::delete),
        )
        .layer(Extension(tutorial_service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub fn cors_layer(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let allowed_origin: HeaderValue = allowed_origin.parse()?;

    Ok(CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
