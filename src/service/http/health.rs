use axum::{http::StatusCode, response::Html, Extension};
use std::sync::Arc;

use crate::services::TutorialService;

/// Plain `ok` while the local index is usable, 503 once its lock is poisoned.
#[tracing::instrument(name = "http::health", skip_all)]
pub async fn health(
    Extension(tutorial_service): Extension<Arc<TutorialService>>,
) -> (StatusCode, Html<&'static str>) {
    match tutorial_service.last_id() {
        Ok(_) => (StatusCode::OK, Html("ok")),
        Err(err) => {
            tracing::error!("health check failed: {}", err);
            (StatusCode::SERVICE_UNAVAILABLE, Html("unavailable"))
        }
    }
}
