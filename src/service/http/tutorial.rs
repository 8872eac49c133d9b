use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use tutorials_core::{Error, Tutorial};

use crate::services::TutorialService;

/// Request body for create and update. Any `id` in the body is ignored and
/// missing fields take their defaults.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct TutorialPayload {
    pub title: String,
    pub description: String,
    pub published: bool,
}

#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_not_found() {
            return StatusCode::NOT_FOUND.into_response();
        }

        tracing::error!("request failed: {}", self.0);

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Create a new Tutorial
#[utoipa::path(
    post,
    path = "/api/tutorials",
    request_body = TutorialPayload,
    responses(
        (status = 201, description = "Tutorial created", body = Tutorial),
        (status = 500, description = "Tutorial could not be stored")
    ),
    tag = "tutorials"
)]
#[tracing::instrument(name = "http::tutorial::create", skip(tutorial_service))]
pub async fn create(
    Extension(tutorial_service): Extension<Arc<TutorialService>>,
    Json(payload): Json<TutorialPayload>,
) -> Result<(StatusCode, Json<Tutorial>), ApiError> {
    let tutorial = Tutorial::new(&payload.title, &payload.description, payload.published);

    let created = tutorial_service.save(tutorial).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Retrieve a Tutorial by Id
///
/// Returns the stored tutorial with its id, title, description and
/// published status.
#[utoipa::path(
    get,
    path = "/api/tutorials/{id}",
    params(("id" = u64, Path, description = "Tutorial id")),
    responses(
        (status = 200, description = "Tutorial found", body = Tutorial),
        (status = 404, description = "No tutorial stored under this id"),
        (status = 500, description = "Tutorial could not be read")
    ),
    tag = "tutorials"
)]
#[tracing::instrument(name = "http::tutorial::get_by_id", skip(tutorial_service))]
pub async fn get_by_id(
    Extension(tutorial_service): Extension<Arc<TutorialService>>,
    Path(id): Path<u64>,
) -> Result<Json<Tutorial>, ApiError> {
    let tutorial = tutorial_service.find_by_id(id).await?;

    Ok(Json(tutorial))
}

/// Update a Tutorial by Id
#[utoipa::path(
    put,
    path = "/api/tutorials/{id}",
    params(("id" = u64, Path, description = "Tutorial id")),
    request_body = TutorialPayload,
    responses(
        (status = 200, description = "Tutorial updated", body = Tutorial),
        (status = 404, description = "No tutorial stored under this id"),
        (status = 500, description = "Tutorial could not be stored")
    ),
    tag = "tutorials"
)]
#[tracing::instrument(name = "http::tutorial::update", skip(tutorial_service))]
pub async fn update(
    Extension(tutorial_service): Extension<Arc<TutorialService>>,
    Path(id): Path<u64>,
    Json(payload): Json<TutorialPayload>,
) -> Result<Json<Tutorial>, ApiError> {
    let existing = tutorial_service.find_by_id(id).await?;

    let tutorial = Tutorial {
        title: payload.title,
        description: payload.description,
        published: payload.published,
        ..existing
    };

    let updated = tutorial_service.save(tutorial).await?;

    Ok(Json(updated))
}

/// Delete a Tutorial by Id
#[utoipa::path(
    delete,
    path = "/api/tutorials/{id}",
    params(("id" = u64, Path, description = "Tutorial id")),
    responses(
        (status = 204, description = "Tutorial deleted, or never existed"),
        (status = 500, description = "Tutorial could not be deleted")
    ),
    tag = "tutorials"
)]
#[tracing::instrument(name = "http::tutorial::delete", skip(tutorial_service))]
pub async fn delete(
    Extension(tutorial_service): Extension<Arc<TutorialService>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    tutorial_service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let not_found = ApiError(Error::NotFound { id: 1 }).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let storage = ApiError(Error::storage("get", "tutorials/1.json", "access denied"))
            .into_response();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_payload_defaults_and_ignores_id() {
        let payload: TutorialPayload =
            serde_json::from_str(r#"{"id": 9, "title": "only a title"}"#).unwrap();

        assert_eq!(payload.title, "only a title");
        assert_eq!(payload.description, "");
        assert!(!payload.published);
    }
}
