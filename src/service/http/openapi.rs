use axum::Json;
use utoipa::OpenApi;

use tutorials_core::Tutorial;

use super::tutorial::{self, TutorialPayload};

#[derive(OpenApi)]
#[openapi(
    paths(
        tutorial::create,
        tutorial::get_by_id,
        tutorial::update,
        tutorial::delete,
    ),
    components(schemas(Tutorial, TutorialPayload)),
    tags((name = "tutorials", description = "Tutorial management APIs"))
)]
pub struct ApiDoc;

#[tracing::instrument(name = "http::openapi")]
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_summaries() {
        let document = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert_eq!(
            document["paths"]["/api/tutorials"]["post"]["summary"],
            "Create a new Tutorial"
        );
        assert_eq!(
            document["paths"]["/api/tutorials/{id}"]["get"]["summary"],
            "Retrieve a Tutorial by Id"
        );
        assert_eq!(
            document["paths"]["/api/tutorials/{id}"]["get"]["parameters"][0]["name"],
            "id"
        );
        assert!(document["paths"]["/api/tutorials/{id}"]["delete"]["responses"]["500"].is_object());
    }
}
