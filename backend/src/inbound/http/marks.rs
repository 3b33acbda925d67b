//! Mark submission endpoint.
//!
//! ```text
//! POST /api/mark
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::MarkSubmission;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Request body for a mark submission.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkRequest {
    /// Display name of the marking user.
    #[schema(example = "Alice")]
    pub user: String,
    /// Identifier of the marked area.
    #[schema(example = "DEU")]
    pub area_id: String,
}

/// Record one user's mark on one area.
///
/// Repeating a submission is a no-op, so retries are safe. The response body
/// is empty; clients re-fetch the tallies to observe the new count.
#[utoipa::path(
    post,
    path = "/api/mark",
    request_body = MarkRequest,
    responses(
        (status = 200, description = "Mark recorded (or already present)"),
        (status = 400, description = "Blank user or area identifier", body = ErrorEnvelope),
        (status = 404, description = "Unknown area", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["marks"],
    operation_id = "submitMark"
)]
#[post("/mark")]
pub async fn submit_mark(
    state: web::Data<HttpState>,
    body: web::Json<MarkRequest>,
) -> ApiResult<HttpResponse> {
    let submission = MarkSubmission::try_from_parts(&body.user, &body.area_id)?;
    state
        .store
        .add_mark(submission.user(), submission.area_id())
        .await?;
    info!(
        user = submission.user(),
        area_id = submission.area_id(),
        "mark recorded"
    );
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};

    use super::*;
    use crate::domain::ports::{MarkStoreError, MockMarkStore};

    async fn post(store: MockMarkStore, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = web::Data::new(HttpState::new(Arc::new(store)));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(submit_mark)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/mark")
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let bytes = test::read_body(res).await;
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    #[actix_web::test]
    async fn valid_submission_is_stored_and_returns_an_empty_body() {
        let mut store = MockMarkStore::new();
        store
            .expect_add_mark()
            .times(1)
            .withf(|user, area_id| user == "Alice" && area_id == "DEU")
            .returning(|_, _| Ok(()));

        let (status, body) = post(store, serde_json::json!({ "user": "Alice", "area_id": "DEU" }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn submitted_fields_are_trimmed_before_storage() {
        let mut store = MockMarkStore::new();
        store
            .expect_add_mark()
            .times(1)
            .withf(|user, area_id| user == "Alice" && area_id == "DEU")
            .returning(|_, _| Ok(()));

        let (status, _) = post(
            store,
            serde_json::json!({ "user": " Alice ", "area_id": " DEU " }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn blank_user_is_rejected_without_touching_the_store() {
        // The mock panics on any call, so reaching the store fails the test.
        let store = MockMarkStore::new();
        let (status, body) = post(store, serde_json::json!({ "user": "  ", "area_id": "DEU" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "user");
    }

    #[actix_web::test]
    async fn unknown_area_maps_to_not_found() {
        let mut store = MockMarkStore::new();
        store
            .expect_add_mark()
            .times(1)
            .returning(|_, area_id| Err(MarkStoreError::unknown_area(area_id)));

        let (status, body) = post(store, serde_json::json!({ "user": "Alice", "area_id": "ZZZ" }))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }
}
