//! Area tally read endpoint.
//!
//! ```text
//! GET /api/areas
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::AreaTally;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// One `{id, count}` pair in the tally response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AreaTallyResponse {
    /// Stable area identifier.
    #[schema(example = "DEU")]
    pub id: String,
    /// Number of distinct users with a mark on the area.
    #[schema(example = 3)]
    pub count: u32,
}

impl From<AreaTally> for AreaTallyResponse {
    fn from(tally: AreaTally) -> Self {
        Self {
            id: tally.id,
            count: tally.count,
        }
    }
}

/// List the current mark count for every registered area.
///
/// Areas nobody has marked yet are included with a zero count.
#[utoipa::path(
    get,
    path = "/api/areas",
    responses(
        (status = 200, description = "Tally for every registered area", body = Vec<AreaTallyResponse>),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["areas"],
    operation_id = "listAreaTallies"
)]
#[get("/areas")]
pub async fn list_area_tallies(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let tallies = state.store.tallies().await?;
    let response: Vec<AreaTallyResponse> = tallies.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};

    use super::*;
    use crate::domain::ports::MockMarkStore;

    #[actix_web::test]
    async fn tallies_are_returned_as_id_count_pairs() {
        let mut store = MockMarkStore::new();
        store.expect_tallies().times(1).returning(|| {
            Ok(vec![
                AreaTally {
                    id: "DEU".into(),
                    count: 3,
                },
                AreaTally {
                    id: "FRA".into(),
                    count: 0,
                },
            ])
        });

        let state = web::Data::new(HttpState::new(Arc::new(store)));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(list_area_tallies)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/areas").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            serde_json::json!([
                { "id": "DEU", "count": 3 },
                { "id": "FRA", "count": 0 },
            ])
        );
    }
}
