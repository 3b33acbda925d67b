//! Attendee listing endpoint.
//!
//! ```text
//! GET /api/users
//! GET /api/users?area_id=DEU
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Query string accepted by the attendee listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendeeQuery {
    /// Restrict the listing to users who marked this area.
    #[param(example = "DEU")]
    pub area_id: Option<String>,
}

impl AttendeeQuery {
    /// The area filter, with blank values treated as absent.
    fn filter(&self) -> Option<&str> {
        self.area_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// List user display names.
///
/// With `area_id` the response holds the users who marked that area, in
/// first-mark order; an area nobody marked (or nobody registered) yields an
/// empty list. Without a filter every known user is listed.
#[utoipa::path(
    get,
    path = "/api/users",
    params(AttendeeQuery),
    responses(
        (status = 200, description = "User display names", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "listAttendees"
)]
#[get("/users")]
pub async fn list_attendees(
    state: web::Data<HttpState>,
    query: web::Query<AttendeeQuery>,
) -> ApiResult<HttpResponse> {
    let attendees = state.store.attendees(query.filter()).await?;
    Ok(HttpResponse::Ok().json(attendees))
}
