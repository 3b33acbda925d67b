//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the area tally, attendee and mark endpoints plus the health
//! probes, together with their request and response schemas.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::areas::AreaTallyResponse;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::marks::MarkRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Worldmark backend API",
        description = "HTTP interface for the shared visited-areas tally."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::areas::list_area_tallies,
        crate::inbound::http::users::list_attendees,
        crate::inbound::http::marks::submit_mark,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(AreaTallyResponse, MarkRequest, ErrorEnvelope, ErrorCode)),
    tags(
        (name = "areas", description = "Area tally queries"),
        (name = "users", description = "Attendee listings"),
        (name = "marks", description = "Mark submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
