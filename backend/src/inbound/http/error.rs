//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into consistent JSON envelopes and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::MarkStoreError;
use crate::domain::{Error, ErrorCode, MarkValidationError};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Stable machine-readable failure category.
    pub code: ErrorCode,
    /// Human-readable description of the failure.
    pub message: String,
    /// Structured details, present for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<serde_json::Value>)]
    pub details: Option<serde_json::Value>,
    /// Trace identifier correlating the response with server logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Wrapper implementing [`ResponseError`] for the domain [`Error`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError(Error);

impl ApiError {
    /// The wrapped domain error.
    #[must_use]
    pub fn inner(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<MarkStoreError> for ApiError {
    fn from(error: MarkStoreError) -> Self {
        Self(Error::from(error))
    }
}

impl From<MarkValidationError> for ApiError {
    fn from(error: MarkValidationError) -> Self {
        let field = match error {
            MarkValidationError::EmptyUser => "user",
            MarkValidationError::EmptyAreaId => "area_id",
        };
        Self(
            Error::invalid_request(error.to_string())
                .with_details(serde_json::json!({ "field": field })),
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn envelope_for(error: &Error) -> ErrorEnvelope {
    // Internal messages stay in the logs.
    let message = if matches!(error.code(), ErrorCode::InternalError) {
        "Internal server error".to_owned()
    } else {
        error.message().to_owned()
    };
    ErrorEnvelope {
        code: error.code(),
        message,
        details: error.details().cloned(),
        trace_id: TraceId::current().map(|id| id.to_string()),
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(envelope_for(&self.0))
    }
}
