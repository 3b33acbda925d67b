//! Reqwest-backed adapter for the mark backend port.
//!
//! Owns transport details only: URL construction, timeouts, HTTP error
//! mapping and JSON decoding into domain types. All synchronization policy
//! lives in the board.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};

use crate::domain::area::{AreaId, AreaTally};
use crate::domain::identity::User;
use crate::domain::ports::{BackendError, MarkBackend};
use dto::{AreaTallyDto, MarkRequestDto};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const AREAS_PATH: &str = "api/areas";
const USERS_PATH: &str = "api/users";
const MARK_PATH: &str = "api/mark";

/// HTTP adapter speaking the backend's REST surface.
#[derive(Debug)]
pub struct HttpMarkBackend {
    client: Client,
    base: Url,
}

impl HttpMarkBackend {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidEndpoint`] for a base URL that cannot
    /// carry paths, or [`BackendError::Transport`] when the client cannot be
    /// constructed.
    pub fn new(base: Url) -> Result<Self, BackendError> {
        Self::with_timeout(base, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HttpMarkBackend::new`].
    pub fn with_timeout(base: Url, timeout: Duration) -> Result<Self, BackendError> {
        if base.cannot_be_a_base() {
            return Err(BackendError::invalid_endpoint(format!(
                "{base} cannot carry API paths"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| BackendError::transport(error.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|error| BackendError::invalid_endpoint(format!("{path}: {error}")))
    }

    async fn check_status(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(map_status_error(status, body.as_ref()))
    }
}

#[async_trait]
impl MarkBackend for HttpMarkBackend {
    async fn submit_mark(&self, user: &User, area: &AreaId) -> Result<(), BackendError> {
        let body = MarkRequestDto {
            user: user.display_name().as_str().to_owned(),
            area_id: area.as_str().to_owned(),
        };
        let response = self
            .client
            .post(self.endpoint(MARK_PATH)?)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;
        // Completion is all that matters; the response body is ignored.
        Self::check_status(response).await?;
        Ok(())
    }

    async fn fetch_tallies(&self) -> Result<Vec<AreaTally>, BackendError> {
        let response = self
            .client
            .get(self.endpoint(AREAS_PATH)?)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = Self::check_status(response).await?;
        let tallies: Vec<AreaTallyDto> = response
            .json()
            .await
            .map_err(|error| BackendError::decode(error.to_string()))?;
        tallies.into_iter().map(AreaTallyDto::into_domain).collect()
    }

    async fn list_attendees(&self, area: &AreaId) -> Result<Vec<String>, BackendError> {
        let response = self
            .client
            .get(self.endpoint(USERS_PATH)?)
            .query(&[("area_id", area.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|error| BackendError::decode(error.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::timeout(error.to_string())
    } else {
        BackendError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> BackendError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned()
    } else {
        preview
    };
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => BackendError::timeout(message),
        _ => BackendError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
