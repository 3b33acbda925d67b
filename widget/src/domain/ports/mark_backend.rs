//! Outbound port for the mark-keeping backend collaborator.
//!
//! The backend is the sole source of truth for the set of marks and for the
//! per-area counts derived from them; the widget never computes counts
//! locally. Adapters own all transport detail and surface failures through
//! [`BackendError`] so the board can show a non-blocking notice instead of
//! silently desynchronizing.

use async_trait::async_trait;

use crate::domain::area::{AreaId, AreaTally};
use crate::domain::identity::User;

/// Failures raised by backend adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("backend unreachable: {message}")]
    Transport {
        /// Transport-level description of the failure.
        message: String,
    },
    /// The request timed out.
    #[error("backend timed out: {message}")]
    Timeout {
        /// Description of the timeout.
        message: String,
    },
    /// The backend answered with a non-success status.
    #[error("backend rejected the request (status {status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Compact body preview or status text.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("backend response undecodable: {message}")]
    Decode {
        /// Decoder description of the failure.
        message: String,
    },
    /// The adapter was configured with an unusable endpoint.
    #[error("invalid backend endpoint: {message}")]
    InvalidEndpoint {
        /// Description of the configuration problem.
        message: String,
    },
}

impl BackendError {
    /// Construct a [`BackendError::Transport`].
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct a [`BackendError::Timeout`].
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Construct a [`BackendError::Status`].
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Construct a [`BackendError::Decode`].
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Construct a [`BackendError::InvalidEndpoint`].
    #[must_use]
    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            message: message.into(),
        }
    }
}

/// Outbound port covering the three backend operations the widget needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarkBackend: Send + Sync {
    /// Record that `user` marked `area`. The response body is ignored; only
    /// completion matters.
    async fn submit_mark(&self, user: &User, area: &AreaId) -> Result<(), BackendError>;

    /// Fetch the current `{id, count}` tally for every known area.
    async fn fetch_tallies(&self) -> Result<Vec<AreaTally>, BackendError>;

    /// Fetch the display names of everyone with a mark on `area`, in
    /// backend order.
    async fn list_attendees(&self, area: &AreaId) -> Result<Vec<String>, BackendError>;
}
