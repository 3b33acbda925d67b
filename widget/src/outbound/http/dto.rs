//! Wire DTOs for the backend REST surface.

use serde::{Deserialize, Serialize};

use crate::domain::area::{AreaId, AreaTally};
use crate::domain::ports::BackendError;

/// One `{id, count}` pair from `GET /api/areas`.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaTallyDto {
    /// Area identifier.
    pub id: String,
    /// Distinct-user mark count.
    pub count: u32,
}

impl AreaTallyDto {
    /// Convert into the domain tally, rejecting blank identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Decode`] when the backend sends an
    /// identifier that fails validation.
    pub fn into_domain(self) -> Result<AreaTally, BackendError> {
        let id = AreaId::new(&self.id)
            .map_err(|error| BackendError::decode(format!("invalid area id in tally: {error}")))?;
        Ok(AreaTally {
            id,
            count: self.count,
        })
    }
}

/// Body for `POST /api/mark`.
#[derive(Debug, Clone, Serialize)]
pub struct MarkRequestDto {
    /// Claimed display name.
    pub user: String,
    /// Selected area identifier.
    pub area_id: String,
}
