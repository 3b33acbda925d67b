//! Area identity and tally types.

use std::fmt;

/// Failures raised while constructing an [`AreaId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AreaIdError {
    /// The identifier was empty once trimmed.
    #[error("area identifier must not be empty")]
    Empty,
}

/// Stable area identifier (ISO 3166-1 alpha-3 code).
///
/// ## Invariants
/// - Trimmed and non-empty; never changes after load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaId(String);

impl AreaId {
    /// Construct an identifier from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`AreaIdError::Empty`] when the input is blank once trimmed.
    pub fn new(raw: &str) -> Result<Self, AreaIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AreaIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AreaId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// One clickable area on the map.
///
/// The polygon itself is owned by the rendering layer; the domain keeps only
/// the identity and the label shown in the selection panel. Mark counts are
/// backend-owned and reach the view as fills, never as cached fields here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    id: AreaId,
    name: String,
}

impl Area {
    /// Build an area from its identity record.
    #[must_use]
    pub fn new(id: AreaId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &AreaId {
        &self.id
    }

    /// Human-readable label.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Backend-reported mark count for one area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaTally {
    /// Area the tally belongs to.
    pub id: AreaId,
    /// Number of distinct users with a mark on the area.
    pub count: u32,
}
