//! Validated mark submission payload.
//!
//! Keeps inbound payload parsing outside the domain: the handler hands raw
//! strings to [`MarkSubmission::try_from_parts`] before talking to the
//! store.

use std::fmt;

/// Domain error returned when a mark payload is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkValidationError {
    /// The user name was missing or blank once trimmed.
    EmptyUser,
    /// The area identifier was missing or blank once trimmed.
    EmptyAreaId,
}

impl fmt::Display for MarkValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUser => write!(f, "user must not be empty"),
            Self::EmptyAreaId => write!(f, "area_id must not be empty"),
        }
    }
}

impl std::error::Error for MarkValidationError {}

/// One "this user visited this area" claim, validated and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSubmission {
    user: String,
    area_id: String,
}

impl MarkSubmission {
    /// Construct a submission from raw request fields.
    ///
    /// # Errors
    ///
    /// Returns [`MarkValidationError`] when either field is blank once
    /// trimmed.
    pub fn try_from_parts(user: &str, area_id: &str) -> Result<Self, MarkValidationError> {
        let user = user.trim();
        if user.is_empty() {
            return Err(MarkValidationError::EmptyUser);
        }
        let area_id = area_id.trim();
        if area_id.is_empty() {
            return Err(MarkValidationError::EmptyAreaId);
        }
        Ok(Self {
            user: user.to_owned(),
            area_id: area_id.to_owned(),
        })
    }

    /// Display name of the marking user.
    #[must_use]
    pub fn user(&self) -> &str {
        self.user.as_str()
    }

    /// Identifier of the marked area.
    #[must_use]
    pub fn area_id(&self) -> &str {
        self.area_id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "FRA", MarkValidationError::EmptyUser)]
    #[case("   ", "FRA", MarkValidationError::EmptyUser)]
    #[case("Alice", "", MarkValidationError::EmptyAreaId)]
    #[case("Alice", "  ", MarkValidationError::EmptyAreaId)]
    fn blank_fields_are_rejected(
        #[case] user: &str,
        #[case] area_id: &str,
        #[case] expected: MarkValidationError,
    ) {
        let error =
            MarkSubmission::try_from_parts(user, area_id).expect_err("invalid parts must fail");
        assert_eq!(error, expected);
    }

    #[test]
    fn fields_are_trimmed() {
        let mark = MarkSubmission::try_from_parts("  Alice ", " DEU ").expect("valid parts");
        assert_eq!(mark.user(), "Alice");
        assert_eq!(mark.area_id(), "DEU");
    }
}
