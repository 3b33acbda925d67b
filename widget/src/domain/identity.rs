//! Session identity primitives.
//!
//! A visitor may claim exactly one display name per session. The transition
//! is one-way: once `Anonymous -> Identified` has happened there is no way
//! back and further claims are rejected at the boundary.

use std::fmt;

/// Failures raised while claiming a display name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The submitted name was empty once trimmed.
    #[error("display name must not be empty")]
    EmptyName,
    /// A display name was already claimed in this session.
    #[error("a display name was already claimed for this session")]
    AlreadyClaimed,
}

/// Validated display name.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Construct a display name from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmptyName`] when the input is blank once
    /// trimmed.
    pub fn new(raw: &str) -> Result<Self, IdentityError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The session user: a single display name, immutable after the claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    display_name: DisplayName,
}

impl User {
    /// Wrap a validated display name.
    #[must_use]
    pub fn new(display_name: DisplayName) -> Self {
        Self { display_name }
    }

    /// The claimed display name.
    #[must_use]
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}

/// One-shot identity state for the current session.
///
/// Starts out anonymous; [`SessionIdentity::claim`] moves it to the
/// identified state exactly once.
#[derive(Debug, Default)]
pub struct SessionIdentity {
    user: Option<User>,
}

impl SessionIdentity {
    /// Create an anonymous session identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a display name for this session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmptyName`] for blank input and
    /// [`IdentityError::AlreadyClaimed`] when an earlier claim succeeded.
    /// Failed claims leave the identity unchanged.
    pub fn claim(&mut self, raw: &str) -> Result<User, IdentityError> {
        if self.user.is_some() {
            return Err(IdentityError::AlreadyClaimed);
        }
        let user = User::new(DisplayName::new(raw)?);
        self.user = Some(user.clone());
        Ok(user)
    }

    /// The identified user, if a claim has succeeded.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a display name has been claimed.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.user.is_some()
    }
}
