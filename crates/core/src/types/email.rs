//! Email address type and display-name derivation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
}

/// An email address as typed into the sign-in form.
///
/// Sign-in is a stub with no credential check, so the only rule is that the
/// address is not empty. Shape checks are left to the browser's `type="email"`
/// input.
///
/// ## Examples
///
/// ```
/// use fungi_fresh_core::Email;
///
/// assert!(Email::parse("alice@example.com").is_ok());
/// assert!(Email::parse("no-at-symbol").is_ok());
/// assert!(Email::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the local part of the email (before the first @).
    ///
    /// An address without an @ is all local part.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }

    /// Returns the name shown for this address in the navigation bar.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(self.as_str())
    }
}

/// Derive a display name from an email address.
///
/// Takes the local part and upper-cases its first character; the rest is kept
/// as typed.
///
/// ```
/// use fungi_fresh_core::display_name;
///
/// assert_eq!(display_name("alice@example.com"), "Alice");
/// assert_eq!(display_name("bob.smith@farm.in"), "Bob.smith");
/// ```
#[must_use]
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    let mut chars = local.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
