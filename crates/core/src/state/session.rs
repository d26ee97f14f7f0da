//! Signed-in shopper identity.
//!
//! Sign-in is a stub: any non-empty email is accepted and no password is
//! checked. The session lives only as long as the shopper's store.

use serde::Serialize;

use crate::types::Email;

/// Phone number shown on every profile until real accounts exist.
pub const PLACEHOLDER_PHONE: &str = "+91 98765 43210";

/// Delivery address shown on every profile until real accounts exist.
pub const PLACEHOLDER_ADDRESS: &str = "42, Green Avenue, Mumbai, MH";

/// The signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub email: Email,
    /// Local part of the email with its first letter upper-cased.
    pub display_name: String,
    pub phone: String,
    pub address: String,
}

impl User {
    /// Build a profile for `email` with the placeholder phone and address.
    #[must_use]
    pub fn from_email(email: Email) -> Self {
        Self {
            display_name: email.display_name(),
            email,
            phone: PLACEHOLDER_PHONE.to_string(),
            address: PLACEHOLDER_ADDRESS.to_string(),
        }
    }
}

/// Holds the current user (if any) and the sign-in form's email draft.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionController {
    user: Option<User>,
    email_input: String,
}

impl SessionController {
    /// The signed-in user, or `None` for a guest.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Current contents of the sign-in form's email field.
    #[must_use]
    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    pub fn set_email_input(&mut self, input: impl Into<String>) {
        self.email_input = input.into();
    }

    /// Sign in as `email`, replacing any current user.
    ///
    /// Returns `None` and changes nothing when `email` is empty. On success
    /// the email draft is cleared.
    pub fn login(&mut self, email: &str) -> Option<&User> {
        let email = Email::parse(email).ok()?;
        self.email_input.clear();
        let user = self.user.insert(User::from_email(email));
        Some(&*user)
    }

    /// Sign out, returning the user that was signed in.
    pub const fn logout(&mut self) -> Option<User> {
        self.user.take()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_profile() {
        let mut session = SessionController::default();
        let user = session.login("alice@example.com").unwrap();

        assert_eq!(user.display_name, "Alice");
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_eq!(user.phone, PLACEHOLDER_PHONE);
        assert_eq!(user.address, PLACEHOLDER_ADDRESS);
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_login_clears_email_draft() {
        let mut session = SessionController::default();
        session.set_email_input("bob@example.com");
        session.login("bob@example.com").unwrap();
        assert_eq!(session.email_input(), "");
    }

    #[test]
    fn test_empty_login_changes_nothing() {
        let mut session = SessionController::default();
        session.set_email_input("");
        assert!(session.login("").is_none());
        assert!(!session.is_signed_in());

        session.login("carol@example.com").unwrap();
        let before = session.clone();
        assert!(session.login("").is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn test_login_overwrites_previous_user() {
        let mut session = SessionController::default();
        session.login("first@example.com").unwrap();
        session.login("second@example.com").unwrap();
        assert_eq!(session.user().unwrap().display_name, "Second");
    }

    #[test]
    fn test_logout_returns_previous_user() {
        let mut session = SessionController::default();
        assert!(session.logout().is_none());

        session.login("dave@example.com").unwrap();
        let user = session.logout().unwrap();
        assert_eq!(user.display_name, "Dave");
        assert!(session.user().is_none());
    }
}
