//! Signed-in user session and the login form
//!
//! Views only see whether a session exists; booking and checkout actions
//! are hidden behind a login prompt otherwise.

use crate::i18n::Key;

/// Minimum password length accepted by the hosted auth service
pub const MIN_PASSWORD_LEN: usize = 6;

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}

/// Whether the login form signs in or creates an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

/// Login popup state
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub is_open: bool,
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub pending: bool,
    pub error: Option<String>,
}

impl AuthForm {
    /// Local checks before contacting the auth service
    pub fn validate(&self) -> Result<(), Key> {
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(Key::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Key::PasswordTooShort);
        }
        Ok(())
    }

    /// Close the popup and forget the typed credentials
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> AuthForm {
        AuthForm {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_plausible_credentials() {
        assert_eq!(form(" ana@example.com ", "secret1").validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "ana", "@example.com", "ana@localhost"] {
            assert_eq!(form(email, "secret1").validate(), Err(Key::InvalidEmail));
        }
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            form("ana@example.com", "12345").validate(),
            Err(Key::PasswordTooShort)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut f = form("ana@example.com", "secret1");
        f.is_open = true;
        f.mode = AuthMode::SignUp;
        f.reset();
        assert!(!f.is_open);
        assert_eq!(f.mode, AuthMode::SignIn);
        assert!(f.email.is_empty() && f.password.is_empty());
    }

    #[test]
    fn mode_toggles() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
    }
}
