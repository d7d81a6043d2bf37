//! # Common Error Types
//!
//! Every error in the site is local, user-visible and recoverable by trying
//! again. Nothing is retried or escalated.
//!
//! - [`AuthError`]: sign-in form failures, shown in the login error banner
//! - [`FormError`]: contact form validation failures
//! - [`StorageError`]: local storage failures, logged and then ignored
//!
//! ```rust
//! use shared::error::AuthError;
//!
//! assert_eq!(
//!     AuthError::InvalidCredentials.to_string(),
//!     "Invalid username or password"
//! );
//! ```

use thiserror::Error;

/// Sign-in failure. The `Display` text is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username or password left blank.
    #[error("Please enter both username and password")]
    MissingCredentials,

    /// The pair did not match. No lockout or backoff follows.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Contact form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Persistence failure behind a [`crate::session::FlagStorage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend (private mode, no window, disabled by the browser).
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_messages() {
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Please enter both username and password"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_form_messages() {
        assert_eq!(FormError::MissingField("Email").to_string(), "Email is required");
        assert_eq!(
            StorageError::Write("quota".to_string()).to_string(),
            "storage write failed: quota"
        );
    }
}
