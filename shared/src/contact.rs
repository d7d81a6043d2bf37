//! # Contact Form
//!
//! Submission is acknowledgement only: nothing leaves the browser. A valid
//! submit shows "Sent!" for [`CONTACT_RESET_DELAY_MS`] and then the form is
//! ready again.

use crate::error::FormError;

pub const CONTACT_RESET_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Every field is required; the email gets a basic shape check.
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }
        validate_email(&self.email)
    }
}

/// Same shape the browser's `type="email"` input enforces: a non-empty local
/// part and a non-empty domain around an `@`. Dotless domains are allowed.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

/// Acknowledgement state of the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitState {
    submitted: bool,
}

impl SubmitState {
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validate and acknowledge. Returns the delay after which [`Self::reset`]
    /// should run.
    pub fn submit(&mut self, message: &ContactMessage) -> Result<u32, FormError> {
        message.validate()?;
        self.submitted = true;
        Ok(CONTACT_RESET_DELAY_MS)
    }

    pub fn reset(&mut self) {
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Kiosk".to_string(),
            message: "Where is the nearest kiosk?".to_string(),
        }
    }

    #[test]
    fn test_submit_then_reset() {
        let mut state = SubmitState::default();
        assert_eq!(state.submit(&filled()), Ok(3000));
        assert!(state.is_submitted());

        state.reset();
        assert!(!state.is_submitted());
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let mut state = SubmitState::default();
        let message = ContactMessage {
            subject: "  ".to_string(),
            ..filled()
        };
        assert_eq!(state.submit(&message), Err(FormError::MissingField("Subject")));
        assert!(!state.is_submitted());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("hello@drzoe.ai").is_ok());
        assert_eq!(validate_email("hello"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("@drzoe.ai"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("hello@"), Err(FormError::InvalidEmail));
        assert!(validate_email("hello@localhost").is_ok());
    }

    #[test]
    fn test_dotless_domain_is_acknowledged() {
        let mut state = SubmitState::default();
        let message = ContactMessage {
            name: "Jo".to_string(),
            email: "jo@localhost".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert_eq!(state.submit(&message), Ok(CONTACT_RESET_DELAY_MS));
        assert!(state.is_submitted());
    }
}
