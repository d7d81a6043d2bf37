//! # Credential Validator
//!
//! The download page sits behind one fixed demo account. This is a placeholder
//! gate, not a security boundary: no hashing, no rate limiting, no lockout.

/// Demo account username.
pub const DEMO_USERNAME: &str = "admin";

/// Demo account password.
pub const DEMO_PASSWORD: &str = "123";

/// Exact-match check against the demo account.
///
/// ```rust
/// use shared::credentials::validate;
///
/// assert!(validate("admin", "123"));
/// assert!(!validate("Admin", "123"));
/// ```
pub fn validate(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_demo_pair() {
        assert!(validate("admin", "123"));
    }

    #[test]
    fn test_rejects_mismatches() {
        let cases = [
            ("admin", "1234"),
            ("admin", ""),
            ("", "123"),
            ("root", "123"),
            ("admin ", "123"),
            ("ADMIN", "123"),
            ("123", "admin"),
        ];
        for (username, password) in cases {
            assert!(!validate(username, password), "{username:?}/{password:?} passed");
        }
    }
}
