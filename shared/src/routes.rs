//! # Route Table
//!
//! The marketing page is always reachable. The download page is gated on the
//! session flag and bounces anonymous visitors to the sign-in page.

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Download,
}

impl AppRoute {
    pub const ALL: [AppRoute; 3] = [AppRoute::Home, AppRoute::Login, AppRoute::Download];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/login",
            AppRoute::Download => "/download",
        }
    }

    /// Match a location path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub const fn requires_session(self) -> bool {
        matches!(self, AppRoute::Download)
    }
}

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(AppRoute),
}

/// Decide whether `route` may render for a visitor in `state`.
///
/// ```rust
/// use shared::routes::{guard, Access, AppRoute};
/// use shared::session::SessionState;
///
/// assert_eq!(
///     guard(AppRoute::Download, SessionState::Anonymous),
///     Access::Redirect(AppRoute::Login)
/// );
/// ```
pub fn guard(route: AppRoute, state: SessionState) -> Access {
    if route.requires_session() && !state.is_authenticated() {
        Access::Redirect(AppRoute::Login)
    } else {
        Access::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/download/"), Some(AppRoute::Download));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/admin"), None);
    }

    #[test]
    fn test_download_requires_session() {
        assert_eq!(
            guard(AppRoute::Download, SessionState::Anonymous),
            Access::Redirect(AppRoute::Login)
        );
        assert_eq!(guard(AppRoute::Download, SessionState::Authenticated), Access::Render);
    }

    #[test]
    fn test_public_routes_always_render() {
        for state in [SessionState::Anonymous, SessionState::Authenticated] {
            assert_eq!(guard(AppRoute::Home, state), Access::Render);
            assert_eq!(guard(AppRoute::Login, state), Access::Render);
        }
    }
}
