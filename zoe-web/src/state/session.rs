//! Session context
//!
//! The one session flag of the client, provided once at the root and read by
//! the navbar, the login page and the download page.

use leptos::prelude::*;
use shared::session::{FlagStorage, SessionState, SessionStore};
use shared::{AuthError, StorageError};

/// [`FlagStorage`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl FlagStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionStore::restore(BrowserStorage)),
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.with(|session| session.state())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_authenticated())
    }

    pub fn sign_in(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.session
            .try_update(|session| session.sign_in(username, password))
            .unwrap_or(Err(AuthError::InvalidCredentials))
    }

    pub fn sign_out(&self) {
        self.session.update(|session| session.sign_out());
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
