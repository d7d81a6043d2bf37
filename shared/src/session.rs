//! # Session Flag Store
//!
//! One boolean per client: is the visitor signed in to the demo account.
//!
//! The flag is read from storage once when the store is created, flipped to
//! [`SessionState::Authenticated`] by a successful credential check, flipped back
//! by [`SessionStore::sign_out`], and written through to storage on every change
//! so it survives a reload.
//!
//! ## Persistence
//!
//! A single entry under [`SESSION_KEY`] holding the JSON boolean `true`. Sign-out
//! removes the entry. An absent or unparsable entry restores as anonymous.
//!
//! Storage failures never reach the visitor. They are logged and the in-memory
//! state is still updated, so the worst case is a sign-in that does not survive
//! a reload.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::credentials;
use crate::error::{AuthError, StorageError};

/// Local storage key holding the session flag.
pub const SESSION_KEY: &str = "drZoeAuth";

/// Key/value persistence used by [`SessionStore`].
pub trait FlagStorage {
    /// Read a value. Failures and missing keys both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory [`FlagStorage`]. Clones share the same map, which lets a test
/// "reload" by restoring a second store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    /// Storage whose writes and removals always fail.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl FlagStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write("read-only storage".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write("read-only storage".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The two states of the session state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

/// Exactly `true` or `false`. Padding and any other JSON value are rejected.
fn parse_flag(raw: &str) -> Option<bool> {
    if raw != raw.trim() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Session flag plus the storage it is persisted to.
#[derive(Debug, Clone)]
pub struct SessionStore<S: FlagStorage> {
    storage: S,
    state: SessionState,
}

impl<S: FlagStorage> SessionStore<S> {
    /// Create the store, reading the persisted flag.
    pub fn restore(storage: S) -> Self {
        let state = match storage.get(SESSION_KEY) {
            None => SessionState::Anonymous,
            Some(raw) => match parse_flag(&raw) {
                Some(true) => SessionState::Authenticated,
                Some(false) => SessionState::Anonymous,
                None => {
                    log::warn!("Ignoring malformed session flag {:?}", raw);
                    SessionState::Anonymous
                }
            },
        };
        log::debug!("Session restored as {:?}", state);
        Self { storage, state }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Check the pair; on success mark the session authenticated and persist it.
    ///
    /// A failed check leaves the session exactly as it was.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        if !credentials::validate(username, password) {
            log::debug!("Rejected sign-in attempt");
            return false;
        }
        self.state = SessionState::Authenticated;
        let value = serde_json::Value::Bool(true).to_string();
        if let Err(e) = self.storage.set(SESSION_KEY, &value) {
            log::warn!("Session flag not persisted: {}", e);
        }
        log::debug!("Session authenticated");
        true
    }

    /// Form-facing sign-in: trims the username and reports why it failed.
    pub fn sign_in(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if self.authenticate(username, password) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Clear the session and remove the persisted entry.
    pub fn sign_out(&mut self) {
        self.state = SessionState::Anonymous;
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            log::warn!("Session flag not removed: {}", e);
        }
        log::debug!("Session signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_defaults_to_anonymous() {
        let session = SessionStore::restore(MemoryStorage::default());
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_restore_reads_persisted_flag() {
        let session = SessionStore::restore(MemoryStorage::with_entry(SESSION_KEY, "true"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_restore_ignores_malformed_values() {
        for raw in ["", "yes", "1", "TRUE", "{\"a\":1}", "false", " true\n", "true ", "\ttrue"] {
            let session = SessionStore::restore(MemoryStorage::with_entry(SESSION_KEY, raw));
            assert!(!session.is_authenticated(), "{raw:?} restored as signed in");
        }
    }

    #[test]
    fn test_authenticate_persists_across_reload() {
        let storage = MemoryStorage::default();
        let mut session = SessionStore::restore(storage.clone());

        assert!(session.authenticate("admin", "123"));
        assert!(session.is_authenticated());
        assert_eq!(storage.raw(SESSION_KEY).as_deref(), Some("true"));

        let reloaded = SessionStore::restore(storage);
        assert!(reloaded.is_authenticated());
    }

    #[test]
    fn test_failed_authenticate_leaves_state_unchanged() {
        let storage = MemoryStorage::default();
        let mut anonymous = SessionStore::restore(storage.clone());
        assert!(!anonymous.authenticate("admin", "wrong"));
        assert!(!anonymous.is_authenticated());
        assert_eq!(storage.raw(SESSION_KEY), None);

        let mut signed_in = SessionStore::restore(MemoryStorage::with_entry(SESSION_KEY, "true"));
        assert!(!signed_in.authenticate("guest", "123"));
        assert!(signed_in.is_authenticated());
    }

    #[test]
    fn test_sign_out_survives_reload() {
        let storage = MemoryStorage::default();
        let mut session = SessionStore::restore(storage.clone());
        assert!(session.authenticate("admin", "123"));

        session.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(storage.raw(SESSION_KEY), None);

        let reloaded = SessionStore::restore(storage);
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_sign_in_errors() {
        let mut session = SessionStore::restore(MemoryStorage::default());

        assert_eq!(session.sign_in("", "123"), Err(AuthError::MissingCredentials));
        assert_eq!(session.sign_in("admin", "   "), Err(AuthError::MissingCredentials));
        assert_eq!(session.sign_in("admin", "nope"), Err(AuthError::InvalidCredentials));
        assert!(!session.is_authenticated());

        assert_eq!(session.sign_in("  admin ", "123"), Ok(()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_storage_failure_degrades_silently() {
        let storage = MemoryStorage::read_only();
        let mut session = SessionStore::restore(storage.clone());

        assert!(session.authenticate("admin", "123"));
        assert!(session.is_authenticated());
        assert!(!SessionStore::restore(storage).is_authenticated());

        session.sign_out();
        assert!(!session.is_authenticated());
    }
}
