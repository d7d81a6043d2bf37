//! # Dr. Zoe Shared Library
//!
//! Everything in the landing site that is not markup lives here, so it can be
//! unit-tested on the host without a browser.
//!
//! ## Structure
//!
//! - **[`session`]**: session flag store over a pluggable [`session::FlagStorage`]
//! - **[`credentials`]**: the fixed demo credential check
//! - **[`routes`]**: route table and the gate for the download page
//! - **[`carousel`]**: gallery lightbox index stepping
//! - **[`counter`]**: animated statistic counters
//! - **[`accordion`]**: single collapsible FAQ accordion
//! - **[`contact`]**: contact form validation
//! - **[`visibility`]**: one-shot entrance animation flag
//! - **[`content`]**: static marketing copy for every section
//! - **[`utils`]**: number formatting
//! - **[`envs`]**: environment variable helpers for the static server
//!
//! ## Usage
//!
//! ```rust
//! use shared::session::{MemoryStorage, SessionStore};
//!
//! let mut session = SessionStore::restore(MemoryStorage::default());
//! assert!(!session.is_authenticated());
//! assert!(session.authenticate("admin", "123"));
//! assert!(session.is_authenticated());
//! ```

pub mod accordion;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod counter;
pub mod credentials;
pub mod envs;
pub mod error;
pub mod routes;
pub mod session;
pub mod utils;
pub mod visibility;

pub use error::{AuthError, FormError, StorageError};
pub use routes::{guard, Access, AppRoute};
pub use session::{FlagStorage, SessionState, SessionStore};
