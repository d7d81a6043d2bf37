//! # Dr. Zoe Site Server
//!
//! Serves the built frontend bundle. Every path that is not a file in the
//! bundle gets `index.html`, so client routes like `/login` and `/download`
//! survive a reload.

pub mod config;
pub mod error;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::{create_router, start_server};
