//! Runtime configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use shared::envs::{get_env, get_env_parse_or, Error as EnvError};

use crate::error::{Error, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "zoe-web/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`ZOE_BIND_ADDR`)
    pub bind_address: SocketAddr,
    /// Trunk output directory (`ZOE_DIST_DIR`)
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl ServerConfig {
    /// Read `ZOE_BIND_ADDR` and `ZOE_DIST_DIR`, defaulting whichever is unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let bind_address = get_env_parse_or("ZOE_BIND_ADDR", defaults.bind_address)?;
        let dist_dir = match get_env("ZOE_DIST_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(EnvError::MissingEnv(_)) => defaults.dist_dir,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            bind_address,
            dist_dir,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Fails when the bundle has no `index.html`.
    pub fn validate(&self) -> Result<()> {
        let index = self.index_file();
        if index.is_file() {
            Ok(())
        } else {
            Err(Error::MissingBundle(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.index_file(), PathBuf::from("zoe-web/dist/index.html"));
    }

    #[test]
    fn test_missing_bundle() {
        let config = ServerConfig {
            dist_dir: PathBuf::from("/nonexistent/zoe-dist"),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::MissingBundle(_))));
    }
}
