use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] shared::envs::Error),

    #[error("frontend bundle not found at {0} (build zoe-web with trunk first)")]
    MissingBundle(PathBuf),
}
