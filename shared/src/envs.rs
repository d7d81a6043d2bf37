//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get and parse an environment variable, falling back to `default` when unset.
/// A value that is set but unparsable is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("environment variable {0} has the wrong format")]
    WrongFormat(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("ZOE_SHARED_TEST_UNSET"),
            Err(Error::MissingEnv("ZOE_SHARED_TEST_UNSET"))
        );
        assert_eq!(get_env_parse_or("ZOE_SHARED_TEST_UNSET", 7u16), Ok(7));
    }

    #[test]
    fn test_wrong_format() {
        env::set_var("ZOE_SHARED_TEST_PORT", "eighty");
        assert_eq!(
            get_env_parse::<u16>("ZOE_SHARED_TEST_PORT"),
            Err(Error::WrongFormat("ZOE_SHARED_TEST_PORT"))
        );
        assert_eq!(
            get_env_parse_or("ZOE_SHARED_TEST_PORT", 80u16),
            Err(Error::WrongFormat("ZOE_SHARED_TEST_PORT"))
        );
    }
}
