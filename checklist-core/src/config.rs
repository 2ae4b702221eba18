//! Helpers for turning raw environment lookups into typed configuration.
//!
//! The functions here operate on the `Result<String, VarError>` returned by a
//! lookup rather than reading the process environment themselves, so callers
//! can build their configuration structs from `std::env::var` in production
//! and from a plain map in tests.

use std::env::VarError;
use std::str::FromStr;

use url::Url;

use crate::errors::ConfigError;

/// Raw result of looking up a single environment variable.
pub type RawVar = Result<String, VarError>;

/// Returns the trimmed value of an optional variable. Blank values count as absent.
pub fn optional_var(key: &'static str, raw: RawVar) -> Result<Option<String>, ConfigError> {
    match raw {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::InvalidEnvVar { key, source: err }),
    }
}

/// Parses a variable into `T`, falling back to `default` when it is absent or blank.
pub fn parse_var<T>(key: &'static str, raw: RawVar, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(key, raw)? {
        Some(value) => T::from_str(&value)
            .map_err(|err| ConfigError::Internal(format!("invalid value for {key}: {err}"))),
        None => Ok(default),
    }
}

/// Validates that `value` is an absolute http(s) URL.
pub fn sanitize_http_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(value)
        .map_err(|err| ConfigError::Internal(format!("invalid URL for {key}: {err}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::Internal(format!(
            "URL for {key} must use http or https"
        )));
    }

    Ok(parsed)
}
