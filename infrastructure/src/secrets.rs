//! API credential resolution
//!
//! The key comes from the process environment at startup. Resolution happens
//! before any interactive surface is constructed, and a missing key halts
//! the program with a configuration error.

use std::env;
use std::fmt;
use thiserror::Error;

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Errors that can occur while resolving the API credential
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Google API key not found: set GEMINI_API_KEY or GOOGLE_API_KEY")]
    Missing,
}

/// The API credential.
///
/// `Debug` and `Display` are redacted so the key cannot leak through logs
/// or error messages; [`expose`](Self::expose) is the only way at the value.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

/// Resolve the API key from the process environment.
pub fn api_key_from_env() -> Result<ApiKey, SecretError> {
    resolve(|var| env::var(var).ok())
}

fn resolve<F>(lookup: F) -> Result<ApiKey, SecretError>
where
    F: Fn(&str) -> Option<String>,
{
    for var in API_KEY_ENV_VARS {
        if let Some(value) = lookup(var) {
            if !value.trim().is_empty() {
                return Ok(ApiKey::new(value));
            }
        }
    }
    Err(SecretError::Missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_first_variable() {
        let key = resolve(|var| match var {
            "GEMINI_API_KEY" => Some("gem-key".to_string()),
            "GOOGLE_API_KEY" => Some("goog-key".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(key.expose(), "gem-key");
    }

    #[test]
    fn resolve_falls_back_to_second_variable() {
        let key = resolve(|var| match var {
            "GOOGLE_API_KEY" => Some("goog-key".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(key.expose(), "goog-key");
    }

    #[test]
    fn resolve_rejects_empty_values() {
        let result = resolve(|var| match var {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(SecretError::Missing)));
    }

    #[test]
    fn resolve_missing_is_error() {
        let result = resolve(|_| None);
        assert!(matches!(result, Err(SecretError::Missing)));
    }

    #[test]
    fn debug_and_display_are_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(****)");
        assert_eq!(format!("{key}"), "****");
        assert!(!format!("{key:?}").contains("super-secret"));
    }
}
