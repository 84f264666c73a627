//
//  profilescout
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! ProfileScout authenticates every request with a single bearer API key.
//! A client resolves its key exactly once, at construction: an explicitly
//! supplied key wins, otherwise the [`CredentialSource`] is asked for
//! [`API_KEY_ENV`]. The request paths never look anything up again.
//!
//! ## Example
//!
//! ```rust
//! use profilescout::auth::{Credential, API_KEY_ENV};
//!
//! // Explicit key
//! let credential = Credential::resolve(Some("sk-live-123"), &|_: &str| None::<String>).unwrap();
//! assert_eq!(credential.expose(), "sk-live-123");
//!
//! // Fallback source, e.g. a fixed lookup in tests
//! let source = |key: &str| (key == API_KEY_ENV).then(|| "sk-from-env".to_string());
//! let credential = Credential::resolve(None, &source).unwrap();
//! assert_eq!(credential.expose(), "sk-from-env");
//! ```

use std::fmt;

use reqwest::header::HeaderValue;

use crate::api::ApiError;

/// Environment variable consulted when no key is passed explicitly.
pub const API_KEY_ENV: &str = "PROFILESCOUT_API_KEY";

/// Where a client looks for its API key when none is given explicitly.
pub trait CredentialSource {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl CredentialSource for EnvSource {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> CredentialSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// A bearer API key.
///
/// The key never appears in `Debug` output, so clients and requests
/// holding one can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a key, rejecting empty or whitespace-only values.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(missing_key());
        }
        Ok(Self(token))
    }

    /// Picks `explicit` if given, else asks `source` for [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns an Auth error when neither yields a non-empty key.
    pub fn resolve(explicit: Option<&str>, source: &dyn CredentialSource) -> Result<Self, ApiError> {
        match explicit {
            Some(token) => Self::new(token),
            None => source
                .lookup(API_KEY_ENV)
                .ok_or_else(missing_key)
                .and_then(Self::new),
        }
    }

    /// Returns the raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Builds the `Authorization` header value.
    pub fn header_value(&self) -> Result<HeaderValue, ApiError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|_| ApiError::generic(0, "API key contains characters not allowed in a header"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

fn missing_key() -> ApiError {
    ApiError::Auth {
        message: format!(
            "no API key configured: pass one explicitly or set {}",
            API_KEY_ENV
        ),
    }
}
