//
//  profilescout
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types: Errors, Backoff and Pagination
//!
//! This module provides the pieces shared by every endpoint:
//!
//! - [`ApiError`] - The closed set of error kinds any call can fail with
//! - [`classify`] - Maps an HTTP status and server detail to an [`ApiError`]
//! - [`extract_detail`] - Pulls a human-readable message out of an error body
//! - [`backoff_delay`] - Jittered exponential retry delay
//! - [`Paginator`] - Lazy item sequence over paged endpoints
//!
//! # Example
//!
//! ```rust
//! use profilescout::api::common::{ApiError, ErrorKind};
//!
//! fn handle<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Auth { .. }) => println!("Check your API key"),
//!         Err(ApiError::RateLimit { retry_after, .. }) => {
//!             println!("Slow down, retry in {}s", retry_after)
//!         }
//!         Err(e) if e.kind() == ErrorKind::NotFound => println!("Nothing there"),
//!         Err(e) => println!("Error ({}): {}", e.status(), e),
//!     }
//! }
//! ```

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

mod backoff;
mod pagination;

pub use backoff::*;
pub use pagination::*;

/// Retry delay assumed when a 429 response carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Discriminant for [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Anything not covered below, including network and decoding failures.
    Generic,
    /// Bad or expired credential (401).
    Auth,
    /// Server-signaled throttling (429).
    RateLimit,
    /// Missing resource (404).
    NotFound,
    /// Malformed request parameters (422).
    Validation,
}

/// Error type for all ProfileScout API operations.
///
/// Every variant carries a human-readable message and an HTTP status,
/// available through [`ApiError::status`]. Status `0` means no HTTP
/// response was obtained (connection failure, malformed URL, or a body that
/// could not be decoded into the expected type).
///
/// # Variants
///
/// | Variant | HTTP Status | Retried by the engine |
/// |---------|-------------|-----------------------|
/// | `Auth` | 401 | never |
/// | `NotFound` | 404 | never |
/// | `Validation` | 422 | never |
/// | `RateLimit` | 429 | yes, after `retry_after` seconds |
/// | `Generic` | anything else | 5xx and network failures only |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Unexpected status, exhausted 5xx retries, network or parse failure.
    #[error("{message}")]
    Generic {
        /// The status observed, or 0 when there was no response.
        status: u16,
        /// Human-readable description.
        message: String,
    },

    /// The API key was rejected.
    #[error("{message}")]
    Auth {
        /// Human-readable description.
        message: String,
    },

    /// The server is throttling this client.
    #[error("{message}")]
    RateLimit {
        /// Human-readable description.
        message: String,
        /// Seconds the server asked us to wait before retrying.
        retry_after: u64,
    },

    /// The requested resource does not exist.
    #[error("{message}")]
    NotFound {
        /// Human-readable description.
        message: String,
    },

    /// The server rejected the request parameters.
    #[error("{message}")]
    Validation {
        /// Human-readable description.
        message: String,
    },
}

impl ApiError {
    /// Creates a Generic error with a message used verbatim.
    pub fn generic(status: u16, message: impl Into<String>) -> Self {
        Self::Generic {
            status,
            message: message.into(),
        }
    }

    /// Creates the Generic, status 0 error for a failed network exchange.
    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::generic(0, format!("network error: {}", cause))
    }

    /// Returns the HTTP status associated with this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::Generic { status, .. } => *status,
            Self::Auth { .. } => 401,
            Self::RateLimit { .. } => 429,
            Self::NotFound { .. } => 404,
            Self::Validation { .. } => 422,
        }
    }

    /// Returns the discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generic { .. } => ErrorKind::Generic,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::Generic { message, .. }
            | Self::Auth { message }
            | Self::RateLimit { message, .. }
            | Self::NotFound { message }
            | Self::Validation { message } => message,
        }
    }

    /// Returns the server's retry hint for rate-limit errors.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Builds the error for a failed response.
///
/// `retry_after` is only consulted for 429 and falls back to
/// [`DEFAULT_RETRY_AFTER_SECS`]. An empty `detail` is replaced by a
/// per-kind default.
///
/// # Example
///
/// ```rust
/// use profilescout::api::common::{classify, ErrorKind};
///
/// let err = classify(429, "slow down", Some(60));
/// assert_eq!(err.kind(), ErrorKind::RateLimit);
/// assert_eq!(err.retry_after(), Some(60));
/// assert_eq!(err.to_string(), "request failed with status 429: slow down");
/// ```
pub fn classify(status: u16, detail: &str, retry_after: Option<u64>) -> ApiError {
    let detail = detail.trim();
    let message = |fallback: &str| {
        let detail = if detail.is_empty() { fallback } else { detail };
        format!("request failed with status {}: {}", status, detail)
    };

    match status {
        401 => ApiError::Auth {
            message: message("invalid or missing API key"),
        },
        404 => ApiError::NotFound {
            message: message("resource not found"),
        },
        422 => ApiError::Validation {
            message: message("invalid request parameters"),
        },
        429 => ApiError::RateLimit {
            message: message("rate limit exceeded"),
            retry_after: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        _ => ApiError::Generic {
            status,
            message: message("unexpected error"),
        },
    }
}

/// Extracts a human-readable message from a failed response body.
///
/// Tries the JSON fields `detail`, `error` and `message` in that order,
/// then the raw body, then the status reason phrase.
pub fn extract_detail(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for field in ["detail", "error", "message"] {
            match json.get(field) {
                Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
                Some(Value::Null) | Some(Value::String(_)) | None => continue,
                Some(other) => return other.to_string(),
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status.canonical_reason().unwrap_or("Unknown Status").to_string()
}

/// Reads the `Retry-After` header as whole seconds.
///
/// Fractional values are rounded up. Missing or unparseable headers yield
/// [`DEFAULT_RETRY_AFTER_SECS`].
pub fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .and_then(|v| {
            v.parse::<u64>().ok().or_else(|| {
                v.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.ceil() as u64)
            })
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_classify_auth() {
        let err = classify(401, "bad key", None);
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(err.status(), 401);
        assert_eq!(err.to_string(), "request failed with status 401: bad key");
    }

    #[test]
    fn test_classify_rate_limit_keeps_retry_after() {
        let err = classify(429, "", Some(60));
        assert_eq!(err.kind(), ErrorKind::RateLimit);
        assert_eq!(err.retry_after(), Some(60));
        assert!(err.message().contains("rate limit exceeded"));
    }

    #[test]
    fn test_classify_rate_limit_default_retry_after() {
        assert_eq!(classify(429, "x", None).retry_after(), Some(60));
    }

    #[test]
    fn test_classify_generic_preserves_status() {
        let err = classify(500, "boom", None);
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.status(), 500);
        assert_eq!(classify(418, "teapot", None).status(), 418);
        assert_eq!(classify(0, "offline", None).status(), 0);
    }

    #[test]
    fn test_classify_not_found_and_validation() {
        assert_eq!(classify(404, "", None).kind(), ErrorKind::NotFound);
        assert_eq!(classify(422, "", None).kind(), ErrorKind::Validation);
        assert!(classify(404, "", None).message().ends_with("resource not found"));
    }

    #[test]
    fn test_every_kind_exposes_status() {
        for status in [401u16, 404, 422, 429, 500, 0] {
            let err = classify(status, "d", None);
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn test_extract_detail_field_order() {
        let s = StatusCode::BAD_REQUEST;
        assert_eq!(
            extract_detail(s, r#"{"message":"m","error":"e","detail":"d"}"#),
            "d"
        );
        assert_eq!(extract_detail(s, r#"{"message":"m","error":"e"}"#), "e");
        assert_eq!(extract_detail(s, r#"{"message":"m"}"#), "m");
    }

    #[test]
    fn test_extract_detail_structured_value() {
        let detail = extract_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["query"],"msg":"field required"}]}"#,
        );
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_extract_detail_fallbacks() {
        assert_eq!(
            extract_detail(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(extract_detail(StatusCode::NOT_FOUND, r#"{"other":1}"#), r#"{"other":1}"#);
        assert_eq!(extract_detail(StatusCode::NOT_FOUND, ""), "Not Found");
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), 60);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("12"));
        assert_eq!(parse_retry_after(&headers), 12);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("1.2"));
        assert_eq!(parse_retry_after(&headers), 2);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));
        assert_eq!(parse_retry_after(&headers), 60);
    }
}
