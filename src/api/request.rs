//
//  profilescout
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Engine
//!
//! [`RequestEngine::execute`] turns one logical API call into one or more
//! HTTP exchanges and a parsed JSON value.
//!
//! ## Retry Policy
//!
//! | Outcome | Action |
//! |---------|--------|
//! | 2xx | parse body (`{}` when empty) and return |
//! | 401 / 404 / 422 | fail immediately |
//! | 429 | wait `Retry-After` seconds (default 60), retry |
//! | 5xx | wait [`backoff_delay`], retry |
//! | other status | fail immediately |
//! | no response | wait [`backoff_delay`], retry |
//!
//! All retries of a call share one budget (`max_retries`, default 3, so at
//! most 4 exchanges). When the budget is spent the last error is returned.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Credential;

use super::common::{backoff_delay, classify, extract_detail, parse_retry_after, ApiError};
use super::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay for exponential backoff.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Default ceiling for exponential backoff.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(30_000);

/// Client-wide retry settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry of a 5xx or network failure.
    pub base_delay: Duration,
    /// Ceiling applied to the exponential growth before jitter.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

/// Per-call request settings.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
    /// Headers layered over the defaults.
    pub headers: HeaderMap,
    /// Whether transient failures are retried.
    pub retry: bool,
    /// Overrides [`RetryPolicy::max_retries`] for this call.
    pub max_retries: Option<u32>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
            retry: true,
            max_retries: None,
        }
    }
}

impl RequestOptions {
    /// A GET request.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST request with a JSON body.
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Disables retries for this call.
    pub fn without_retry(mut self) -> Self {
        self.retry = false;
        self
    }

    /// Overrides the retry budget for this call.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

/// Executes authenticated JSON requests with retries.
///
/// Holds no per-call state; clones share the same transport.
#[derive(Clone)]
pub struct RequestEngine {
    transport: Arc<dyn HttpTransport>,
    policy: RetryPolicy,
}

impl std::fmt::Debug for RequestEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl RequestEngine {
    /// Creates an engine sending through `transport`.
    pub fn new(transport: Arc<dyn HttpTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Returns the client-wide retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Performs one logical call against `url`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for non-retryable statuses, the
    /// last error once the retry budget is spent, or a Generic error when a
    /// successful response does not contain valid JSON.
    pub async fn execute(
        &self,
        url: &str,
        credential: &Credential,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        let request = build_request(url, credential, options)?;
        let max_retries = options.max_retries.unwrap_or(self.policy.max_retries);
        let mut attempt: u32 = 0;

        loop {
            debug!(attempt, method = %request.method, url = %request.url, "sending request");

            let (error, delay) = match self.transport.send(request.clone()).await {
                Ok(response) if response.status.is_success() => {
                    debug!(attempt, status = %response.status, "request succeeded");
                    return parse_success(&response);
                }
                Ok(response) => {
                    let status = response.status.as_u16();
                    let detail = extract_detail(response.status, &response.body);
                    debug!(attempt, status, detail = %detail, "request failed");

                    match status {
                        429 => {
                            let retry_after = parse_retry_after(&response.headers);
                            (
                                classify(status, &detail, Some(retry_after)),
                                Duration::from_secs(retry_after),
                            )
                        }
                        500..=599 => (classify(status, &detail, None), self.backoff(attempt)),
                        _ => return Err(classify(status, &detail, None)),
                    }
                }
                Err(err) => {
                    debug!(attempt, error = %err, "request did not complete");
                    (ApiError::network(&err), self.backoff(attempt))
                }
            };

            if !options.retry || attempt >= max_retries {
                return Err(error);
            }

            warn!(
                attempt = attempt + 1,
                max_retries,
                delay_ms = delay.as_millis() as u64,
                status = error.status(),
                "retrying request"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        backoff_delay(attempt, self.policy.base_delay, self.policy.max_delay)
    }
}

fn build_request(
    url: &str,
    credential: &Credential,
    options: &RequestOptions,
) -> Result<HttpRequest, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, credential.header_value()?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let body = match &options.body {
        Some(body) => {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::generic(0, format!("failed to encode request body: {}", e)))?;
            Some(bytes)
        }
        None => None,
    };

    for name in options.headers.keys() {
        headers.remove(name);
        for value in options.headers.get_all(name) {
            headers.append(name.clone(), value.clone());
        }
    }

    Ok(HttpRequest {
        method: options.method.clone(),
        url: url.to_string(),
        headers,
        body,
    })
}

fn parse_success(response: &HttpResponse) -> Result<Value, ApiError> {
    if response.body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    serde_json::from_str(&response.body).map_err(|e| {
        ApiError::generic(
            response.status.as_u16(),
            format!("failed to parse response body as JSON: {}", e),
        )
    })
}
