//
//  profilescout
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # ProfileScout Client
//!
//! [`ScoutClient`] owns one credential, one base URL and one
//! [`RequestEngine`]. The endpoint methods live next to their types in
//! [`search`](super::search), [`research`](super::research),
//! [`enrich`](super::enrich) and [`account`](super::account); each one goes
//! through [`ScoutClient::get`] or [`ScoutClient::post`]:
//!
//! ```text
//! options -> Params -> normalize_params -> build_url -> execute -> T
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::{Credential, CredentialSource, EnvSource};
use crate::config::Config;

use super::common::{ApiError, DEFAULT_PAGE_SIZE};
use super::params::{normalize_params, Params};
use super::polling::PollOptions;
use super::request::{RequestEngine, RequestOptions, RetryPolicy};
use super::transport::{HttpTransport, ReqwestTransport};
use super::url::build_url;

/// Origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.profilescout.dev";

/// Typed client for the ProfileScout API.
///
/// Cloning is cheap and clones share the underlying transport.
///
/// # Example
///
/// ```rust,no_run
/// use profilescout::api::ScoutClient;
///
/// # async fn example() -> Result<(), profilescout::api::ApiError> {
/// let client = ScoutClient::builder().api_key("sk-live-123").build()?;
/// let credits = client.credits().await?;
/// println!("{} credits left", credits.credits_remaining);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ScoutClient {
    engine: RequestEngine,
    credential: Credential,
    base_url: String,
    poll: PollOptions,
    page_size: u32,
}

impl std::fmt::Debug for ScoutClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoutClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("policy", self.engine.policy())
            .field("poll", &self.poll)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl ScoutClient {
    /// Starts building a client.
    pub fn builder() -> ScoutClientBuilder {
        ScoutClientBuilder::default()
    }

    /// Creates a client with default settings.
    ///
    /// Uses `api_key` when given, otherwise `PROFILESCOUT_API_KEY`.
    pub fn new(api_key: Option<&str>) -> Result<Self, ApiError> {
        let mut builder = Self::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Creates a client from file configuration plus an optional key.
    pub fn from_config(config: &Config, api_key: Option<&str>) -> Result<Self, ApiError> {
        let mut builder = Self::builder().config(config);
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Returns the origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default polling settings for deep research jobs.
    pub fn poll_options(&self) -> PollOptions {
        self.poll
    }

    /// Returns the page size used by [`search_all`](Self::search_all).
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Sends a request to `path` and returns the raw JSON value.
    ///
    /// `params` are normalized before being encoded into the query string.
    pub async fn request(
        &self,
        path: &str,
        params: Option<&Params>,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        let wire = params.map(normalize_params);
        let url = build_url(&self.base_url, path, wire.as_ref())?;
        self.engine.execute(&url, &self.credential, options).await
    }

    /// GET `path` with query `params`, decoded into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, ApiError> {
        let value = self.request(path, Some(params), &RequestOptions::get()).await?;
        decode(value)
    }

    /// POST `body` as JSON to `path`, decoded into `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::generic(0, format!("failed to encode request body: {}", e)))?;
        let value = self.request(path, None, &RequestOptions::post(body)).await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::generic(0, format!("unexpected response format: {}", e)))
}

/// Builder for [`ScoutClient`].
pub struct ScoutClientBuilder {
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
    poll: PollOptions,
    page_size: u32,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
    source: Option<Box<dyn CredentialSource>>,
}

impl Default for ScoutClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            poll: PollOptions::default(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            transport: None,
            source: None,
        }
    }
}

impl ScoutClientBuilder {
    /// Uses `key` instead of looking one up.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sends requests to `url` instead of [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn poll_options(mut self, options: PollOptions) -> Self {
        self.poll = options;
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Per-request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the process environment as the fallback key source.
    pub fn credential_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Applies every setting from a configuration file.
    pub fn config(self, config: &Config) -> Self {
        self.base_url(config.api.base_url.clone())
            .retry_policy(config.retry.policy())
            .poll_options(config.polling.options())
            .page_size(config.search.page_size)
    }

    /// Resolves the credential and creates the client.
    ///
    /// # Errors
    ///
    /// Returns an Auth error when no API key is available, or a Generic
    /// error when the HTTP client cannot be created.
    pub fn build(self) -> Result<ScoutClient, ApiError> {
        let credential = match self.source.as_deref() {
            Some(source) => Credential::resolve(self.api_key.as_deref(), source)?,
            None => Credential::resolve(self.api_key.as_deref(), &EnvSource)?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let transport = match self.timeout {
                    Some(timeout) => ReqwestTransport::with_timeout(timeout),
                    None => ReqwestTransport::new(),
                }
                .map_err(|e| ApiError::generic(0, format!("failed to create HTTP client: {}", e)))?;
                Arc::new(transport)
            }
        };

        Ok(ScoutClient {
            engine: RequestEngine::new(transport, self.retry),
            credential,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            poll: self.poll,
            page_size: self.page_size.max(1),
        })
    }
}
