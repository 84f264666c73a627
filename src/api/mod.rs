//
//  profilescout
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the ProfileScout HTTP API.
//!
//! ## Architecture
//!
//! - [`client`]: [`ScoutClient`], its builder and the typed GET/POST helpers
//! - [`request`]: The request engine (headers, retries, error classification)
//! - [`transport`]: The one-exchange HTTP seam and its `reqwest` implementation
//! - [`params`] and [`url`]: Query parameter normalization and URL construction
//! - [`polling`]: Waiting for long-running jobs
//! - [`common`]: Errors, backoff and pagination
//! - [`search`], [`research`], [`enrich`], [`account`]: Endpoint types and methods
//!
//! ## Usage
//!
//! ```rust,no_run
//! use profilescout::api::{ScoutClient, SearchOptions};
//!
//! # async fn example() -> Result<(), profilescout::api::ApiError> {
//! // Key from PROFILESCOUT_API_KEY
//! let client = ScoutClient::new(None)?;
//!
//! let page = client.search("head of data, Berlin", &SearchOptions::default()).await?;
//! println!("{} of {:?} results", page.results.len(), page.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]:
//!
//! - `Auth`: 401 Unauthorized, or no API key at construction
//! - `NotFound`: 404 Not Found
//! - `Validation`: 422 Unprocessable Entity
//! - `RateLimit`: 429 Too Many Requests, after retries
//! - `Generic`: everything else, status 0 for network failures

pub mod client;

/// Shared error, backoff and pagination types.
pub mod common;

pub mod params;
pub mod polling;
pub mod request;
pub mod transport;
pub mod url;

/// Profile search.
pub mod search;

/// Deep research jobs.
pub mod research;

/// Contact, profile and post enrichment.
pub mod enrich;

/// Credit balance.
pub mod account;

pub use account::CreditsResponse;
pub use client::{ScoutClient, ScoutClientBuilder, DEFAULT_BASE_URL};
pub use common::{backoff_delay, ApiError, ErrorKind, Page, PageRequest, Paginator};
pub use enrich::{
    Contact, ContactsOptions, ContactsResponse, PostReactionsResponse, Reaction, ReactionsOptions,
    Reactor, ScrapeOptions, ScrapeResponse,
};
pub use params::{normalize_params, ParamValue, Params};
pub use polling::{wait_for, JobProgress, JobStatus, PollOptions};
pub use request::{RequestEngine, RequestOptions, RetryPolicy};
pub use research::{DeepResearchJob, DeepResearchRequest, DeepResearchStatus, JobState};
pub use search::{
    Education, Experience, Post, Profile, SearchOptions, SearchResponse, SearchResult, CURSOR_KEYS,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use url::build_url;
