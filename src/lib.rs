//
//  profilescout
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # ProfileScout Client Library
//!
//! A typed async client for the ProfileScout profile search and enrichment
//! API, plus the `scout` command-line tool built on it.
//!
//! ## Features
//!
//! - **Typed endpoints**: Search, deep research, enrichment and credits
//! - **Retries**: Jittered exponential backoff for 5xx and network failures,
//!   `Retry-After` handling for 429
//! - **Pagination**: Lazy iteration over search result pages
//! - **Job polling**: Wait for deep research jobs with a timeout
//! - **Typed errors**: Auth, NotFound, Validation, RateLimit and Generic
//!
//! ## Module Structure
//!
//! - [`api`]: Client, request engine and endpoint types
//! - [`auth`]: API key resolution
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Table and JSON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use profilescout::api::{DeepResearchRequest, ScoutClient};
//!
//! # async fn example() -> Result<(), profilescout::api::ApiError> {
//! let client = ScoutClient::new(Some("sk-live-123"))?;
//!
//! let job = client.deep_research(&DeepResearchRequest::new("seed-stage climate founders")).await?;
//! let done = client.wait_for_deep_research(&job.job_id, &client.poll_options()).await?;
//! println!("{} profiles found", done.results.len());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// ProfileScout API client.
///
/// Handles authentication, URL building, retries, pagination, polling and
/// error classification.
pub mod api;

/// API key resolution.
pub mod auth;

/// Configuration file management.
///
/// Manages the non-secret settings stored in platform-specific locations:
/// - Linux: `~/.config/scout/config.toml`
/// - macOS: `~/Library/Application Support/scout/config.toml`
/// - Windows: `%APPDATA%\scout\config.toml`
pub mod config;

/// Output formatting for table and JSON modes.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use profilescout::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Re-export of the API client.
pub use api::ScoutClient;

/// Application name constant.
///
/// The name of the CLI binary, used in the `User-Agent` header and
/// configuration paths.
pub const APP_NAME: &str = "scout";

/// Application version constant.
///
/// ```rust
/// use profilescout::VERSION;
///
/// println!("scout version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource and request issues
/// - `16-31`: Operation-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use profilescout::exit_codes;
/// use std::process;
///
/// // Exit with authentication error
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Use `--help` to see correct usage.
    pub const USAGE: i32 = 2;

    /// Missing or rejected API key.
    ///
    /// Pass `--api-key` or set `PROFILESCOUT_API_KEY`.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;

    /// The server rejected the request parameters.
    pub const VALIDATION: i32 = 9;

    /// A deep research job did not finish in time.
    pub const TIMEOUT: i32 = 16;

    /// API rate limit exceeded.
    ///
    /// The server kept throttling after all retries.
    /// Wait for the reported delay before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
