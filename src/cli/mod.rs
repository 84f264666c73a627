//
//  profilescout
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod credits;
mod enrich;
mod research;
mod search;

pub use config::ConfigCommand;
pub use credits::CreditsCommand;
pub use enrich::EnrichCommand;
pub use research::ResearchCommand;
pub use search::SearchCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::ScoutClient;
use crate::auth::API_KEY_ENV;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// scout - Search and enrich professional profiles from the command line
#[derive(Parser, Debug)]
#[command(
    name = "scout",
    version,
    about = "Search and enrich professional profiles from the command line",
    long_about = "scout is a CLI for the ProfileScout API.\n\n\
                  It runs profile searches, deep research jobs and enrichment lookups.",
    propagate_version = true,
    after_help = "Use 'scout <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API key (defaults to the PROFILESCOUT_API_KEY environment variable)
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API origin, overriding the config file
    #[arg(long, global = true, env = "SCOUT_BASE_URL")]
    pub base_url: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.format())
    }

    /// Builds a client from the config file and these options.
    pub fn client(&self) -> Result<ScoutClient> {
        let config = Config::load()?;
        let mut builder = ScoutClient::builder().config(&config);
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key.as_str());
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str());
        }
        Ok(builder.build()?)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for profiles
    #[command(visible_alias = "s")]
    Search(SearchCommand),

    /// Run and manage deep research jobs
    #[command(visible_alias = "r")]
    Research(ResearchCommand),

    /// Enrich a single profile or post
    Enrich(EnrichCommand),

    /// Show the account's credit balance
    Credits(CreditsCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}
