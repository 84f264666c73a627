//
//  profilescout
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use profilescout::api::{ApiError, ErrorKind};
use profilescout::cli::{Cli, Commands};
use profilescout::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(api) = e.downcast_ref::<ApiError>() {
                if let Some(retry_after) = api.retry_after() {
                    eprintln!("Retry in {} second(s).", retry_after);
                }
            }
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("SCOUT_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps API error kinds to process exit codes
fn exit_code(err: &anyhow::Error) -> i32 {
    let Some(api) = err.downcast_ref::<ApiError>() else {
        return exit_codes::ERROR;
    };

    match api.kind() {
        ErrorKind::Auth => exit_codes::AUTH_ERROR,
        ErrorKind::NotFound => exit_codes::NOT_FOUND,
        ErrorKind::Validation => exit_codes::VALIDATION,
        ErrorKind::RateLimit => exit_codes::RATE_LIMIT,
        ErrorKind::Generic if api.status() == 408 => exit_codes::TIMEOUT,
        ErrorKind::Generic => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Research(cmd) => cmd.run(&cli.global).await,
        Commands::Enrich(cmd) => cmd.run(&cli.global).await,
        Commands::Credits(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("scout version {}", profilescout::VERSION);
            Ok(())
        }
    }
}
