//
//  profilescout
//  cli/research.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deep research commands

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::api::{DeepResearchJob, DeepResearchRequest, DeepResearchStatus, PollOptions, ScoutClient};
use crate::output::{format_status, or_dash, print_field, OutputWriter, TableOutput};

use super::search::ResultTable;
use super::GlobalOptions;

/// Run and manage deep research jobs
#[derive(Args, Debug)]
pub struct ResearchCommand {
    #[command(subcommand)]
    pub command: ResearchSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ResearchSubcommand {
    /// Start a new job
    Start(StartArgs),

    /// Show a job's current status
    Status(JobArgs),

    /// Cancel a running job
    Cancel(JobArgs),

    /// Ask a job for more results
    More(MoreArgs),

    /// Wait for a job to finish and print its results
    Wait(WaitArgs),
}

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Natural-language description of the people to find
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Only include people currently at this company URL (repeatable)
    #[arg(long = "company", value_name = "URL")]
    pub companies: Vec<String>,

    /// Wait for the job to finish
    #[arg(long, short = 'w')]
    pub wait: bool,
}

#[derive(Args, Debug)]
pub struct JobArgs {
    /// Job ID
    pub job_id: String,
}

#[derive(Args, Debug)]
pub struct MoreArgs {
    /// Job ID
    pub job_id: String,

    /// Number of additional results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct WaitArgs {
    /// Job ID
    pub job_id: String,

    /// Milliseconds between status checks (defaults to the config file)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Milliseconds before giving up (defaults to the config file)
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
struct JobView {
    #[serde(flatten)]
    job: DeepResearchJob,
}

impl TableOutput for JobView {
    fn print_table(&self, color: bool) {
        print_field("Job", &self.job.job_id, color);
        print_field("Status", &format_status(&self.job.status.to_string(), color), color);
        if let Some(message) = &self.job.message {
            print_field("Message", message, color);
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusView {
    #[serde(flatten)]
    status: DeepResearchStatus,
}

impl TableOutput for StatusView {
    fn print_table(&self, color: bool) {
        let s = &self.status;
        let title = format!("Deep research {}", s.job_id);
        if color {
            println!("{}", style(title).bold());
        } else {
            println!("{}", title);
        }
        println!();
        print_field("  Status", &format_status(&s.status.to_string(), color), color);
        print_field("  Message", &or_dash(s.message.as_deref()), color);
        print_field("  Created", &or_dash(s.created_at.as_deref()), color);
        print_field("  Updated", &or_dash(s.updated_at.as_deref()), color);
        if let Some(error) = &s.error {
            print_field("  Error", error, color);
        }

        if !s.results.is_empty() {
            println!();
            ResultTable { results: &s.results }.print_table(color);
            let total = s.total.unwrap_or(s.results.len() as u64);
            println!();
            println!("Showing {} of {} result(s)", s.results.len(), total);
        }
    }
}

impl ResearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            ResearchSubcommand::Start(args) => self.start(&client, &writer, args).await,
            ResearchSubcommand::Status(args) => {
                let status = client.deep_research_status(&args.job_id).await?;
                writer.write(&StatusView { status })
            }
            ResearchSubcommand::Cancel(args) => {
                let job = client.cancel_deep_research(&args.job_id).await?;
                if writer.is_json() {
                    return writer.write(&JobView { job });
                }
                writer.write_success(&format!("Cancelled deep research job {}", job.job_id));
                Ok(())
            }
            ResearchSubcommand::More(args) => {
                let job = client.continue_deep_research(&args.job_id, args.limit).await?;
                writer.write(&JobView { job })
            }
            ResearchSubcommand::Wait(args) => {
                let mut options = client.poll_options();
                if let Some(interval) = args.interval_ms {
                    options.interval = Duration::from_millis(interval);
                }
                if let Some(timeout) = args.timeout_ms {
                    options.timeout = Duration::from_millis(timeout);
                }
                let status = wait_with_spinner(&client, &writer, &args.job_id, &options).await?;
                writer.write(&StatusView { status })
            }
        }
    }

    async fn start(&self, client: &ScoutClient, writer: &OutputWriter, args: &StartArgs) -> Result<()> {
        let request = DeepResearchRequest {
            query: args.query.clone(),
            limit: args.limit,
            hard_filter_company_urls: args.companies.clone(),
        };
        let job = client.deep_research(&request).await?;

        if !args.wait {
            if !writer.is_json() {
                writer.write_success(&format!("Started deep research job {}", job.job_id));
                writer.write_info(&format!("Check on it with: scout research wait {}", job.job_id));
                return Ok(());
            }
            return writer.write(&JobView { job });
        }

        let status = wait_with_spinner(client, writer, &job.job_id, &client.poll_options()).await?;
        writer.write(&StatusView { status })
    }
}

async fn wait_with_spinner(
    client: &ScoutClient,
    writer: &OutputWriter,
    job_id: &str,
    options: &PollOptions,
) -> Result<DeepResearchStatus> {
    let spinner = if writer.is_json() {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} [{elapsed}]") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Waiting for deep research job {}", job_id));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };

    let result = client.wait_for_deep_research(job_id, options).await;
    spinner.finish_and_clear();
    Ok(result?)
}
