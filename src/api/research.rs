//
//  profilescout
//  api/research.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deep research jobs.
//!
//! A deep research request runs on the server for up to several minutes.
//! [`ScoutClient::deep_research`] starts it and returns a job id, which can be
//! checked with [`ScoutClient::deep_research_status`] or awaited with
//! [`ScoutClient::wait_for_deep_research`].
//!
//! # Job Lifecycle
//!
//! 1. **pending** - Queued
//! 2. **searching** / **in_progress** - Running
//! 3. **completed** - Results available
//! 4. **failed** - Stopped with an error
//!
//! Any other state the server reports is treated as still running.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::ScoutClient;
use super::common::ApiError;
use super::polling::{wait_for, JobProgress, JobStatus, PollOptions};
use super::search::SearchResult;
use super::url::path_segment;

/// Parameters for a new deep research job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeepResearchRequest {
    /// Natural-language description of the people to find.
    pub query: String,

    /// Maximum number of results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only return people currently at one of these company URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hard_filter_company_urls: Vec<String>,
}

impl DeepResearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Acknowledgement returned when a job is started, cancelled or extended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepResearchJob {
    pub job_id: String,
    pub status: JobState,
    pub message: Option<String>,
}

/// Server-side state of a deep research job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    #[default]
    Pending,
    Searching,
    InProgress,
    Completed,
    Failed,
    /// A state this client does not know; treated as non-terminal.
    #[serde(other)]
    Unknown,
}

impl JobState {
    /// Returns `true` for `completed` and `failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Searching => "searching",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Full status of a deep research job, including results once completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepResearchStatus {
    pub job_id: String,
    pub status: JobState,
    pub message: Option<String>,
    pub results: Vec<SearchResult>,
    pub total: Option<u64>,
    pub error: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl JobStatus for DeepResearchStatus {
    fn progress(&self) -> JobProgress {
        match self.status {
            JobState::Completed => JobProgress::Completed,
            JobState::Failed => JobProgress::Failed(self.error.clone().or_else(|| self.message.clone())),
            _ => JobProgress::Running,
        }
    }
}

fn job_path(job_id: &str, action: Option<&str>) -> String {
    let mut path = format!("/api/search/deep_research/{}", path_segment(job_id));
    if let Some(action) = action {
        path.push('/');
        path.push_str(action);
    }
    path
}

impl ScoutClient {
    /// Starts a deep research job.
    pub async fn deep_research(&self, request: &DeepResearchRequest) -> Result<DeepResearchJob, ApiError> {
        self.post("/api/search/deep_research", request).await
    }

    /// Fetches the current status of a job.
    pub async fn deep_research_status(&self, job_id: &str) -> Result<DeepResearchStatus, ApiError> {
        self.get(&job_path(job_id, None), &Default::default()).await
    }

    /// Asks the server to stop a job.
    pub async fn cancel_deep_research(&self, job_id: &str) -> Result<DeepResearchJob, ApiError> {
        self.post(&job_path(job_id, Some("cancel")), &json!({})).await
    }

    /// Asks a finished job for `more` additional results.
    pub async fn continue_deep_research(&self, job_id: &str, more: u32) -> Result<DeepResearchJob, ApiError> {
        self.post(&job_path(job_id, Some("more")), &json!({ "limit": more }))
            .await
    }

    /// Polls a job until it completes, fails or `options.timeout` passes.
    ///
    /// # Errors
    ///
    /// A failed job is a Generic error with status 500, a timeout one with
    /// status 408. Errors from the status requests are returned unchanged.
    pub async fn wait_for_deep_research(
        &self,
        job_id: &str,
        options: &PollOptions,
    ) -> Result<DeepResearchStatus, ApiError> {
        wait_for(job_id, options, |id| async move { self.deep_research_status(&id).await }).await
    }
}
