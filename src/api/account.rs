//
//  profilescout
//  api/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account usage.

use serde::{Deserialize, Serialize};

use super::client::ScoutClient;
use super::common::ApiError;
use super::params::Params;

/// Credit balance of the account owning the API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsResponse {
    pub credits_remaining: i64,
    pub credits_used: i64,
    pub plan: Option<String>,
}

impl ScoutClient {
    /// Returns the current credit balance.
    pub async fn credits(&self) -> Result<CreditsResponse, ApiError> {
        self.get("/api/credits", &Params::new()).await
    }
}
