//
//  profilescout
//  cli/credits.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Credit balance command

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::api::CreditsResponse;
use crate::output::{or_dash, print_field, TableOutput};

use super::GlobalOptions;

/// Show the account's credit balance
#[derive(Args, Debug)]
pub struct CreditsCommand {}

#[derive(Debug, Serialize)]
struct CreditsView(CreditsResponse);

impl TableOutput for CreditsView {
    fn print_table(&self, color: bool) {
        let remaining = self.0.credits_remaining.to_string();
        let remaining = if !color {
            remaining
        } else if self.0.credits_remaining <= 0 {
            style(remaining).red().bold().to_string()
        } else {
            style(remaining).green().bold().to_string()
        };

        print_field("Plan", &or_dash(self.0.plan.as_deref()), color);
        print_field("Remaining", &remaining, color);
        print_field("Used", &self.0.credits_used.to_string(), color);
    }
}

impl CreditsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let credits = client.credits().await?;
        global.writer().write(&CreditsView(credits))
    }
}
