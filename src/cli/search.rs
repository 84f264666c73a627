//
//  profilescout
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Profile search command
//!
//! Runs a single search page by default. With `--all` the command keeps
//! following the continuation token until the server runs out of results
//! or `--max` results have been collected.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::api::{ParamValue, Params, SearchOptions, SearchResponse, SearchResult, CURSOR_KEYS};
use crate::output::{or_dash, truncate, OutputWriter, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Search for profiles
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Natural-language description of the people to find
    pub query: String,

    /// Results per page
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Results to skip (single-page searches only)
    #[arg(long, conflicts_with = "all")]
    pub offset: Option<u64>,

    /// Continue a previous search
    #[arg(long)]
    pub search_id: Option<String>,

    /// Fetch every page
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Stop after this many results when using --all
    #[arg(long, requires = "all")]
    pub max: Option<usize>,

    /// Apply stricter relevance filtering on the server
    #[arg(long)]
    pub advanced_filtering: bool,

    /// Restrict to a company URL (repeatable)
    #[arg(long = "company", value_name = "URL")]
    pub companies: Vec<String>,

    /// Restrict to a school URL (repeatable)
    #[arg(long = "school", value_name = "URL")]
    pub schools: Vec<String>,

    /// Extra query parameter passed through unchanged (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// Search results as shown in a table.
#[derive(Debug, Serialize)]
pub(super) struct ResultTable<'a> {
    pub results: &'a [SearchResult],
}

impl TableOutput for ResultTable<'_> {
    fn print_table(&self, color: bool) {
        let rows = self.results.iter().map(|r| {
            let current = r
                .experience
                .iter()
                .find(|e| e.is_current.unwrap_or(false))
                .or_else(|| r.experience.first());
            vec![
                or_dash(r.profile.name.as_deref()),
                truncate(&or_dash(r.profile.headline.as_deref()), 48),
                or_dash(current.and_then(|e| e.company_name.as_deref())),
                or_dash(r.profile.location.as_deref()),
                or_dash(r.profile.linkedin_url.as_deref()),
            ]
        });

        TableBuilder::new()
            .color(color)
            .headers(["NAME", "HEADLINE", "COMPANY", "LOCATION", "LINKEDIN"])
            .rows(rows)
            .print();
    }
}

#[derive(Debug, Serialize)]
struct SearchPage {
    #[serde(flatten)]
    response: SearchResponse,
}

impl TableOutput for SearchPage {
    fn print_table(&self, color: bool) {
        if self.response.results.is_empty() {
            println!("No profiles found.");
            return;
        }

        ResultTable {
            results: &self.response.results,
        }
        .print_table(color);

        let total = self
            .response
            .total
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!();
        println!("Showing {} of {} result(s)", self.response.results.len(), total);
        if let Some(id) = &self.response.search_id {
            let id = if color { style(id).cyan().to_string() } else { id.clone() };
            println!("Next page: scout search <query> --search-id {} --offset <n>", id);
        }
    }
}

#[derive(Debug, Serialize)]
struct AllResults {
    results: Vec<SearchResult>,
}

impl TableOutput for AllResults {
    fn print_table(&self, color: bool) {
        if self.results.is_empty() {
            println!("No profiles found.");
            return;
        }
        ResultTable {
            results: &self.results,
        }
        .print_table(color);
        println!();
        println!("Fetched {} result(s)", self.results.len());
    }
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();
        let options = self.options();

        if !self.all {
            let response = client.search(&self.query, &options).await?;
            return writer.write(&SearchPage { response });
        }

        for key in self.cursor_params() {
            writer.write_warning(&format!("--param {} is ignored with --all", key));
        }

        let mut pages = client.search_all(&self.query, &options);
        if let Some(max) = self.max {
            pages = pages.with_max_results(max);
        }

        let spinner = self.spinner(&writer);
        let mut results = Vec::new();
        while let Some(page) = pages.next_page().await? {
            results.extend(page);
            spinner.set_message(format!("Fetched {} result(s)", results.len()));
        }
        spinner.finish_and_clear();

        writer.write(&AllResults { results })
    }

    fn options(&self) -> SearchOptions {
        let extra: Params = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), ParamValue::from(v.as_str())))
            .collect();

        SearchOptions {
            limit: self.limit,
            offset: self.offset,
            search_id: self.search_id.clone(),
            advanced_filtering: self.advanced_filtering.then_some(true),
            companies: self.companies.clone(),
            schools: self.schools.clone(),
            extra,
        }
    }

    /// `--param` keys that `--all` manages itself.
    fn cursor_params(&self) -> Vec<&str> {
        self.params
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| CURSOR_KEYS.contains(k))
            .collect()
    }

    fn spinner(&self, writer: &OutputWriter) -> ProgressBar {
        if writer.is_json() {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Searching...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        search: SearchCommand,
    }

    #[test]
    fn test_options_from_flags() {
        let cmd = Wrapper::parse_from([
            "scout",
            "rust engineer",
            "--company",
            "acme",
            "--company",
            "globex",
            "--advanced-filtering",
            "--param",
            "location=Berlin",
        ])
        .search;

        let options = cmd.options();

        assert_eq!(options.companies, vec!["acme", "globex"]);
        assert_eq!(options.advanced_filtering, Some(true));
        assert_eq!(options.extra["location"], ParamValue::Str("Berlin".into()));
    }

    #[test]
    fn test_max_requires_all() {
        assert!(Wrapper::try_parse_from(["scout", "q", "--max", "5"]).is_err());
        assert!(Wrapper::try_parse_from(["scout", "q", "--all", "--max", "5"]).is_ok());
    }

    #[test]
    fn test_cursor_params_are_detected() {
        let cmd = Wrapper::parse_from([
            "scout", "q", "--all", "--param", "offset=0", "--param", "location=Berlin", "--param",
            "searchId=s-1",
        ])
        .search;

        assert_eq!(cmd.cursor_params(), vec!["offset", "searchId"]);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
    }
}
