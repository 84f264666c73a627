//
//  profilescout
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Shows where the configuration file lives, prints the effective
//! configuration, and writes a file with the defaults to start from.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::Config;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the configuration file path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a configuration file with the defaults
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Path => self.path(global),
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Init(args) => self.init(args, global),
        }
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path,
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(url) = &global.base_url {
            config.api.base_url = url.clone();
        }

        if global.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Ok(())
    }

    fn init(&self, args: &InitArgs, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if path.exists() && !args.force {
            bail!(
                "Config file already exists at {}. Use --force to overwrite.",
                path.display()
            );
        }

        Config::default().save_to(&path)?;

        if global.json {
            println!("{}", serde_json::json!({ "path": path }));
        } else {
            println!("{} Wrote {}", style("✓").green().bold(), path.display());
        }
        Ok(())
    }
}
