//
//  profilescout
//  cli/enrich.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Enrichment commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::{
    ContactsOptions, ContactsResponse, PostReactionsResponse, Profile, ReactionsOptions,
    ScrapeOptions, ScrapeResponse,
};
use crate::output::{or_dash, print_field, print_header, truncate, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Enrich a single profile or post
#[derive(Args, Debug)]
pub struct EnrichCommand {
    #[command(subcommand)]
    pub command: EnrichSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EnrichSubcommand {
    /// Find email addresses and phone numbers for a profile
    Contacts(ContactsArgs),

    /// Scrape a profile live
    Scrape(ScrapeArgs),

    /// Show the stored profile for a LinkedIn URL
    Profile(ProfileArgs),

    /// List reactions to a post
    Reactions(ReactionsArgs),
}

#[derive(Args, Debug)]
pub struct ContactsArgs {
    /// LinkedIn profile URL
    pub linkedin_url: String,

    /// Look up email addresses
    #[arg(long)]
    pub email: bool,

    /// Look up phone numbers
    #[arg(long)]
    pub phone: bool,
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// LinkedIn profile URL
    pub linkedin_url: String,

    /// Include recent posts
    #[arg(long)]
    pub posts: bool,

    /// Include work experience
    #[arg(long)]
    pub experience: bool,

    /// Include education
    #[arg(long)]
    pub education: bool,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// LinkedIn profile URL
    pub linkedin_url: String,
}

#[derive(Args, Debug)]
pub struct ReactionsArgs {
    /// LinkedIn post URL
    pub post_url: String,

    /// Only this reaction type (like, celebrate, ...)
    #[arg(long = "type", value_name = "TYPE")]
    pub reaction_type: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Reactions per page
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ContactsView(ContactsResponse);

impl TableOutput for ContactsView {
    fn print_table(&self, color: bool) {
        if self.0.contacts.is_empty() {
            println!("No contact details found.");
            return;
        }
        let rows = self.0.contacts.iter().map(|c| {
            vec![
                c.kind.clone(),
                c.value.clone(),
                c.rating.map(|r| format!("{:.2}", r)).unwrap_or_else(|| "-".to_string()),
            ]
        });
        TableBuilder::new()
            .color(color)
            .headers(["TYPE", "VALUE", "RATING"])
            .rows(rows)
            .print();
    }
}

#[derive(Debug, Serialize)]
struct ProfileView(Profile);

impl TableOutput for ProfileView {
    fn print_table(&self, color: bool) {
        print_profile(&self.0, color);
    }
}

fn print_profile(p: &Profile, color: bool) {
    let name = or_dash(p.name.as_deref());
    if color {
        println!("{}", style(name).bold());
    } else {
        println!("{}", name);
    }
    if let Some(headline) = &p.headline {
        println!("{}", headline);
    }
    println!();
    print_field("  Title", &or_dash(p.title.as_deref()), color);
    print_field("  Location", &or_dash(p.location.as_deref()), color);
    print_field("  LinkedIn", &or_dash(p.linkedin_url.as_deref()), color);
    if let Some(followers) = p.followers_count {
        print_field("  Followers", &followers.to_string(), color);
    }
    if !p.skills.is_empty() {
        print_field("  Skills", &p.skills.join(", "), color);
    }
    if !p.websites.is_empty() {
        print_field("  Websites", &p.websites.join(", "), color);
    }
}

#[derive(Debug, Serialize)]
struct ScrapeView(ScrapeResponse);

impl TableOutput for ScrapeView {
    fn print_table(&self, color: bool) {
        print_profile(&self.0.profile, color);

        if !self.0.experience.is_empty() {
            println!();
            print_header("Experience");
            for e in &self.0.experience {
                let period = format!(
                    "{} - {}",
                    or_dash(e.start_date.as_deref()),
                    if e.is_current.unwrap_or(false) {
                        "present".to_string()
                    } else {
                        or_dash(e.end_date.as_deref())
                    }
                );
                println!(
                    "  {} at {} ({})",
                    or_dash(e.title.as_deref()),
                    or_dash(e.company_name.as_deref()),
                    period
                );
            }
        }

        if !self.0.education.is_empty() {
            println!();
            print_header("Education");
            for e in &self.0.education {
                println!(
                    "  {} {}",
                    or_dash(e.school_name.as_deref()),
                    e.degree.as_deref().map(|d| format!("({})", d)).unwrap_or_default()
                );
            }
        }

        if !self.0.posts.is_empty() {
            println!();
            print_header("Posts");
            for post in &self.0.posts {
                println!(
                    "  [{}] {}",
                    or_dash(post.posted_at.as_deref()),
                    truncate(&or_dash(post.text.as_deref()).replace('\n', " "), 80)
                );
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ReactionsView(PostReactionsResponse);

impl TableOutput for ReactionsView {
    fn print_table(&self, color: bool) {
        if self.0.reactions.is_empty() {
            println!("No reactions found.");
            return;
        }
        let rows = self.0.reactions.iter().map(|r| {
            vec![
                or_dash(r.reaction_type.as_deref()),
                or_dash(r.reactor.name.as_deref()),
                truncate(&or_dash(r.reactor.headline.as_deref()), 48),
                or_dash(r.reactor.linkedin_url.as_deref()),
            ]
        });
        TableBuilder::new()
            .color(color)
            .headers(["REACTION", "NAME", "HEADLINE", "LINKEDIN"])
            .rows(rows)
            .print();

        if let Some(total) = self.0.total {
            println!();
            println!(
                "Showing {} of {} reaction(s), page {}",
                self.0.reactions.len(),
                total,
                self.0.page.unwrap_or(1)
            );
        }
    }
}

impl EnrichCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            EnrichSubcommand::Contacts(args) => {
                let options = ContactsOptions {
                    linkedin_url: args.linkedin_url.clone(),
                    email_enrichment: args.email.then_some(true),
                    phone_enrichment: args.phone.then_some(true),
                };
                let response = client.enrich_contacts(&options).await?;
                writer.write(&ContactsView(response))
            }
            EnrichSubcommand::Scrape(args) => {
                let options = ScrapeOptions {
                    linkedin_url: args.linkedin_url.clone(),
                    include_posts: args.posts.then_some(true),
                    include_experience: args.experience.then_some(true),
                    include_education: args.education.then_some(true),
                };
                let response = client.scrape_profile(&options).await?;
                writer.write(&ScrapeView(response))
            }
            EnrichSubcommand::Profile(args) => {
                let profile = client.get_profile(&args.linkedin_url).await?;
                writer.write(&ProfileView(profile))
            }
            EnrichSubcommand::Reactions(args) => {
                let options = ReactionsOptions {
                    post_url: args.post_url.clone(),
                    reaction_type: args.reaction_type.clone(),
                    page: args.page,
                    limit: args.limit,
                };
                let response = client.post_reactions(&options).await?;
                writer.write(&ReactionsView(response))
            }
        }
    }
}
