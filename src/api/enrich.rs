//
//  profilescout
//  api/enrich.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Enrichment endpoints for a single profile or post.
//!
//! All of them take a LinkedIn URL and return data gathered for it:
//!
//! - [`ScoutClient::enrich_contacts`] - email addresses and phone numbers
//! - [`ScoutClient::scrape_profile`] - profile with optional history and posts
//! - [`ScoutClient::get_profile`] - profile only
//! - [`ScoutClient::post_reactions`] - who reacted to a post

use serde::{Deserialize, Serialize};

use super::client::ScoutClient;
use super::common::ApiError;
use super::params::Params;
use super::search::{Education, Experience, Post, Profile};

/// A contact detail found for a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// `email`, `phone` or another channel name.
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub value: String,
    /// Server confidence score.
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsResponse {
    pub linkedin_url: Option<String>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeResponse {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub posts: Vec<Post>,
}

/// The person behind a reaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reactor {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub reaction_type: Option<String>,
    pub reactor: Reactor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostReactionsResponse {
    pub post_url: Option<String>,
    pub reactions: Vec<Reaction>,
    pub total: Option<u64>,
    pub page: Option<u32>,
}

/// Options for [`ScoutClient::enrich_contacts`].
#[derive(Debug, Clone, Default)]
pub struct ContactsOptions {
    pub linkedin_url: String,
    /// Look up email addresses.
    pub email_enrichment: Option<bool>,
    /// Look up phone numbers.
    pub phone_enrichment: Option<bool>,
}

impl ContactsOptions {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("linkedinUrl".into(), self.linkedin_url.as_str().into());
        params.insert("emailEnrichment".into(), self.email_enrichment.into());
        params.insert("phoneEnrichment".into(), self.phone_enrichment.into());
        params
    }
}

/// Options for [`ScoutClient::scrape_profile`].
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    pub linkedin_url: String,
    pub include_posts: Option<bool>,
    pub include_experience: Option<bool>,
    pub include_education: Option<bool>,
}

impl ScrapeOptions {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("linkedinUrl".into(), self.linkedin_url.as_str().into());
        params.insert("includePosts".into(), self.include_posts.into());
        params.insert("includeExperience".into(), self.include_experience.into());
        params.insert("includeEducation".into(), self.include_education.into());
        params
    }
}

/// Options for [`ScoutClient::post_reactions`].
#[derive(Debug, Clone, Default)]
pub struct ReactionsOptions {
    pub post_url: String,
    /// Only reactions of this type, e.g. `like` or `celebrate`.
    pub reaction_type: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ReactionsOptions {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("postUrl".into(), self.post_url.as_str().into());
        params.insert("reactionType".into(), self.reaction_type.clone().into());
        params.insert("page".into(), self.page.into());
        params.insert("limit".into(), self.limit.into());
        params
    }
}

impl ScoutClient {
    /// Finds contact details for a profile.
    pub async fn enrich_contacts(&self, options: &ContactsOptions) -> Result<ContactsResponse, ApiError> {
        self.get("/api/enrich/contacts", &options.to_params()).await
    }

    /// Scrapes a profile live.
    pub async fn scrape_profile(&self, options: &ScrapeOptions) -> Result<ScrapeResponse, ApiError> {
        self.get("/api/enrich/scrape", &options.to_params()).await
    }

    /// Fetches the stored profile for a LinkedIn URL.
    pub async fn get_profile(&self, linkedin_url: &str) -> Result<Profile, ApiError> {
        let mut params = Params::new();
        params.insert("linkedinUrl".into(), linkedin_url.into());
        self.get("/api/enrich/linkedin", &params).await
    }

    /// Lists reactions to a post.
    pub async fn post_reactions(
        &self,
        options: &ReactionsOptions,
    ) -> Result<PostReactionsResponse, ApiError> {
        self.get("/api/enrich/post-reactions", &options.to_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PROFILE_URL: &str = "https://www.linkedin.com/in/ada";

    fn client(url: String) -> ScoutClient {
        ScoutClient::builder()
            .api_key("sk-test")
            .base_url(url)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_enrich_contacts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/enrich/contacts")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("linkedin_url".into(), PROFILE_URL.into()),
                Matcher::UrlEncoded("email_enrichment".into(), "true".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"linkedin_url":"https://www.linkedin.com/in/ada",
                    "contacts":[{"type":"email","value":"ada@example.com","rating":0.9}]}"#,
            )
            .create_async()
            .await;

        let options = ContactsOptions {
            linkedin_url: PROFILE_URL.into(),
            email_enrichment: Some(true),
            ..Default::default()
        };
        let response = client(server.url()).enrich_contacts(&options).await.unwrap();

        assert_eq!(response.contacts.len(), 1);
        assert_eq!(response.contacts[0].kind, "email");
        assert_eq!(response.contacts[0].rating, Some(0.9));
        mock.assert_async().await;
    }

    #[test]
    fn test_phone_flag_absent_when_unset() {
        let params = ContactsOptions {
            linkedin_url: PROFILE_URL.into(),
            ..Default::default()
        }
        .to_params();

        assert!(params["phoneEnrichment"].is_absent());
    }

    #[tokio::test]
    async fn test_scrape_profile_flags() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/enrich/scrape")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("include_posts".into(), "true".into()),
                Matcher::UrlEncoded("include_education".into(), "false".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"profile":{"name":"Ada"},"posts":[{"text":"hello"}]}"#)
            .create_async()
            .await;

        let options = ScrapeOptions {
            linkedin_url: PROFILE_URL.into(),
            include_posts: Some(true),
            include_education: Some(false),
            ..Default::default()
        };
        let response = client(server.url()).scrape_profile(&options).await.unwrap();

        assert_eq!(response.posts[0].text.as_deref(), Some("hello"));
        assert!(response.education.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/enrich/linkedin")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let err = client(server.url()).get_profile(PROFILE_URL).await.unwrap_err();

        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "request failed with status 404: Not Found");
    }

    #[tokio::test]
    async fn test_post_reactions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/enrich/post-reactions")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("post_url".into(), "https://www.linkedin.com/posts/1".into()),
                Matcher::UrlEncoded("reaction_type".into(), "like".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"reactions":[{"reaction_type":"like","reactor":{"name":"Linus"}}],
                    "total":1,"page":1}"#,
            )
            .create_async()
            .await;

        let options = ReactionsOptions {
            post_url: "https://www.linkedin.com/posts/1".into(),
            reaction_type: Some("like".into()),
            ..Default::default()
        };
        let response = client(server.url()).post_reactions(&options).await.unwrap();

        assert_eq!(response.reactions[0].reactor.name.as_deref(), Some("Linus"));
        mock.assert_async().await;
    }
}
