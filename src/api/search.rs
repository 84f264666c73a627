//
//  profilescout
//  api/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Profile search types and endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! use profilescout::api::{ScoutClient, SearchOptions};
//!
//! # async fn example() -> Result<(), profilescout::api::ApiError> {
//! let client = ScoutClient::new(None)?;
//! let options = SearchOptions {
//!     companies: vec!["https://www.linkedin.com/company/acme".into()],
//!     ..Default::default()
//! };
//!
//! let mut results = client.search_all("staff rust engineer", &options).with_max_results(100);
//! while let Some(result) = results.next().await? {
//!     println!("{}", result.profile.name.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use super::client::ScoutClient;
use super::common::{ApiError, Page, PageRequest, Paginator};
use super::params::{ParamValue, Params};

/// A person's public profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub linkedin_url: Option<String>,
    pub profile_picture_url: Option<String>,
    pub websites: Vec<String>,
    pub skills: Vec<String>,
    pub connections_count: Option<u64>,
    pub followers_count: Option<u64>,
}

/// One position held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_linkedin_url: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
}

/// One school attended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school_name: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A post published by a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub posted_at: Option<String>,
    pub reactions_count: Option<u64>,
    pub comments_count: Option<u64>,
}

/// A matched profile with its history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

/// One page of search results.
///
/// `search_id` identifies the result set and must be sent back to fetch
/// later pages of the same search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: Option<u64>,
    pub search_id: Option<String>,
}

/// Optional search parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Results per request.
    pub limit: Option<u32>,
    /// Results to skip. Managed automatically by [`ScoutClient::search_all`].
    pub offset: Option<u64>,
    /// Continuation token from a previous response.
    pub search_id: Option<String>,
    /// Ask the server to apply stricter relevance filtering.
    pub advanced_filtering: Option<bool>,
    /// Restrict matches to these company URLs.
    pub companies: Vec<String>,
    /// Restrict matches to these school URLs.
    pub schools: Vec<String>,
    /// Additional parameters forwarded as-is. These win over the typed fields
    /// in [`ScoutClient::search`]. [`ScoutClient::search_all`] drops any
    /// [`CURSOR_KEYS`] from here and drives those itself.
    pub extra: Params,
}

/// Parameter names that carry the page cursor.
pub const CURSOR_KEYS: &[&str] = &["limit", "offset", "searchId", "search_id"];

impl SearchOptions {
    /// Collects the options into client-convention parameters.
    pub fn to_params(&self, query: &str) -> Params {
        let mut params = Params::new();
        params.insert("query".into(), query.into());
        params.insert("limit".into(), self.limit.into());
        params.insert(
            "offset".into(),
            self.offset.map(|o| i64::try_from(o).unwrap_or(i64::MAX)).into(),
        );
        params.insert("searchId".into(), self.search_id.clone().into());
        params.insert("advancedFiltering".into(), self.advanced_filtering.into());
        params.insert("companies".into(), list(&self.companies));
        params.insert("schools".into(), list(&self.schools));
        params.extend(self.extra.clone());
        params
    }
}

fn list(items: &[String]) -> ParamValue {
    if items.is_empty() {
        ParamValue::Absent
    } else {
        ParamValue::List(items.to_vec())
    }
}

impl ScoutClient {
    /// Runs one search request.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse, ApiError> {
        self.get("/api/search", &options.to_params(query)).await
    }

    /// Lazily iterates over every result of a search.
    ///
    /// Pages are requested with `options.limit` (or the client's page size)
    /// and the continuation token from the previous page. `options.offset`
    /// and any cursor keys in `options.extra` are ignored; a `search_id` in
    /// `options` is used for the first page.
    pub fn search_all(&self, query: &str, options: &SearchOptions) -> Paginator<SearchResult> {
        let client = self.clone();
        let query = query.to_string();
        let base = options.clone();
        let limit = options.limit.unwrap_or_else(|| self.page_size());

        Paginator::new(limit, move |request: PageRequest| {
            let client = client.clone();
            let query = query.clone();
            let mut page_options = base.clone();
            for key in CURSOR_KEYS {
                page_options.extra.remove(*key);
            }
            page_options.limit = Some(request.limit);
            page_options.offset = Some(request.offset);
            page_options.search_id = request.continuation.or_else(|| base.search_id.clone());

            async move {
                let response = client.search(&query, &page_options).await?;
                Ok::<_, ApiError>(Page {
                    items: response.results,
                    total: response.total,
                    continuation: response.search_id,
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(url: String) -> ScoutClient {
        ScoutClient::builder()
            .api_key("sk-test")
            .base_url(url)
            .build()
            .unwrap()
    }

    fn results(count: usize, start: usize) -> Vec<serde_json::Value> {
        (start..start + count)
            .map(|i| json!({"profile": {"name": format!("Person {}", i)}}))
            .collect()
    }

    #[test]
    fn test_to_params_uses_client_names() {
        let options = SearchOptions {
            limit: Some(10),
            search_id: Some("s-1".into()),
            advanced_filtering: Some(true),
            companies: vec!["acme".into()],
            ..Default::default()
        };

        let params = options.to_params("cto");

        assert_eq!(params["query"], ParamValue::Str("cto".into()));
        assert_eq!(params["searchId"], ParamValue::Str("s-1".into()));
        assert_eq!(params["advancedFiltering"], ParamValue::Bool(true));
        assert_eq!(params["companies"], ParamValue::List(vec!["acme".into()]));
        assert!(params["schools"].is_absent());
        assert!(params["offset"].is_absent());
    }

    #[test]
    fn test_extra_params_override() {
        let mut extra = Params::new();
        extra.insert("limit".into(), ParamValue::Int(5));
        extra.insert("location".into(), "Berlin".into());
        let options = SearchOptions {
            limit: Some(10),
            extra,
            ..Default::default()
        };

        let params = options.to_params("q");

        assert_eq!(params["limit"], ParamValue::Int(5));
        assert_eq!(params["location"], ParamValue::Str("Berlin".into()));
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: SearchResponse =
            serde_json::from_value(json!({"results": [{"profile": {"name": "Ada", "extra": 1}}]}))
                .unwrap();

        assert_eq!(response.results[0].profile.name.as_deref(), Some("Ada"));
        assert!(response.results[0].experience.is_empty());
        assert_eq!(response.total, None);
    }

    #[tokio::test]
    async fn test_search_sends_wire_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "rust engineer".into()),
                Matcher::UrlEncoded("advanced_filtering".into(), "true".into()),
                Matcher::Regex("schools=mit&schools=eth".into()),
            ]))
            .with_status(200)
            .with_body(json!({"results": results(2, 0), "total": 2, "search_id": "s-9"}).to_string())
            .create_async()
            .await;

        let options = SearchOptions {
            advanced_filtering: Some(true),
            schools: vec!["mit".into(), "eth".into()],
            ..Default::default()
        };
        let response = client(server.url()).search("rust engineer", &options).await.unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.search_id.as_deref(), Some("s-9"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_all_follows_continuation() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "0".into()),
                Matcher::UrlEncoded("limit".into(), "30".into()),
            ]))
            .with_status(200)
            .with_body(json!({"results": results(30, 0), "total": 31, "search_id": "s-1"}).to_string())
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "30".into()),
                Matcher::UrlEncoded("search_id".into(), "s-1".into()),
            ]))
            .with_status(200)
            .with_body(json!({"results": results(1, 30), "total": 31, "search_id": "s-1"}).to_string())
            .expect(1)
            .create_async()
            .await;

        let all = client(server.url())
            .search_all("founder", &SearchOptions::default())
            .collect()
            .await
            .unwrap();

        assert_eq!(all.len(), 31);
        assert_eq!(all[30].profile.name.as_deref(), Some("Person 30"));
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_all_ignores_cursor_keys_in_extra() {
        let mut server = mockito::Server::new_async().await;
        let mut mocks = Vec::new();
        for (offset, search_id) in [(0, "seed"), (2, "s-1"), (4, "s-1")] {
            let mock = server
                .mock("GET", "/api/search")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("offset".into(), offset.to_string()),
                    Matcher::UrlEncoded("limit".into(), "2".into()),
                    Matcher::UrlEncoded("search_id".into(), search_id.into()),
                    Matcher::UrlEncoded("location".into(), "Berlin".into()),
                ]))
                .with_status(200)
                .with_body(
                    json!({"results": results(2, offset), "total": 6, "search_id": "s-1"})
                        .to_string(),
                )
                .expect(1)
                .create_async()
                .await;
            mocks.push(mock);
        }

        let mut extra = Params::new();
        extra.insert("offset".into(), ParamValue::Int(0));
        extra.insert("limit".into(), ParamValue::Int(50));
        extra.insert("searchId".into(), "stale".into());
        extra.insert("location".into(), "Berlin".into());
        let options = SearchOptions {
            limit: Some(2),
            search_id: Some("seed".into()),
            extra,
            ..Default::default()
        };

        let all = client(server.url())
            .search_all("founder", &options)
            .collect()
            .await
            .unwrap();

        let names: Vec<_> = all
            .iter()
            .map(|r| r.profile.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            (0..6).map(|i| format!("Person {}", i)).collect::<Vec<_>>()
        );
        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_search_all_is_lazy() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"results": results(30, 0), "total": 500}).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut pages = client(server.url()).search_all("x", &SearchOptions::default());
        for _ in 0..3 {
            pages.next().await.unwrap();
        }
        drop(pages);

        mock.assert_async().await;
    }
}
