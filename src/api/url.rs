//
//  profilescout
//  api/url.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request URL construction.

use url::Url;

use super::common::ApiError;
use super::params::Params;

/// Joins `base` and `path` and appends every present parameter.
///
/// List values are written as repeated keys in element order. Absent
/// values are skipped, and when nothing is left to append the result is
/// exactly `base + path` with no trailing `?`.
///
/// # Errors
///
/// Returns a Generic [`ApiError`] with status 0 when `base + path` does not
/// parse as an absolute URL.
///
/// # Example
///
/// ```rust
/// use profilescout::api::params::{ParamValue, Params};
/// use profilescout::api::url::build_url;
///
/// let mut params = Params::new();
/// params.insert("companies".into(), ParamValue::List(vec!["acme".into(), "globex".into()]));
///
/// let url = build_url("https://api.example.com", "/api/search", Some(&params)).unwrap();
/// assert_eq!(url, "https://api.example.com/api/search?companies=acme&companies=globex");
/// ```
pub fn build_url(base: &str, path: &str, params: Option<&Params>) -> Result<String, ApiError> {
    let raw = format!("{}{}", base, path);
    let mut url = Url::parse(&raw)
        .map_err(|e| ApiError::generic(0, format!("invalid request url '{}': {}", raw, e)))?;

    let pairs: Vec<(&str, String)> = params
        .into_iter()
        .flatten()
        .flat_map(|(key, value)| {
            value
                .to_query_values()
                .into_iter()
                .map(move |v| (key.as_str(), v))
        })
        .collect();

    if pairs.is_empty() {
        return Ok(raw);
    }

    {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
    }

    Ok(url.into())
}

/// Percent-encodes one path segment, such as a job id.
///
/// ```rust
/// use profilescout::api::url::path_segment;
///
/// assert_eq!(path_segment("job 1/2"), "job%201%2F2");
/// ```
pub fn path_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::params::ParamValue;

    const BASE: &str = "https://api.profilescout.dev";

    #[test]
    fn test_no_params_has_no_question_mark() {
        assert_eq!(
            build_url(BASE, "/api/credits", None).unwrap(),
            "https://api.profilescout.dev/api/credits"
        );
        assert_eq!(
            build_url(BASE, "/api/credits", Some(&Params::new())).unwrap(),
            "https://api.profilescout.dev/api/credits"
        );
    }

    #[test]
    fn test_only_absent_params_has_no_question_mark() {
        let mut params = Params::new();
        params.insert("search_id".into(), ParamValue::Absent);

        let url = build_url(BASE, "/api/search", Some(&params)).unwrap();

        assert_eq!(url, "https://api.profilescout.dev/api/search");
    }

    #[test]
    fn test_array_values_repeat_in_order() {
        let mut params = Params::new();
        params.insert(
            "schools".into(),
            ParamValue::List(vec!["mit".into(), "stanford".into(), "eth".into()]),
        );

        let url = build_url(BASE, "/api/search", Some(&params)).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let schools: Vec<String> = parsed
            .query_pairs()
            .filter(|(k, _)| k == "schools")
            .map(|(_, v)| v.into_owned())
            .collect();

        assert_eq!(schools, vec!["mit", "stanford", "eth"]);
    }

    #[test]
    fn test_scalar_coercion_and_absent_omission() {
        let mut params = Params::new();
        params.insert("query".into(), ParamValue::from("senior rust engineer"));
        params.insert("limit".into(), ParamValue::Int(30));
        params.insert("advanced_filtering".into(), ParamValue::Bool(true));
        params.insert("search_id".into(), ParamValue::Absent);

        let url = build_url(BASE, "/api/search", Some(&params)).unwrap();

        assert!(url.contains("limit=30"));
        assert!(url.contains("advanced_filtering=true"));
        assert!(url.contains("query=senior+rust+engineer"));
        assert!(!url.contains("search_id"));
        assert!(!url.contains("null"));
    }

    #[test]
    fn test_path_segment_leaves_plain_ids_alone() {
        assert_eq!(path_segment("3f2a-77c1"), "3f2a-77c1");
        assert_eq!(path_segment("a?b#c"), "a%3Fb%23c");
    }

    #[test]
    fn test_invalid_base_is_status_zero() {
        let err = build_url("not a url", "/x", None).unwrap_err();
        assert_eq!(err.status(), 0);
    }
}
