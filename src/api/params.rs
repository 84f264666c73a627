//
//  profilescout
//  api/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query Parameter Values and Key Normalization
//!
//! Endpoint options are first collected into a [`Params`] map keyed in the
//! client (camelCase) convention, then passed through [`normalize_params`]
//! which renames the known option names to the snake_case form the API
//! expects on the wire. Keys the table does not know about are forwarded
//! untouched, so callers can pass parameters this crate has no typed field for.
//!
//! # Example
//!
//! ```rust
//! use profilescout::api::params::{normalize_params, ParamValue, Params};
//!
//! let mut params = Params::new();
//! params.insert("searchId".to_string(), ParamValue::from("abc"));
//! params.insert("customFlag".to_string(), ParamValue::from(true));
//!
//! let wire = normalize_params(&params);
//! assert!(wire.contains_key("search_id"));
//! assert!(wire.contains_key("customFlag"));
//! ```

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

/// A single query parameter value.
///
/// `Absent` stands in for an option the caller left unset. It survives
/// normalization and is dropped by the URL builder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain string value.
    Str(String),
    /// Integer value, serialized in decimal form.
    Int(i64),
    /// Floating point value, serialized via its `Display` form.
    Float(f64),
    /// Boolean value, serialized as `true`/`false`.
    Bool(bool),
    /// Repeated parameter, one `key=value` pair per element in order.
    List(Vec<String>),
    /// Unset value; never serialized.
    Absent,
}

impl ParamValue {
    /// Returns `true` for [`ParamValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Renders the value as the strings that go on the wire.
    ///
    /// Scalars produce one string, lists one per element, absent values none.
    pub fn to_query_values(&self) -> Vec<String> {
        match self {
            Self::Str(s) => vec![s.clone()],
            Self::Int(n) => vec![n.to_string()],
            Self::Float(f) => vec![f.to_string()],
            Self::Bool(b) => vec![b.to_string()],
            Self::List(items) => items.clone(),
            Self::Absent => Vec::new(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// Query parameter map.
///
/// A `BTreeMap` keeps serialized query strings stable between runs,
/// which makes request matching in tests predictable.
pub type Params = BTreeMap<String, ParamValue>;

/// Client-side option names and the wire names they map to.
static WIRE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("searchId", "search_id"),
        ("advancedFiltering", "advanced_filtering"),
        ("linkedinUrl", "linkedin_url"),
        ("emailEnrichment", "email_enrichment"),
        ("phoneEnrichment", "phone_enrichment"),
        ("includePosts", "include_posts"),
        ("includeExperience", "include_experience"),
        ("includeEducation", "include_education"),
        ("postUrl", "post_url"),
        ("reactionType", "reaction_type"),
    ])
});

/// Returns the wire name for a client-side option key, if the key is known.
pub fn wire_name(key: &str) -> Option<&'static str> {
    WIRE_NAMES.get(key).copied()
}

/// Renames known option keys to their wire form.
///
/// Returns a new map; `params` is left as it was. Unknown keys and every
/// value (absent ones included) are carried over as-is.
pub fn normalize_params(params: &Params) -> Params {
    params
        .iter()
        .map(|(key, value)| {
            let key = wire_name(key).map(str::to_string).unwrap_or_else(|| key.clone());
            (key, value.clone())
        })
        .collect()
}
