//
//  profilescout
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The request engine performs every network exchange through the
//! [`HttpTransport`] trait, one request in and one fully-read response out.
//! [`ReqwestTransport`] is the production implementation; tests and callers
//! with special networking needs can plug in their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use thiserror::Error;

/// An HTTP request ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: Method,
    /// Fully-qualified URL including the query string.
    pub url: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Serialized request body, if any.
    pub body: Option<Vec<u8>>,
}

/// A response whose body has been read to text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body decoded as text.
    pub body: String,
}

/// Failure to obtain a response at all.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The connection could not be established (refused, DNS, TLS).
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport's own timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// Any other transport-level failure, including reading the body.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}

/// One HTTP exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and returns the response with its body read.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's `User-Agent` and no overall
    /// request timeout.
    pub fn new() -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()?;
        Ok(Self { http })
    }

    /// Creates a transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Wraps an existing client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
