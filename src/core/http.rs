//! Buffered HTTP GET access for the template pipeline.
//!
//! The catalog builder and the assembler only ever need "GET a URL and give me
//! the whole body as text", so that is the entire [`HttpClient`] surface.
//!
//! # Public API
//! - [`HttpClient`]: the GET-as-text seam used by the pipeline
//! - [`ReqwestClient`]: production client backed by `reqwest`
//! - [`MemoryClient`]: in-memory client serving canned responses, used by tests

use crate::core::error::{Result, ShowcaseError};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

/// GitHub rejects API requests without a user agent.
pub const USER_AGENT: &str = concat!("cli-showcase/", env!("CARGO_PKG_VERSION"));

/// Issue a GET request and buffer the full response body as text.
///
/// Implementations must report transport failures as
/// [`ShowcaseError::FetchFailed`] and non-2xx responses as
/// [`ShowcaseError::UnexpectedStatus`].
pub trait HttpClient {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// `reqwest` backed client shared by all requests of one invocation
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client; `timeout` bounds every request when set
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }
}

impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");

        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| ShowcaseError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} returned {status}");
            return Err(ShowcaseError::unexpected_status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ShowcaseError::fetch_failed(url, e))
    }
}

/// Canned response for [`MemoryClient`]
#[derive(Debug, Clone, PartialEq)]
pub enum MemoryResponse {
    Body(String),
    Status(u16),
}

/// Client answering from a fixed URL -> response map.
///
/// Unknown URLs answer with HTTP 404. Every requested URL is recorded so
/// callers can check what was (or was not) fetched.
#[derive(Debug, Default)]
pub struct MemoryClient {
    responses: HashMap<String, MemoryResponse>,
    requests: Mutex<Vec<String>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .insert(url.into(), MemoryResponse::Body(body.into()));
        self
    }

    /// Answer `url` with a bare HTTP status
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses
            .insert(url.into(), MemoryResponse::Status(status));
        self
    }

    /// URLs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl HttpClient for MemoryClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(MemoryResponse::Body(body)) => Ok(body.clone()),
            Some(MemoryResponse::Status(status)) if (200..300).contains(status) => {
                Ok(String::new())
            }
            Some(MemoryResponse::Status(status)) => {
                Err(ShowcaseError::unexpected_status(url, *status))
            }
            None => Err(ShowcaseError::unexpected_status(url, 404)),
        }
    }
}
