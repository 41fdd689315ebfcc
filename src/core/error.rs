//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ShowcaseError`] which covers every failure mode of the
//! showcase binary. It uses `thiserror` for ergonomic error definitions and
//! includes named constructors for the errors built from structured context.
//!
//! # Public API
//! - [`ShowcaseError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ShowcaseError>`
//!
//! # Error Categories
//! - **Fetch**: transport failures and non-success HTTP responses
//! - **Parse**: malformed tree listings and invalid source patterns
//! - **Selection**: empty or unknown template selections, prompt I/O
//! - **Write**: persisting the generated `.gitignore`

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for cli-showcase
#[derive(Error, Debug)]
pub enum ShowcaseError {
    // Fetch errors
    #[error("Request to {url} failed: {source}")]
    FetchFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Could not create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    // Parse errors
    #[error("Failed to parse tree listing from {url}: {source}")]
    TreeParseFailed {
        url: String,
        source: serde_json::Error,
    },

    #[error("Tree listing from {url} has no tree entries")]
    MissingTree { url: String },

    #[error("Invalid template pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // Selection errors
    #[error("You must choose at least one template.")]
    EmptySelection,

    #[error("Unknown template: {name}. Use --list to see available templates.")]
    UnknownTemplate { name: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    // Write errors
    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Terminal widgets
    #[error("Invalid progress template: {0}")]
    ProgressStyle(#[from] indicatif::style::TemplateError),

    #[error("Cannot render banner: {message}")]
    Banner { message: String },

    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using ShowcaseError
pub type Result<T> = std::result::Result<T, ShowcaseError>;

impl ShowcaseError {
    /// Create a fetch error from any transport failure
    pub fn fetch_failed<E>(url: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::FetchFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create an error for a non-success HTTP status
    pub fn unexpected_status(url: impl Into<String>, status: u16) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a tree parse error
    pub fn tree_parse_failed(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::TreeParseFailed {
            url: url.into(),
            source,
        }
    }

    /// Create a missing tree error
    pub fn missing_tree(url: impl Into<String>) -> Self {
        Self::MissingTree { url: url.into() }
    }

    /// Create an unknown template error
    pub fn unknown_template(name: impl Into<String>) -> Self {
        Self::UnknownTemplate { name: name.into() }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a banner rendering error
    pub fn banner(message: impl Into<String>) -> Self {
        Self::Banner {
            message: message.into(),
        }
    }

    /// True for network failures and non-success responses
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. } | Self::UnexpectedStatus { .. } | Self::HttpClient(_)
        )
    }

    /// True for tree listings that cannot be decoded
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::TreeParseFailed { .. } | Self::MissingTree { .. } | Self::InvalidPattern(_)
        )
    }
}
