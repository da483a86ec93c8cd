//! Typed errors for the fallible edges of the view pipeline
//!
//! Filtering, sorting, pagination and selection never fail: missing fields
//! are non-matches, out-of-range pages are empty and stale ids are dropped.
//! Errors only come from parsing caller input and loading configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerview::prelude::*;
//!
//! match SortKey::parse("amount:sideways") {
//!     Err(ViewError::InvalidSort { expression }) => println!("bad sort: {}", expression),
//!     other => println!("{:?}", other),
//! }
//! ```

use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum ViewError {
    /// A filter key or value could not be turned into a constraint
    #[error("Invalid filter '{key}': {message}")]
    InvalidFilter { key: String, message: String },

    /// A sort expression was not `field`, `field:asc` or `field:desc`
    #[error("Invalid sort expression: '{expression}'")]
    InvalidSort { expression: String },

    /// The filter string was not valid JSON
    #[error("Filter is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML configuration could not be parsed
    #[error("Invalid view configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// No view with this name exists in the configuration
    #[error("Unknown view: {name}")]
    UnknownView { name: String },
}

impl ViewError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::InvalidFilter { .. } => "INVALID_FILTER",
            ViewError::InvalidSort { .. } => "INVALID_SORT",
            ViewError::Json(_) => "INVALID_JSON",
            ViewError::Config(_) => "CONFIG_ERROR",
            ViewError::Io(_) => "IO_ERROR",
            ViewError::UnknownView { .. } => "UNKNOWN_VIEW",
        }
    }

    pub(crate) fn invalid_filter(key: &str, message: impl Into<String>) -> Self {
        ViewError::InvalidFilter {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ViewError>;
