//! Error types for the list manager.

use thiserror::Error;

/// Fatal failures of a list-management run.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to fetch source list {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to read filtering status: {0}")]
    Status(String),

    #[error("Failed to submit {url} ({completed} of {total} entries completed): {reason}")]
    Submission {
        url: String,
        reason: String,
        completed: usize,
        total: usize,
    },

    #[error("Appliance rejected request: {0}")]
    Rejected(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
