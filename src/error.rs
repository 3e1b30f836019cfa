//! Error handling for the mediaconvert client

use std::fmt;
use thiserror::Error;

use crate::forms::ValidationErrors;

/// Unified error type for the mediaconvert client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Field-level form validation failures
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        message: String,
    },

    /// Token storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Page size outside of the selectable set
    #[error("Invalid page size {0}, expected one of 5, 10, 20")]
    InvalidPageSize(usize),

    /// Lookup by id failed
    #[error("Not found: {0}")]
    NotFound(String),

    /// A player was created without any playlist entries
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// An upload was requested with no staged files
    #[error("No files staged for upload")]
    NothingToUpload,

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new storage error
    pub fn storage<T: fmt::Display>(msg: T) -> Self {
        Error::Storage(msg.to_string())
    }

    /// Create a new not-found error
    pub fn not_found<T: fmt::Display>(msg: T) -> Self {
        Error::NotFound(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Whether this is a recoverable validation failure.
    ///
    /// Every other kind is left for the caller to handle.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Validation details, if this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
