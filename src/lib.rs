//! mediaconvert client library
//!
//! Client-side logic of the mediaconvert media manager: login and signup
//! form validation, upload staging, the media dashboard table, player state,
//! and an HTTP layer that attaches the stored bearer token.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod forms;
pub mod player;
pub mod routes;
pub mod session;
pub mod upload;

use std::sync::Arc;

use crate::auth::Auth;
use crate::config::ClientOptions;
use crate::dashboard::MediaTable;
use crate::error::Result;
use crate::fetch::HttpClient;
use crate::player::PlayerController;
use crate::session::{SessionContext, TokenStorage};
use crate::upload::Uploader;

/// The main entry point for the mediaconvert client
#[derive(Debug, Clone)]
pub struct MediaConvert {
    /// Client options
    pub options: ClientOptions,
    /// Bearer token store shared by every client
    pub session: SessionContext,
    /// JSON client with the bearer interceptor
    pub http: HttpClient,
    /// Multipart client, no interceptor
    pub blob_http: HttpClient,
}

impl MediaConvert {
    /// Create a client with default options and in-memory token storage
    ///
    /// # Example
    ///
    /// ```
    /// use mediaconvert::MediaConvert;
    ///
    /// let client = MediaConvert::new().unwrap();
    /// assert_eq!(client.http.base_url(), "http://localhost:3001");
    /// ```
    pub fn new() -> Result<Self> {
        Self::new_with_options(ClientOptions::default(), SessionContext::in_memory())
    }

    /// Create a client over a caller-provided token store
    pub fn with_storage(options: ClientOptions, storage: Arc<dyn TokenStorage>) -> Result<Self> {
        let session = SessionContext::with_key(storage, &options.token_key);
        Self::new_with_options(options, session)
    }

    /// Create a client with custom options and session
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use mediaconvert::{MediaConvert, config::ClientOptions, session::SessionContext};
    ///
    /// let options = ClientOptions::default().with_request_timeout(Duration::from_secs(5));
    /// let client = MediaConvert::new_with_options(options, SessionContext::in_memory()).unwrap();
    /// ```
    pub fn new_with_options(options: ClientOptions, session: SessionContext) -> Result<Self> {
        let http = HttpClient::json(&options, session.clone())?;
        let blob_http = HttpClient::blob(&options)?;

        Ok(Self {
            options,
            session,
            http,
            blob_http,
        })
    }

    /// Login, signup and current-user calls
    pub fn auth(&self) -> Auth {
        Auth::new(self.http.clone(), self.session.clone())
    }

    /// Multipart uploads of staged files
    pub fn uploader(&self) -> Uploader {
        Uploader::new(self.blob_http.clone(), &self.options.upload_path)
    }

    /// The dashboard table over the sample records
    pub fn dashboard(&self) -> MediaTable {
        MediaTable::default()
    }

    /// The player over the sample playlist
    pub fn player(&self) -> PlayerController {
        PlayerController::default()
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, Result};
    pub use crate::forms::{submit, Form, LoginForm, SignupForm, SubmitHandler};
    pub use crate::session::SessionContext;
    pub use crate::upload::{FileStager, StagedFile};
    pub use crate::MediaConvert;
}
