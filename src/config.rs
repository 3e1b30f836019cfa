//! Configuration options for the mediaconvert client

use std::env;
use std::time::Duration;

use log::warn;

/// Default API origin
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default storage key of the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Default path of the media upload endpoint
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";

/// Configuration options for the mediaconvert client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The API origin every request path is resolved against
    pub base_url: String,

    /// The request timeout
    pub request_timeout: Duration,

    /// The storage key holding the bearer token
    pub token_key: String,

    /// The path media uploads are sent to
    pub upload_path: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
        }
    }
}

impl ClientOptions {
    /// Defaults, overridden by `MEDIACONVERT_API_URL` and
    /// `MEDIACONVERT_TIMEOUT_SECS` when they are set.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(url) = env::var("MEDIACONVERT_API_URL") {
            options.base_url = url;
        }

        if let Ok(raw) = env::var("MEDIACONVERT_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => options.request_timeout = Duration::from_secs(secs),
                Err(_) => warn!("Ignoring non-numeric MEDIACONVERT_TIMEOUT_SECS={}", raw),
            }
        }

        options
    }

    /// Set the API origin
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Duration) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the storage key of the bearer token
    pub fn with_token_key(mut self, value: &str) -> Self {
        self.token_key = value.to_string();
        self
    }

    /// Set the upload endpoint path
    pub fn with_upload_path(mut self, value: &str) -> Self {
        self.upload_path = value.to_string();
        self
    }
}
