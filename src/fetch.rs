//! Request sending for the mediaconvert API
//!
//! Two client configurations exist: a JSON client that attaches the session's
//! bearer token to every request, and a blob client for multipart payloads
//! that carries no such interceptor.

use std::collections::HashMap;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::ClientOptions;
use crate::error::{Error, Result};
use crate::session::SessionContext;

/// `Accept` value of the JSON client
pub const ACCEPT_JSON: &str = "application/json";

/// `Accept` value of the blob client
pub const ACCEPT_MULTIPART: &str = "multipart/form-data";

enum Body {
    Json(Vec<u8>),
    Multipart(Form),
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: Url,
    method: Method,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: Option<Body>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: Url, method: Method) -> Self {
        Self {
            client,
            url,
            method,
            headers: HeaderMap::new(),
            query_params: None,
            body: None,
        }
    }

    /// Add a header to the request. Invalid names or values are skipped.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => warn!("Skipping invalid header '{}'", name),
        }
        self
    }

    /// Add bearer token authentication to the request.
    ///
    /// A token that cannot be sent as a header value is an error rather than
    /// being dropped.
    pub fn bearer_auth(mut self, token: &str) -> Result<Self> {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::storage("stored bearer token is not a valid header value"))?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Body::Json(json));
        Ok(self)
    }

    /// Add a multipart body to the request
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(Body::Multipart(form));
        self
    }

    /// The request method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The resolved request URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Headers set on this request, on top of the client defaults
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn build(self) -> RequestBuilder {
        let mut url = self.url;

        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        debug!("{} {}", self.method, url);
        let req = self.client.request(self.method, url).headers(self.headers);

        match self.body {
            Some(Body::Json(json)) => req.body(json),
            Some(Body::Multipart(form)) => req.multipart(form),
            None => req,
        }
    }

    /// Execute the request and parse the response as JSON
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.execute_raw().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute the request and return the raw response
    pub async fn execute_raw(self) -> Result<reqwest::Response> {
        let response = self.build().send().await?;
        Ok(response)
    }
}

/// Turn a non-success response into [`Error::Api`]
pub(crate) async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await?;
    warn!("Request failed with status {}: {}", status, message);
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

/// A configured HTTP client bound to the API origin
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Option<SessionContext>,
}

impl HttpClient {
    /// JSON client: `Accept: application/json`, with the bearer interceptor
    pub fn json(options: &ClientOptions, session: SessionContext) -> Result<Self> {
        Self::build(options, ACCEPT_JSON, Some(session))
    }

    /// Blob client: `Accept: multipart/form-data`.
    ///
    /// No bearer interceptor is wired, so requests sent through it are
    /// unauthenticated even when a token is stored.
    pub fn blob(options: &ClientOptions) -> Result<Self> {
        Self::build(options, ACCEPT_MULTIPART, None)
    }

    fn build(
        options: &ClientOptions,
        accept: &'static str,
        session: Option<SessionContext>,
    ) -> Result<Self> {
        let base = Url::parse(&options.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));

        let client = Client::builder()
            .timeout(options.request_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The API origin, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests get the bearer token attached
    pub fn has_auth_interceptor(&self) -> bool {
        self.session.is_some()
    }

    /// Resolve `path` against the base URL by concatenation
    pub fn url(&self, path: &str) -> Result<Url> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(Url::parse(&url)?)
    }

    /// Start a request, running the bearer interceptor
    pub fn request(&self, method: Method, path: &str) -> Result<FetchBuilder<'_>> {
        let builder = FetchBuilder::new(&self.client, self.url(path)?, method);
        self.intercept(builder)
    }

    fn intercept<'a>(&self, builder: FetchBuilder<'a>) -> Result<FetchBuilder<'a>> {
        let Some(session) = &self.session else {
            return Ok(builder);
        };

        match session.token()? {
            Some(token) => {
                debug!("Attaching bearer token to {}", builder.url());
                builder.bearer_auth(&token)
            }
            None => Ok(builder),
        }
    }

    /// Create a GET request
    pub fn get(&self, path: &str) -> Result<FetchBuilder<'_>> {
        self.request(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(&self, path: &str) -> Result<FetchBuilder<'_>> {
        self.request(Method::POST, path)
    }

    /// Create a PUT request
    pub fn put(&self, path: &str) -> Result<FetchBuilder<'_>> {
        self.request(Method::PUT, path)
    }

    /// Create a PATCH request
    pub fn patch(&self, path: &str) -> Result<FetchBuilder<'_>> {
        self.request(Method::PATCH, path)
    }

    /// Create a DELETE request
    pub fn delete(&self, path: &str) -> Result<FetchBuilder<'_>> {
        self.request(Method::DELETE, path)
    }
}
