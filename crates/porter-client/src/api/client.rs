//! HTTP API client for the Porter server
//!
//! [`ApiClient::execute`] is the shared calling convention: it resolves an
//! [`Endpoint`] against the base URL, attaches the bearer token, encodes the
//! body and turns the response into either a typed value or an [`ApiError`].
//! The per-operation methods below are thin typed wrappers around it.

use crate::api::endpoints::{self, Endpoint};
use crate::api::path::{NoParams, PathParams};
use crate::api::types::{
    Context, Credentials, ErrorResponse, NoBody, UpdateUserRequest, User, UserPath,
};
use crate::config::Config;
use crate::error::{ApiError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Longest raw error body echoed back in an error message
const MAX_ERROR_BODY_CHARS: usize = 512;

/// API client for the Porter server
///
/// Cloning is cheap and clones share the connection pool and the session
/// cookie set by [`ApiClient::log_in_user`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut config = Config::new();
        config.set_server_url(base_url);
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Create from `PORTER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request for `endpoint`.
    ///
    /// `token` overrides the token from the client's config for this call.
    /// Exactly one HTTP request is sent; nothing is retried or cached.
    #[instrument(skip_all, fields(endpoint = endpoint.name))]
    pub async fn execute<B, P, R>(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
        body: Option<&B>,
        params: Option<&P>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        P: PathParams + ?Sized,
        R: DeserializeOwned,
    {
        let path = match params {
            Some(params) => endpoint.resolve_path(params)?,
            None => endpoint.resolve_path(&NoParams)?,
        };
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.request(endpoint.method.into(), &url);

        if let Some(token) = token.or(self.token.as_deref()) {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(ApiError::Encode)?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        debug!(method = %endpoint.method, %path, "Sending request");

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(status, &bytes);
            warn!(
                method = %endpoint.method,
                %path,
                status = status.as_u16(),
                %message,
                "Request rejected"
            );
            return Err(ApiError::status(status, message));
        }

        debug!(
            method = %endpoint.method,
            %path,
            status = status.as_u16(),
            "Request succeeded"
        );
        decode(&path, &bytes)
    }

    /// `GET /api/auth/check`
    pub async fn check_auth(&self, token: Option<&str>) -> Result<()> {
        self.execute::<NoBody, NoParams, IgnoredAny>(&endpoints::CHECK_AUTH, token, None, None)
            .await
            .map(drop)
    }

    /// Like [`check_auth`](Self::check_auth) but maps an auth rejection to
    /// `Ok(false)`. Other failures are still errors.
    pub async fn is_authenticated(&self, token: Option<&str>) -> Result<bool> {
        match self.check_auth(token).await {
            Ok(()) => Ok(true),
            Err(err) if err.is_unauthorized() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// `POST /api/users`
    pub async fn register_user(&self, token: Option<&str>, body: &Credentials) -> Result<()> {
        self.execute::<_, NoParams, IgnoredAny>(
            &endpoints::REGISTER_USER,
            token,
            Some(body),
            None,
        )
        .await
        .map(drop)
    }

    /// `POST /api/login`. The session cookie from the response is kept for
    /// later calls on this client.
    pub async fn log_in_user(&self, token: Option<&str>, body: &Credentials) -> Result<()> {
        self.execute::<_, NoParams, IgnoredAny>(&endpoints::LOG_IN_USER, token, Some(body), None)
            .await
            .map(drop)
    }

    /// `POST /api/logout`
    pub async fn log_out_user(&self, token: Option<&str>) -> Result<()> {
        self.execute::<NoBody, NoParams, IgnoredAny>(&endpoints::LOG_OUT_USER, token, None, None)
            .await
            .map(drop)
    }

    /// `GET /api/users/{id}`
    pub async fn get_user(&self, token: Option<&str>, params: &UserPath) -> Result<User> {
        self.execute::<NoBody, _, _>(&endpoints::GET_USER, token, None, Some(params))
            .await
    }

    /// `PUT /api/users/{id}`
    pub async fn update_user(
        &self,
        token: Option<&str>,
        params: &UserPath,
        body: &UpdateUserRequest,
    ) -> Result<()> {
        self.execute::<_, _, IgnoredAny>(
            &endpoints::UPDATE_USER,
            token,
            Some(body),
            Some(params),
        )
        .await
        .map(drop)
    }

    /// `GET /api/users/{id}/contexts`
    pub async fn get_contexts(
        &self,
        token: Option<&str>,
        params: &UserPath,
    ) -> Result<Vec<Context>> {
        self.execute::<NoBody, _, _>(&endpoints::GET_CONTEXTS, token, None, Some(params))
            .await
    }
}

/// Parse a success body. An empty body reads as JSON `null`.
fn decode<R: DeserializeOwned>(path: &str, bytes: &[u8]) -> Result<R> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };

    serde_json::from_slice(bytes).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Best human-readable reason for a rejected request
fn error_message(status: StatusCode, bytes: &[u8]) -> String {
    if let Some(message) = serde_json::from_slice::<ErrorResponse>(bytes)
        .ok()
        .and_then(|err| err.message())
    {
        return message;
    }

    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if !text.is_empty() {
        return text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
