//! reqwest-based [`RequestSender`].
//!
//! Every call is `POST {api_url}/bot{token}/{method}` with the parameter bag as JSON body. The API
//! answers with a JSON envelope for 4xx errors too, so the body is decoded regardless of status;
//! only a body that is not an envelope counts as a transport failure.

use async_trait::async_trait;
use botapi_core::{BotApiError, ParameterBag, RequestSender, ResponseEnvelope, Result};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{HttpConfig, DEFAULT_API_URL};
use crate::mask::mask_token;

/// Longest body excerpt kept in [`HttpSenderError::UnexpectedBody`].
const BODY_PREVIEW_LEN: usize = 200;

/// Transport failures, carried as the source of [`BotApiError::Transport`].
#[derive(Error, Debug)]
pub enum HttpSenderError {
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    #[error("unexpected response (HTTP {status}): {body}")]
    UnexpectedBody { status: u16, body: String },
}

impl HttpSenderError {
    /// Wraps a reqwest error without its URL.
    fn from_reqwest(err: reqwest::Error) -> Self {
        HttpSenderError::Request(err.without_url())
    }
}

/// Sends API calls over HTTPS. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpRequestSender {
    client: Client,
    api_url: String,
    token: String,
}

impl HttpRequestSender {
    /// Sender for the public API server with a default client.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_client(Client::new(), DEFAULT_API_URL, token)
    }

    /// Builds the client from `config` (timeout, API URL) after validating it.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BotApiError::Config(format!("cannot build HTTP client: {}", e)))?;
        Self::with_client(client, config.api_url(), config.bot_token.clone())
    }

    /// Uses an existing client, e.g. one shared with other services.
    pub fn with_client(client: Client, api_url: &str, token: impl Into<String>) -> Result<Self> {
        reqwest::Url::parse(api_url)
            .map_err(|e| BotApiError::Config(format!("invalid API URL {}: {}", api_url, e)))?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full endpoint URL for `method`. Contains the token; do not log it.
    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Posts the bag and decodes the envelope. reqwest errors are stripped of their URL, which
    /// carries the token.
    async fn post(
        &self,
        method: &str,
        params: &ParameterBag,
    ) -> std::result::Result<ResponseEnvelope, HttpSenderError> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(params)
            .send()
            .await
            .map_err(HttpSenderError::from_reqwest)?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(HttpSenderError::from_reqwest)?;

        debug!(
            method = %method,
            status = status.as_u16(),
            body_len = body.len(),
            "response received"
        );

        ResponseEnvelope::from_slice(&body).map_err(|_| {
            let text = String::from_utf8_lossy(&body);
            HttpSenderError::UnexpectedBody {
                status: status.as_u16(),
                body: text.chars().take(BODY_PREVIEW_LEN).collect(),
            }
        })
    }
}

#[async_trait]
impl RequestSender for HttpRequestSender {
    async fn send(&self, method: &str, params: &ParameterBag) -> Result<ResponseEnvelope> {
        debug!(
            method = %method,
            api_url = %self.api_url,
            token = %mask_token(&self.token),
            param_count = params.len(),
            "sending request"
        );

        self.post(method, params).await.map_err(|e| {
            warn!(method = %method, error = %e, "transport failure");
            BotApiError::transport(e)
        })
    }
}

impl std::fmt::Debug for HttpRequestSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequestSender")
            .field("api_url", &self.api_url)
            .field("token", &mask_token(&self.token))
            .finish()
    }
}
