//! REST client
//!
//! Wraps a `reqwest::Client` carrying the bot token, the API base URL and a
//! fixed overall timeout. No retries, no rate-limit handling.

use std::fmt;
use std::sync::Arc;

use curdis_common::DiscordConfig;
use curdis_core::Snowflake;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RestError;
use crate::response::RestResponse;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("DiscordBot (curdis, ", env!("CARGO_PKG_VERSION"), ")");

/// Authenticated REST client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    token: Arc<str>,
    application_id: Option<Snowflake>,
}

impl RestClient {
    /// Create a client from configuration without contacting the API
    pub fn new(config: &DiscordConfig) -> Result<Self, RestError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::from(config.api_url.trim_end_matches('/')),
            token: Arc::from(config.token.as_str()),
            application_id: None,
        })
    }

    /// Create a client and verify the token
    ///
    /// Checks the token against `GET /gateway/bot`, then resolves and caches
    /// the application id used by the command endpoints.
    pub async fn authenticate(config: &DiscordConfig) -> Result<Self, RestError> {
        let mut client = Self::new(config)?;

        let gateway = client.gateway_bot().await?;
        tracing::debug!(url = %gateway.url, shards = ?gateway.shards, "Bot token accepted");

        let application_id = client.fetch_application_id().await?;
        client.application_id = Some(application_id);

        tracing::info!(application_id = %application_id, "Authenticated with REST API");
        Ok(client)
    }

    /// Use a known application id instead of fetching it
    #[must_use]
    pub fn with_application_id(mut self, application_id: Snowflake) -> Self {
        self.application_id = Some(application_id);
        self
    }

    /// Application id resolved during authentication, if any
    pub fn cached_application_id(&self) -> Option<Snowflake> {
        self.application_id
    }

    /// Base URL all paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform an authenticated call and return its status and body
    ///
    /// The status is not judged here; callers decide what counts as failure.
    /// A body, when given, is sent as JSON.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RestResponse, RestError> {
        let url = self.url(path)?;

        tracing::debug!(method = %method, path = %path, "REST request");

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bot {}", self.token));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::trace!(method = %method, path = %path, status = status.as_u16(), "REST response");

        Ok(RestResponse { status, body })
    }

    /// Call an endpoint and decode a JSON result, failing on status >= 300
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, RestError> {
        self.request(method, path, body)
            .await?
            .error_for_status()?
            .json()
    }

    /// Call an endpoint whose body is irrelevant, failing on status >= 300
    pub(crate) async fn call_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), RestError> {
        self.request(method, path, body).await?.error_for_status()?;
        Ok(())
    }

    fn url(&self, path: &str) -> Result<Url, RestError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| RestError::InvalidUrl(format!("{raw}: {e}")))
    }
}

// Keep the token out of logs
impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("application_id", &self.application_id)
            .finish_non_exhaustive()
    }
}
