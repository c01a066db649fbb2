//! Token check and application lookup

use curdis_core::Snowflake;
use reqwest::Method;
use serde::Deserialize;

use crate::client::RestClient;
use crate::error::RestError;

/// Connection details returned by `GET /gateway/bot`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayBotInfo {
    pub url: String,
    #[serde(default)]
    pub shards: Option<u32>,
}

#[derive(Deserialize)]
struct ApplicationInfo {
    id: Snowflake,
}

impl RestClient {
    /// Fetch the recommended gateway URL; fails if the token is rejected
    pub async fn gateway_bot(&self) -> Result<GatewayBotInfo, RestError> {
        self.call(Method::GET, "/gateway/bot", None).await
    }

    /// Id of the application owning the bot
    ///
    /// Returns the id cached by [`RestClient::authenticate`] when present,
    /// otherwise asks the API.
    pub async fn application_id(&self) -> Result<Snowflake, RestError> {
        match self.cached_application_id() {
            Some(id) => Ok(id),
            None => self.fetch_application_id().await,
        }
    }

    pub(crate) async fn fetch_application_id(&self) -> Result<Snowflake, RestError> {
        let info: ApplicationInfo = self
            .call(Method::GET, "/oauth2/applications/@me", None)
            .await?;
        Ok(info.id)
    }
}
