//! Channel endpoints

use curdis_core::{Channel, Snowflake};
use reqwest::Method;

use crate::client::RestClient;
use crate::error::RestError;

impl RestClient {
    /// List the channels of a guild
    pub async fn guild_channels(&self, guild_id: Snowflake) -> Result<Vec<Channel>, RestError> {
        self.call(Method::GET, &format!("/guilds/{guild_id}/channels"), None)
            .await
    }
}
