//! Interaction callback endpoint

use curdis_core::{InteractionResponse, Snowflake};
use reqwest::Method;

use crate::client::RestClient;
use crate::error::RestError;
use crate::response::RestResponse;

impl RestClient {
    /// Answer an interaction
    ///
    /// Returns the raw response; a non-success status is left for the caller
    /// to judge.
    pub async fn create_interaction_response(
        &self,
        interaction_id: Snowflake,
        token: &str,
        response: &InteractionResponse,
    ) -> Result<RestResponse, RestError> {
        let body = serde_json::to_value(response)?;
        self.request(
            Method::POST,
            &format!("/interactions/{interaction_id}/{token}/callback"),
            Some(&body),
        )
        .await
    }
}
