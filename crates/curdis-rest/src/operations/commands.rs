//! Global application command endpoints

use curdis_core::{Command, CommandType, DomainError};
use reqwest::Method;

use crate::client::RestClient;
use crate::error::RestError;

impl RestClient {
    /// Register a global slash command
    ///
    /// The command is validated locally first and always registered as a
    /// chat-input command.
    pub async fn add_global_command(&self, command: &Command) -> Result<(), RestError> {
        command.validate()?;

        let application_id = self.application_id().await?;
        let mut body = serde_json::to_value(command)?;
        body["type"] = CommandType::ChatInput.as_u8().into();

        self.call_unit(
            Method::POST,
            &format!("/applications/{application_id}/commands"),
            Some(&body),
        )
        .await
    }

    /// List the registered global commands
    pub async fn global_commands(&self) -> Result<Vec<Command>, RestError> {
        let application_id = self.application_id().await?;
        self.call(
            Method::GET,
            &format!("/applications/{application_id}/commands"),
            None,
        )
        .await
    }

    /// Delete a registered global command
    pub async fn delete_global_command(&self, command: &Command) -> Result<(), RestError> {
        let command_id = command.id.ok_or_else(|| {
            DomainError::ValidationError(format!("command {} has no id", command.name))
        })?;

        let application_id = self.application_id().await?;
        self.call_unit(
            Method::DELETE,
            &format!("/applications/{application_id}/commands/{command_id}"),
            None,
        )
        .await
    }
}
