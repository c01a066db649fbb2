//! User entity - a platform account as seen by the bot

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// User account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            global_name: None,
            bot: false,
        }
    }

    /// Name to show for this user (global display name, falling back to username)
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// Mention markup for this user
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// Guild member wrapper carried by guild interactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
}

impl Member {
    /// Name to show for this member inside its guild
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or_else(|| self.user.display_name())
    }
}
