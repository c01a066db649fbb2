//! Handler registry
//!
//! Owned by the connection's dispatcher. Command lookup is an exact match on
//! the command name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{CommandHandler, MessageDeleteHandler, MessageHandler};

/// Handlers registered by the application
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    message: Option<Arc<dyn MessageHandler>>,
    message_delete: Option<Arc<dyn MessageDeleteHandler>>,
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the MESSAGE_CREATE handler, replacing any previous one
    pub fn set_message_handler(&mut self, handler: impl MessageHandler) {
        self.message = Some(Arc::new(handler));
    }

    /// Set the MESSAGE_DELETE handler, replacing any previous one
    pub fn set_message_delete_handler(&mut self, handler: impl MessageDeleteHandler) {
        self.message_delete = Some(Arc::new(handler));
    }

    /// Register a command handler
    ///
    /// Names are unique; registering a name again replaces its handler.
    pub fn add_command(&mut self, name: impl Into<String>, handler: impl CommandHandler) {
        let name = name.into();
        if self.commands.insert(name.clone(), Arc::new(handler)).is_some() {
            tracing::debug!(command = %name, "Replaced command handler");
        }
    }

    pub fn message_handler(&self) -> Option<&Arc<dyn MessageHandler>> {
        self.message.as_ref()
    }

    pub fn message_delete_handler(&self) -> Option<&Arc<dyn MessageDeleteHandler>> {
        self.message_delete.as_ref()
    }

    pub fn command(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.commands.get(name)
    }

    /// Names of all registered commands, sorted
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("message", &self.message.is_some())
            .field("message_delete", &self.message_delete.is_some())
            .field("commands", &self.command_names())
            .finish()
    }
}
