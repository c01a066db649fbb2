//! Event handlers
//!
//! Application-facing handler traits, the registry they live in, and the
//! dispatcher that routes decoded events to them.

mod context;
mod dispatcher;
mod registry;
mod responder;
mod traits;

pub use context::Context;
pub use dispatcher::EventDispatcher;
pub use registry::HandlerRegistry;
pub use responder::{InteractionResponder, RestResponder, FALLBACK_RESPONSE};
pub use traits::{CommandHandler, MessageDeleteHandler, MessageHandler};
