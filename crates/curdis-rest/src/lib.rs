//! # curdis-rest
//!
//! Authenticated one-shot calls against the platform's REST API.
//!
//! [`RestClient::request`] is the raw capability: method, path and optional
//! JSON body in, status and body out. The typed operations (messages,
//! channels, application commands, interaction callbacks) are built on it.

mod client;
mod error;
mod operations;
mod response;

pub use client::{RestClient, USER_AGENT};
pub use error::{RestError, RestResult};
pub use operations::GatewayBotInfo;
pub use response::RestResponse;

pub use reqwest::{Method, StatusCode};
