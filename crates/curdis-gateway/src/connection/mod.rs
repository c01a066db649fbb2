//! Gateway connection
//!
//! The read loop, the handshake and the single outbound writer.

mod connection;
mod handshake;
mod writer;

pub use connection::GatewayConnection;
pub use handshake::{identify_frame, send_identify};
pub use writer::Outbound;
