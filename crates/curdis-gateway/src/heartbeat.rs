//! Heartbeat scheduler
//!
//! Started once per connection when Hello arrives. Sleeps for the interval,
//! then queues a heartbeat, until cancelled or the writer goes away.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::connection::Outbound;
use crate::protocol::GatewayMessage;

/// Spawn the heartbeat task
///
/// The interval is fixed for the life of the task. The task ends when
/// `cancel` fires or when a heartbeat can no longer be queued.
pub fn spawn(interval: Duration, outbound: Outbound, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(run(interval, outbound, cancel))
}

async fn run(interval: Duration, outbound: Outbound, cancel: CancellationToken) {
    tracing::info!(interval_ms = interval.as_millis(), "Heartbeat started");

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!("Heartbeat cancelled");
                break;
            }
            () = tokio::time::sleep(interval) => {}
        }

        // A full queue must not hold off cancellation
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!("Heartbeat cancelled while queuing");
                break;
            }
            sent = outbound.send(GatewayMessage::heartbeat_now()) => {
                if sent.is_err() {
                    tracing::debug!("Heartbeat stopped, writer closed");
                    break;
                }
            }
        }
        tracing::trace!("Heartbeat queued");
    }
}
