//! Normalization and fan-out of raw client notifications.

use std::sync::Arc;

use crate::event::{Event, MessagePayload};
use crate::registry::SubscriberRegistry;
use crate::scheduler::{DeliveryTask, Scheduler};

/// Translates raw client callbacks into [`Event`]s and fans them out.
///
/// Invoked concurrently from the client's I/O threads; every notification
/// method is non-blocking. Per notification, the dispatcher takes one
/// registry snapshot and submits one delivery task per subscriber in it —
/// O(subscriber count) bookkeeping, nothing awaited.
pub struct EventDispatcher<S: Scheduler> {
    registry: Arc<SubscriberRegistry>,
    scheduler: S,
}

impl<S: Scheduler> EventDispatcher<S> {
    /// Create a dispatcher over the given registry and scheduler.
    pub fn new(registry: Arc<SubscriberRegistry>, scheduler: S) -> Self {
        Self {
            registry,
            scheduler,
        }
    }

    /// The registry this dispatcher snapshots on each notification.
    #[must_use]
    pub fn registry(&self) -> &Arc<SubscriberRegistry> {
        &self.registry
    }

    /// The server reported an error on an established connection.
    pub fn on_connection_error(&self, server_url: &str, error: &str) {
        let message = format!("Error in server {server_url}. {error}");
        tracing::error!(server = %server_url, "{message}");
        self.dispatch(Event::connection_error(message));
    }

    /// The client library raised an exception for a connection.
    ///
    /// The event message prefers the nested cause's message when one exists,
    /// falling back to the exception's own.
    pub fn on_client_exception(&self, server_url: &str, error: &(dyn std::error::Error + 'static)) {
        tracing::error!(server = %server_url, error = %error, "exception in server");
        let message = match error.source() {
            Some(cause) => cause.to_string(),
            None => error.to_string(),
        };
        self.dispatch(Event::client_exception(message));
    }

    /// The server flagged a consumer as too slow.
    ///
    /// Diagnostic-only: logged, never forwarded to subscribers.
    pub fn on_slow_consumer(&self, server_url: &str, consumer: &str) {
        tracing::error!(
            server = %server_url,
            consumer = %consumer,
            "slow consumer detected"
        );
    }

    /// Fan the event out to every currently-registered subscriber.
    ///
    /// Fire-and-forget: submissions are not awaited and no per-subscriber
    /// result is aggregated.
    pub fn dispatch(&self, event: Event) {
        for subscriber in self.registry.snapshot() {
            self.scheduler.submit(DeliveryTask::new(
                subscriber,
                event.clone(),
                MessagePayload::empty(),
            ));
        }
    }
}
