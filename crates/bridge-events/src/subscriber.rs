//! Subscriber handles and delivery errors.

use thiserror::Error;

use crate::event::{Event, MessagePayload};

/// An error raised inside a subscriber's handler during delivery.
///
/// Caught and logged at the delivery boundary; never propagated to the
/// dispatcher's caller and never visible to sibling subscribers.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DeliveryError(String);

impl DeliveryError {
    /// Create a delivery error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A registered consumer of dispatched events.
///
/// Handles are held as `Arc<dyn Subscriber>` with identity semantics: two
/// registrations are two subscribers, even of the same value. Handlers run
/// on whatever thread the scheduler chooses and must therefore be
/// `Send + Sync`.
pub trait Subscriber: Send + Sync {
    /// Handle one dispatched event.
    ///
    /// The payload is an empty placeholder for error-kind events.
    fn on_error(&self, event: &Event, message: &MessagePayload) -> Result<(), DeliveryError>;
}
