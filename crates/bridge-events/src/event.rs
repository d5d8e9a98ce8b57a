//! Normalized client lifecycle events.

/// The kind of a normalized client notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The server reported an error on an established connection.
    ConnectionError,
    /// The client library raised an exception.
    ClientException,
    /// The server flagged a consumer as too slow.
    SlowConsumer,
}

/// A normalized client notification, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    message: String,
}

impl Event {
    /// Create an event of the given kind.
    #[must_use]
    pub fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create a connection-error event.
    #[must_use]
    pub fn connection_error(message: impl Into<String>) -> Self {
        Self::new(EventKind::ConnectionError, message)
    }

    /// Create a client-exception event.
    #[must_use]
    pub fn client_exception(message: impl Into<String>) -> Self {
        Self::new(EventKind::ClientException, message)
    }

    /// Create a slow-consumer event.
    #[must_use]
    pub fn slow_consumer(message: impl Into<String>) -> Self {
        Self::new(EventKind::SlowConsumer, message)
    }

    /// The event's kind tag.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Placeholder message payload delivered alongside an event.
///
/// Error notifications carry no structured body; handlers receive an empty
/// payload so the delivery signature stays uniform with regular message
/// handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePayload {
    body: Vec<u8>,
}

impl MessagePayload {
    /// An empty payload.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The raw payload bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_tag_the_kind() {
        assert_eq!(
            Event::connection_error("boom").kind(),
            EventKind::ConnectionError
        );
        assert_eq!(
            Event::client_exception("boom").kind(),
            EventKind::ClientException
        );
        assert_eq!(Event::slow_consumer("boom").kind(), EventKind::SlowConsumer);
    }

    #[test]
    fn test_payload_is_empty_by_default() {
        assert!(MessagePayload::empty().body().is_empty());
    }
}
