//! Thread-safe subscriber registry.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::subscriber::Subscriber;

/// Insertion-ordered collection of subscriber handles.
///
/// Appends never reject and never block beyond the short write-lock hold.
/// Readers get an owned snapshot, so dispatch can iterate while other
/// threads keep registering; there is no concurrent-modification hazard and
/// no lock is held across subscriber handlers.
///
/// There is no removal: subscribers live as long as the registry.
#[derive(Default)]
pub struct SubscriberRegistry {
    subscribers: RwLock<Vec<Arc<dyn Subscriber>>>,
}

impl SubscriberRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber.
    pub fn add(&self, subscriber: Arc<dyn Subscriber>) {
        self.subscribers.write().push(subscriber);
    }

    /// Point-in-time copy of the registered subscribers, in insertion order.
    ///
    /// A snapshot contains every subscriber whose `add` returned before this
    /// call, exactly once. Subscribers added concurrently with the call may
    /// or may not appear.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Subscriber>> {
        self.subscribers.read().clone()
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Whether no subscriber is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::event::{Event, MessagePayload};
    use crate::subscriber::DeliveryError;

    use parking_lot::Mutex;

    /// Records its tag into a shared log when invoked.
    struct Tagged {
        tag: usize,
        log: Arc<Mutex<Vec<usize>>>,
    }

    impl Tagged {
        fn new(tag: usize, log: &Arc<Mutex<Vec<usize>>>) -> Arc<Self> {
            Arc::new(Self {
                tag,
                log: log.clone(),
            })
        }
    }

    impl Subscriber for Tagged {
        fn on_error(&self, _: &Event, _: &MessagePayload) -> Result<(), DeliveryError> {
            self.log.lock().push(self.tag);
            Ok(())
        }
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = SubscriberRegistry::new();
        registry.add(Tagged::new(0, &log));
        registry.add(Tagged::new(1, &log));
        registry.add(Tagged::new(2, &log));

        let event = Event::connection_error("boom");
        let payload = MessagePayload::empty();
        for subscriber in registry.snapshot() {
            subscriber.on_error(&event, &payload).unwrap();
        }

        assert_eq!(*log.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_identical_handles_are_not_merged() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = SubscriberRegistry::new();
        let subscriber = Tagged::new(7, &log);
        registry.add(subscriber.clone());
        registry.add(subscriber);

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_later_adds() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = SubscriberRegistry::new();
        registry.add(Tagged::new(0, &log));

        let snapshot = registry.snapshot();
        registry.add(Tagged::new(1, &log));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);
    }
}
