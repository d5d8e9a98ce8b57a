//! Delivery tasks and the external scheduler seam.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::event::{Event, MessagePayload};
use crate::subscriber::Subscriber;

/// One unit of delivery work: a subscriber, the event for it, and the
/// placeholder payload.
///
/// Failure isolation lives here rather than in any particular scheduler:
/// [`DeliveryTask::run`] logs a handler error and swallows it, so a failing
/// subscriber can never affect its siblings no matter which scheduler runs
/// the task.
pub struct DeliveryTask {
    subscriber: Arc<dyn Subscriber>,
    event: Event,
    message: MessagePayload,
}

impl DeliveryTask {
    pub(crate) fn new(subscriber: Arc<dyn Subscriber>, event: Event, message: MessagePayload) -> Self {
        Self {
            subscriber,
            event,
            message,
        }
    }

    /// The event this task delivers.
    #[must_use]
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// The payload this task delivers.
    #[must_use]
    pub fn message(&self) -> &MessagePayload {
        &self.message
    }

    /// Invoke the subscriber's handler, containing any failure.
    pub fn run(self) {
        if let Err(err) = self.subscriber.on_error(&self.event, &self.message) {
            tracing::error!(
                kind = ?self.event.kind(),
                error = %err,
                "subscriber failed to handle event"
            );
        }
    }
}

/// The external scheduler collaborator.
///
/// Submission must be non-blocking from the caller's point of view; the
/// scheduler decides when and on which thread the task actually runs.
/// Nothing about the task's completion is observed.
pub trait Scheduler: Send + Sync {
    /// Hand one delivery task to the scheduler, fire-and-forget.
    fn submit(&self, task: DeliveryTask);
}

impl<T: Scheduler + ?Sized> Scheduler for Arc<T> {
    fn submit(&self, task: DeliveryTask) {
        (**self).submit(task);
    }
}

/// Scheduler backed by a tokio runtime.
///
/// Each task becomes one spawned tokio task, so submission returns
/// immediately and a panicking handler is contained by the task boundary.
#[derive(Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Create a scheduler over the given runtime handle.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create a scheduler over the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, the same as
    /// [`Handle::current`].
    #[must_use]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn submit(&self, task: DeliveryTask) {
        self.handle.spawn(async move { task.run() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::subscriber::DeliveryError;

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl Subscriber for Counting {
        fn on_error(&self, _: &Event, _: &MessagePayload) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DeliveryError::new("handler rejected event"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_run_invokes_handler() {
        let subscriber = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let task = DeliveryTask::new(
            subscriber.clone(),
            Event::connection_error("boom"),
            MessagePayload::empty(),
        );
        task.run();
        assert_eq!(subscriber.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_contains_handler_failure() {
        let subscriber = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let task = DeliveryTask::new(
            subscriber.clone(),
            Event::connection_error("boom"),
            MessagePayload::empty(),
        );
        // Does not panic and does not propagate the error.
        task.run();
        assert_eq!(subscriber.calls.load(Ordering::SeqCst), 1);
    }
}
