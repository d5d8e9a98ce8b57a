//! # bridge-events
//!
//! Asynchronous fan-out of broker client lifecycle events to registered
//! subscribers.
//!
//! The underlying streaming client reports connection errors, client
//! exceptions and slow consumers on its own I/O threads. This crate
//! normalizes those callbacks into [`Event`] values and hands one delivery
//! task per registered subscriber to an external [`Scheduler`], without
//! ever blocking the reporting thread.
//!
//! A failure inside one subscriber's handler is logged and contained; it is
//! never visible to sibling subscribers or to the dispatcher's caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bridge_events::{EventDispatcher, SubscriberRegistry, TokioScheduler};
//!
//! let registry = Arc::new(SubscriberRegistry::new());
//! registry.add(my_subscriber);
//!
//! let dispatcher = EventDispatcher::new(registry, TokioScheduler::current());
//!
//! // Wired into the client's error listener callbacks:
//! dispatcher.on_connection_error("nats://localhost:4222", "authorization violation");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dispatcher;
pub mod event;
pub mod registry;
pub mod scheduler;
pub mod subscriber;

pub use dispatcher::EventDispatcher;
pub use event::{Event, EventKind, MessagePayload};
pub use registry::SubscriberRegistry;
pub use scheduler::{DeliveryTask, Scheduler, TokioScheduler};
pub use subscriber::{DeliveryError, Subscriber};
