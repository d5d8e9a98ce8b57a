//! # bridge-pool
//!
//! Validated pool configuration and pooled resource acquisition for
//! connectors.
//!
//! The host runtime supplies connector options as an untyped
//! [`OptionMap`](bridge_options::OptionMap); this crate turns that bag into
//! a strongly-typed [`PoolConfig`] and manages acquisition of pooled
//! resources through a [`PoolBackend`] collaborator.
//!
//! The pool algorithm itself (eviction, leak detection, health checks) is
//! not implemented here; it lives behind the [`PoolBackend`] seam.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bridge_options::{OptionMap, OptionValue};
//! use bridge_pool::{ConfigBuilder, ResourceProvider};
//!
//! let mut options = OptionMap::new();
//! options.insert("jdbcUrl", OptionValue::from("jdbc:h2:mem:test"));
//! options.insert("maximumPoolSize", OptionValue::from(10));
//!
//! let config = ConfigBuilder::build(&mut options)?;
//! let provider = ResourceProvider::<MyBackend>::initialize("ClientConnector", config).await?;
//!
//! let handle = provider.acquire().await?;
//! // Use handle...
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod config;
pub mod error;
pub mod keys;
pub mod provider;

pub use builder::ConfigBuilder;
pub use config::PoolConfig;
pub use error::{ConfigError, ResourceError};
pub use provider::{PoolBackend, ResourceProvider};
