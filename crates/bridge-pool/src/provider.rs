//! Pooled resource provider.

use async_trait::async_trait;

use crate::config::PoolConfig;
use crate::error::ResourceError;

/// The external pooling collaborator.
///
/// The real pool algorithm (sizing, eviction, leak detection, validation)
/// lives behind this trait. The provider only drives construction and
/// acquisition and normalizes failures.
#[async_trait]
pub trait PoolBackend: Sized + Send + Sync {
    /// The resource handle the pool hands out.
    type Handle: Send;

    /// The backend's own error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the pool from a validated configuration.
    async fn create(config: &PoolConfig) -> Result<Self, Self::Error>;

    /// Request one resource handle from the pool.
    ///
    /// Honors whatever acquisition timeout the configuration specified; a
    /// timeout surfaces as an error, never a hang.
    async fn acquire(&self) -> Result<Self::Handle, Self::Error>;
}

/// Owns one pooled-resource backend and mediates acquisition.
///
/// Construction *is* initialization: [`ResourceProvider::initialize`]
/// builds the backend exactly once and returns the provider, so a second
/// initialization of the same provider is unrepresentable.
#[derive(Debug)]
pub struct ResourceProvider<B: PoolBackend> {
    name: String,
    backend: B,
}

impl<B: PoolBackend> ResourceProvider<B> {
    /// Construct the underlying pool from the given configuration.
    pub async fn initialize(
        name: impl Into<String>,
        config: PoolConfig,
    ) -> Result<Self, ResourceError> {
        let name = name.into();

        tracing::info!(
            provider = %name,
            pool = ?config.pool_name,
            max = ?config.maximum_pool_size,
            "initializing connection pool"
        );

        let backend = B::create(&config)
            .await
            .map_err(|e| ResourceError::Initialize {
                provider: name.clone(),
                cause: cause_message(&e),
            })?;

        Ok(Self { name, backend })
    }

    /// Acquire one resource handle from the pool.
    ///
    /// No retry is performed here; retry policy belongs to the caller. On
    /// failure the underlying cause is wrapped with this provider's logical
    /// name.
    pub async fn acquire(&self) -> Result<B::Handle, ResourceError> {
        tracing::trace!(provider = %self.name, "acquiring resource from pool");

        self.backend
            .acquire()
            .await
            .map_err(|e| ResourceError::Acquire {
                provider: self.name.clone(),
                cause: cause_message(&e),
            })
    }

    /// The provider's logical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Prefer the nested cause's message when one exists.
fn cause_message(err: &(dyn std::error::Error + 'static)) -> String {
    match err.source() {
        Some(cause) => cause.to_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    use thiserror::Error;

    #[derive(Debug, Error)]
    enum StubError {
        #[error("connection refused")]
        Refused,
        #[error("acquisition failed")]
        Wrapped(#[source] std::io::Error),
    }

    /// In-memory backend handing out numbered handles.
    #[derive(Debug)]
    struct StubBackend {
        fail_acquire: AtomicBool,
        next_handle: AtomicU64,
    }

    #[async_trait]
    impl PoolBackend for StubBackend {
        type Handle = u64;
        type Error = StubError;

        async fn create(config: &PoolConfig) -> Result<Self, Self::Error> {
            if config.jdbc_url.is_none() {
                return Err(StubError::Refused);
            }
            Ok(Self {
                fail_acquire: AtomicBool::new(false),
                next_handle: AtomicU64::new(1),
            })
        }

        async fn acquire(&self) -> Result<Self::Handle, Self::Error> {
            if self.fail_acquire.load(Ordering::Relaxed) {
                return Err(StubError::Wrapped(std::io::Error::other("pool exhausted")));
            }
            Ok(self.next_handle.fetch_add(1, Ordering::Relaxed))
        }
    }

    fn config_with_url() -> PoolConfig {
        PoolConfig {
            jdbc_url: Some("jdbc:h2:mem:test".to_string()),
            ..PoolConfig::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_and_acquire() {
        let provider = ResourceProvider::<StubBackend>::initialize("ClientConnector", config_with_url())
            .await
            .unwrap();

        assert_eq!(provider.name(), "ClientConnector");
        assert_eq!(provider.acquire().await.unwrap(), 1);
        assert_eq!(provider.acquire().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_initialize_failure_is_wrapped() {
        let err = ResourceProvider::<StubBackend>::initialize("ClientConnector", PoolConfig::new())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("ClientConnector"));
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_acquire_failure_carries_provider_and_cause() {
        let provider = ResourceProvider::<StubBackend>::initialize("ClientConnector", config_with_url())
            .await
            .unwrap();
        provider.backend.fail_acquire.store(true, Ordering::Relaxed);

        let err = provider.acquire().await.unwrap_err();

        // The nested cause's message is preferred over the wrapper's.
        assert_eq!(
            err.to_string(),
            "error in get connection: ClientConnector: pool exhausted"
        );
    }
}
