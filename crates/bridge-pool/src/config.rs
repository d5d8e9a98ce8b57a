//! Validated pool configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use bridge_options::OptionValue;

/// Strongly-typed pool configuration consumed by the pooling collaborator.
///
/// Every field is either `None` (the collaborator's default applies) or
/// holds a value parsed from the matching runtime option. Built once per
/// connector by [`ConfigBuilder`](crate::builder::ConfigBuilder) and
/// immutable after handoff to the provider.
#[derive(Clone, Default, PartialEq)]
pub struct PoolConfig {
    /// Fully-qualified class name of the data source.
    pub data_source_class_name: Option<String>,

    /// JDBC-style connection URL.
    pub jdbc_url: Option<String>,

    /// Username for authentication.
    pub username: Option<String>,

    /// Password for authentication.
    pub password: Option<String>,

    /// Default auto-commit behavior of pooled connections.
    pub auto_commit: Option<bool>,

    /// Maximum wait for a connection from the pool, in milliseconds.
    pub connection_timeout_ms: Option<u64>,

    /// Maximum idle time before a connection is retired, in milliseconds.
    pub idle_timeout_ms: Option<u64>,

    /// Maximum lifetime of a pooled connection, in milliseconds.
    pub max_lifetime_ms: Option<u64>,

    /// Query executed to validate a connection before handout.
    pub connection_test_query: Option<String>,

    /// Minimum number of idle connections to maintain.
    pub minimum_idle: Option<u32>,

    /// Maximum size of the pool.
    pub maximum_pool_size: Option<u32>,

    /// Logical name of the pool.
    pub pool_name: Option<String>,

    /// Whether internal pool queries run in their own transaction.
    pub isolate_internal_queries: Option<bool>,

    /// Whether the pool can be suspended and resumed.
    pub allow_pool_suspension: Option<bool>,

    /// Whether pooled connections default to read-only mode.
    pub read_only: Option<bool>,

    /// Whether management beans are registered for the pool.
    pub register_mbeans: Option<bool>,

    /// Default catalog for pooled connections.
    pub catalog: Option<String>,

    /// Statement executed after each new connection is created.
    pub connection_init_sql: Option<String>,

    /// Fully-qualified class name of the driver.
    pub driver_class_name: Option<String>,

    /// Default transaction isolation level name.
    pub transaction_isolation: Option<String>,

    /// Maximum wait for connection validation, in milliseconds.
    pub validation_timeout_ms: Option<u64>,

    /// Threshold for reporting a leaked connection, in milliseconds.
    pub leak_detection_threshold_ms: Option<u64>,

    /// Vendor properties passed through to the data source, keyed by the
    /// name after the `dataSource.` prefix, value type preserved.
    pub data_source_properties: BTreeMap<String, OptionValue>,
}

impl PoolConfig {
    /// Create a configuration with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection acquisition timeout as a [`Duration`], if configured.
    #[must_use]
    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout_ms.map(Duration::from_millis)
    }

    /// Idle timeout as a [`Duration`], if configured.
    #[must_use]
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_ms.map(Duration::from_millis)
    }

    /// Maximum connection lifetime as a [`Duration`], if configured.
    #[must_use]
    pub fn max_lifetime(&self) -> Option<Duration> {
        self.max_lifetime_ms.map(Duration::from_millis)
    }

    /// Validation timeout as a [`Duration`], if configured.
    #[must_use]
    pub fn validation_timeout(&self) -> Option<Duration> {
        self.validation_timeout_ms.map(Duration::from_millis)
    }
}

// Manual Debug so the password never ends up in logs.
impl fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolConfig")
            .field("data_source_class_name", &self.data_source_class_name)
            .field("jdbc_url", &self.jdbc_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("auto_commit", &self.auto_commit)
            .field("connection_timeout_ms", &self.connection_timeout_ms)
            .field("idle_timeout_ms", &self.idle_timeout_ms)
            .field("max_lifetime_ms", &self.max_lifetime_ms)
            .field("connection_test_query", &self.connection_test_query)
            .field("minimum_idle", &self.minimum_idle)
            .field("maximum_pool_size", &self.maximum_pool_size)
            .field("pool_name", &self.pool_name)
            .field("isolate_internal_queries", &self.isolate_internal_queries)
            .field("allow_pool_suspension", &self.allow_pool_suspension)
            .field("read_only", &self.read_only)
            .field("register_mbeans", &self.register_mbeans)
            .field("catalog", &self.catalog)
            .field("connection_init_sql", &self.connection_init_sql)
            .field("driver_class_name", &self.driver_class_name)
            .field("transaction_isolation", &self.transaction_isolation)
            .field("validation_timeout_ms", &self.validation_timeout_ms)
            .field(
                "leak_detection_threshold_ms",
                &self.leak_detection_threshold_ms,
            )
            .field("data_source_properties", &self.data_source_properties)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_unset() {
        let config = PoolConfig::new();
        assert_eq!(config.jdbc_url, None);
        assert_eq!(config.maximum_pool_size, None);
        assert!(config.data_source_properties.is_empty());
    }

    #[test]
    fn test_timeout_accessors() {
        let config = PoolConfig {
            connection_timeout_ms: Some(30_000),
            ..PoolConfig::default()
        };
        assert_eq!(config.connection_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.idle_timeout(), None);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = PoolConfig {
            username: Some("sa".to_string()),
            password: Some("secret".to_string()),
            ..PoolConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("sa"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("***"));
    }
}
