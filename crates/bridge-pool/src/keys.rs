//! Recognized pool option keys.
//!
//! Key spellings match what the pooling collaborator expects; changing one
//! is a compatibility break with existing runtime configuration.

/// Fully-qualified class name of the data source.
pub const DATA_SOURCE_CLASS_NAME: &str = "dataSourceClassName";
/// JDBC-style connection URL.
pub const JDBC_URL: &str = "jdbcUrl";
/// Username for authentication.
pub const USERNAME: &str = "username";
/// Password for authentication.
pub const PASSWORD: &str = "password";
/// Default auto-commit behavior of pooled connections.
pub const AUTO_COMMIT: &str = "autoCommit";
/// Maximum wait for a connection from the pool, in milliseconds.
pub const CONNECTION_TIMEOUT: &str = "connectionTimeout";
/// Maximum idle time before a connection is retired, in milliseconds.
pub const IDLE_TIMEOUT: &str = "idleTimeout";
/// Maximum lifetime of a pooled connection, in milliseconds.
pub const MAX_LIFETIME: &str = "maxLifetime";
/// Query executed to validate a connection before handout.
pub const CONNECTION_TEST_QUERY: &str = "connectionTestQuery";
/// Minimum number of idle connections to maintain.
pub const MINIMUM_IDLE: &str = "minimumIdle";
/// Maximum size of the pool.
pub const MAXIMUM_POOL_SIZE: &str = "maximumPoolSize";
/// Logical name of the pool.
pub const POOL_NAME: &str = "poolName";
/// Whether internal pool queries run in their own transaction.
pub const ISOLATE_INTERNAL_QUERIES: &str = "isolateInternalQueries";
/// Whether the pool can be suspended and resumed.
pub const ALLOW_POOL_SUSPENSION: &str = "allowPoolSuspension";
/// Whether pooled connections default to read-only mode.
pub const READ_ONLY: &str = "readOnly";
/// Whether management beans are registered for the pool.
pub const REGISTER_MBEANS: &str = "registerMbeans";
/// Default catalog for pooled connections.
pub const CATALOG: &str = "catalog";
/// Statement executed after each new connection is created.
pub const CONNECTION_INIT_SQL: &str = "connectionInitSql";
/// Fully-qualified class name of the driver.
pub const DRIVER_CLASS_NAME: &str = "driverClassName";
/// Default transaction isolation level name.
pub const TRANSACTION_ISOLATION: &str = "transactionIsolation";
/// Maximum wait for connection validation, in milliseconds.
pub const VALIDATION_TIMEOUT: &str = "validationTimeout";
/// Threshold for reporting a leaked connection, in milliseconds.
pub const LEAK_DETECTION_THRESHOLD: &str = "leakDetectionThreshold";

/// Prefix marking a vendor property passed through to the data source.
pub const VENDOR_PREFIX: &str = "dataSource.";
