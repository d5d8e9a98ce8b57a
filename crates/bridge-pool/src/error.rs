//! Configuration and resource error types.

use thiserror::Error;

/// Errors raised while mapping runtime options into a pool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A recognized option's value could not be parsed to its expected type.
    #[error("invalid value for pool option {key}: {value}")]
    InvalidValue {
        /// The offending option key.
        key: String,
        /// The raw value as supplied by the runtime.
        value: String,
    },
}

/// Errors raised while creating the pool or acquiring a resource from it.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The underlying pool could not be constructed.
    #[error("error initializing pool: {provider}: {cause}")]
    Initialize {
        /// Logical name of the provider.
        provider: String,
        /// Message from the underlying cause.
        cause: String,
    },

    /// The underlying pool failed to supply a resource handle.
    #[error("error in get connection: {provider}: {cause}")]
    Acquire {
        /// Logical name of the provider.
        provider: String,
        /// Message from the underlying cause.
        cause: String,
    },
}
