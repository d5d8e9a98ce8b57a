//! Mapping of runtime options into a validated pool configuration.

use bridge_options::{OptionMap, OptionValue};

use crate::config::PoolConfig;
use crate::error::ConfigError;
use crate::keys;

/// Builds a [`PoolConfig`] from a runtime [`OptionMap`].
///
/// Recognized keys are parsed per their expected type and *consumed*
/// (removed) from the map; absent keys leave the corresponding field unset.
/// After the recognized pass, remaining keys carrying the `dataSource.`
/// prefix become vendor properties with their value type preserved. Other
/// leftovers are ignored, but logged so configuration typos are diagnosable.
///
/// Build exactly once per map instance: the removal of recognized keys means
/// a second pass over the same map sees nothing to consume.
pub struct ConfigBuilder;

impl ConfigBuilder {
    /// Build a validated pool configuration from the given options.
    ///
    /// The first option whose value cannot be parsed to its expected type
    /// fails the whole build; no partial configuration is returned.
    pub fn build(options: &mut OptionMap) -> Result<PoolConfig, ConfigError> {
        let mut config = PoolConfig::new();

        config.data_source_class_name = take_string(options, keys::DATA_SOURCE_CLASS_NAME);
        config.jdbc_url = take_string(options, keys::JDBC_URL);
        config.username = take_string(options, keys::USERNAME);
        config.password = take_string(options, keys::PASSWORD);
        config.auto_commit = take_bool(options, keys::AUTO_COMMIT)?;
        config.connection_timeout_ms = take_u64(options, keys::CONNECTION_TIMEOUT)?;
        config.idle_timeout_ms = take_u64(options, keys::IDLE_TIMEOUT)?;
        config.max_lifetime_ms = take_u64(options, keys::MAX_LIFETIME)?;
        config.connection_test_query = take_string(options, keys::CONNECTION_TEST_QUERY);
        config.minimum_idle = take_u32(options, keys::MINIMUM_IDLE)?;
        config.maximum_pool_size = take_u32(options, keys::MAXIMUM_POOL_SIZE)?;
        config.pool_name = take_string(options, keys::POOL_NAME);
        config.isolate_internal_queries = take_bool(options, keys::ISOLATE_INTERNAL_QUERIES)?;
        config.allow_pool_suspension = take_bool(options, keys::ALLOW_POOL_SUSPENSION)?;
        config.read_only = take_bool(options, keys::READ_ONLY)?;
        config.register_mbeans = take_bool(options, keys::REGISTER_MBEANS)?;
        config.catalog = take_string(options, keys::CATALOG);
        config.connection_init_sql = take_string(options, keys::CONNECTION_INIT_SQL);
        config.driver_class_name = take_string(options, keys::DRIVER_CLASS_NAME);
        config.transaction_isolation = take_string(options, keys::TRANSACTION_ISOLATION);
        config.validation_timeout_ms = take_u64(options, keys::VALIDATION_TIMEOUT)?;
        config.leak_detection_threshold_ms = take_u64(options, keys::LEAK_DETECTION_THRESHOLD)?;

        collect_vendor_properties(options, &mut config);

        Ok(config)
    }
}

/// Consume a string-typed option; any value shape converts via its string form.
fn take_string(options: &mut OptionMap, key: &str) -> Option<String> {
    options.remove(key).map(|value| value.string_value())
}

/// Consume a boolean option; only `true`/`false` (case-insensitive) parse.
fn take_bool(options: &mut OptionMap, key: &str) -> Result<Option<bool>, ConfigError> {
    match options.remove(key) {
        None => Ok(None),
        Some(value) => {
            let raw = value.string_value();
            match raw.to_ascii_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(invalid(key, raw)),
            }
        }
    }
}

/// Consume a 32-bit numeric option, parsed from the value's string form.
fn take_u32(options: &mut OptionMap, key: &str) -> Result<Option<u32>, ConfigError> {
    match options.remove(key) {
        None => Ok(None),
        Some(value) => {
            let raw = value.string_value();
            raw.parse().map(Some).map_err(|_| invalid(key, raw))
        }
    }
}

/// Consume a 64-bit numeric option, parsed from the value's string form.
fn take_u64(options: &mut OptionMap, key: &str) -> Result<Option<u64>, ConfigError> {
    match options.remove(key) {
        None => Ok(None),
        Some(value) => {
            let raw = value.string_value();
            raw.parse().map(Some).map_err(|_| invalid(key, raw))
        }
    }
}

fn invalid(key: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    }
}

/// Copy `dataSource.`-prefixed leftovers into the vendor property map.
///
/// Vendor keys stay in the option map; only recognized keys are consumed.
/// Iteration order is the map's sorted key order, so emission is
/// deterministic.
fn collect_vendor_properties(options: &OptionMap, config: &mut PoolConfig) {
    for (key, value) in options {
        if let Some(suffix) = key.strip_prefix(keys::VENDOR_PREFIX) {
            config
                .data_source_properties
                .insert(suffix.to_string(), value.clone());
        } else {
            tracing::debug!(
                key = %key,
                value = %value,
                "ignoring unrecognized pool option"
            );
        }
    }
}
