//! Configuration loading — environment variables only.
//!
//! Every option has a default, so an empty environment is valid. Values are
//! read once at startup; anything malformed fails before the first cycle.

use std::num::ParseIntError;
use std::time::Duration;

use sensorsim_domain::node::NodeId;

/// Identifier of the simulated node.
pub const NODE_ID_VAR: &str = "NODE_ID";
/// Seconds between sampling cycles.
pub const SAMPLE_INTERVAL_VAR: &str = "SAMPLE_INTERVAL";
/// Diagnostic log filter (`RUST_LOG` syntax). `RUST_LOG` takes precedence.
pub const LOG_VAR: &str = "SENSORSIM_LOG";

const DEFAULT_SAMPLE_INTERVAL_SECS: u64 = 10;
const DEFAULT_LOG_FILTER: &str = "sensorsimd=info,sensorsim=info";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Identifier stamped on every record.
    pub node_id: NodeId,
    /// Wait between the end of one cycle and the start of the next.
    pub sample_interval: Duration,
    /// Filter directive for diagnostics written to stderr.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_id: NodeId::default(),
            sample_interval: Duration::from_secs(DEFAULT_SAMPLE_INTERVAL_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `SAMPLE_INTERVAL` is not a positive integer.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = lookup(NODE_ID_VAR) {
            config.node_id = NodeId::from(val);
        }
        if let Some(val) = lookup(SAMPLE_INTERVAL_VAR) {
            config.sample_interval = parse_interval(&val)?;
        }
        if let Some(val) = lookup(LOG_VAR) {
            config.log_filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            config.log_filter = val;
        }

        Ok(config)
    }
}

fn parse_interval(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidInterval {
            value: raw.to_string(),
            source,
        })?;
    if secs == 0 {
        return Err(ConfigError::ZeroInterval);
    }
    Ok(Duration::from_secs(secs))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `SAMPLE_INTERVAL` is not an integer.
    #[error("invalid SAMPLE_INTERVAL {value:?}")]
    InvalidInterval {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// `SAMPLE_INTERVAL` is zero.
    #[error("SAMPLE_INTERVAL must be at least one second")]
    ZeroInterval,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.node_id.as_str(), "rpi-unknown");
        assert_eq!(config.sample_interval, Duration::from_secs(10));
        assert_eq!(config.log_filter, "sensorsimd=info,sensorsim=info");
    }

    #[test]
    fn should_read_node_id_and_interval() {
        let config = load(&[("NODE_ID", "rpi-01"), ("SAMPLE_INTERVAL", "5")]).unwrap();
        assert_eq!(config.node_id.as_str(), "rpi-01");
        assert_eq!(config.sample_interval, Duration::from_secs(5));
    }

    #[test]
    fn should_tolerate_surrounding_whitespace_in_interval() {
        let config = load(&[("SAMPLE_INTERVAL", " 30\n")]).unwrap();
        assert_eq!(config.sample_interval, Duration::from_secs(30));
    }

    #[test]
    fn should_reject_non_numeric_interval() {
        let err = load(&[("SAMPLE_INTERVAL", "ten")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval { .. }));
        assert_eq!(err.to_string(), "invalid SAMPLE_INTERVAL \"ten\"");
    }

    #[test]
    fn should_reject_negative_interval() {
        let err = load(&[("SAMPLE_INTERVAL", "-5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval { .. }));
    }

    #[test]
    fn should_reject_fractional_interval() {
        let err = load(&[("SAMPLE_INTERVAL", "2.5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval { .. }));
    }

    #[test]
    fn should_reject_zero_interval() {
        let err = load(&[("SAMPLE_INTERVAL", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
    }

    #[test]
    fn should_keep_empty_node_id_as_is() {
        let config = load(&[("NODE_ID", "")]).unwrap();
        assert_eq!(config.node_id.as_str(), "");

        let config = load(&[("NODE_ID", "  ")]).unwrap();
        assert_eq!(config.node_id.as_str(), "  ");
    }

    #[test]
    fn should_prefer_rust_log_over_sensorsim_log() {
        let config = load(&[("SENSORSIM_LOG", "debug"), ("RUST_LOG", "trace")]).unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn should_use_sensorsim_log_when_rust_log_unset() {
        let config = load(&[("SENSORSIM_LOG", "debug")]).unwrap();
        assert_eq!(config.log_filter, "debug");
    }
}
