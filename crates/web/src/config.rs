//! Runtime configuration read from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

use chicory_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "CHICORY_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "CHICORY_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Server settings. Site content is fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl SiteConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset variables take defaults,
    /// malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR}={bind_addr:?} is not a socket address"))?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }

    /// Log which settings fell back to defaults. Called once tracing is up.
    pub fn log_defaults(lookup: impl Fn(&str) -> Option<String>) {
        for var in [BIND_ADDR_VAR, LOG_FORMAT_VAR] {
            if lookup(var).is_none() {
                tracing::warn!("{var} not set; using default");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = SiteConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));

        assert!(SiteConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).is_err());
    }
}
