//! Configuration management for the ticket service.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::validation::{DEFAULT_MAX_TICKETS_PER_PURCHASE, PurchasePolicy};
use serde::{Deserialize, Serialize};
use std::env;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,ticket_service_core=debug";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Purchase limits
    pub purchase: PurchaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Purchase limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseConfig {
    /// Maximum tickets per transaction
    pub max_tickets_per_purchase: u32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive (trace, debug, info, warn, error)
    pub filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// A ticket limit of zero would reject every purchase, so it is treated
    /// like an unparsable value.
    #[must_use]
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            purchase: PurchaseConfig {
                max_tickets_per_purchase: get("MAX_TICKETS_PER_PURCHASE")
                    .and_then(|s| s.trim().parse().ok())
                    .filter(|&max: &u32| max > 0)
                    .unwrap_or(DEFAULT_MAX_TICKETS_PER_PURCHASE),
            },
            logging: LoggingConfig {
                filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
        }
    }

    /// Purchase policy described by this configuration
    #[must_use]
    pub const fn policy(&self) -> PurchasePolicy {
        PurchasePolicy::new(self.purchase.max_tickets_per_purchase)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            purchase: PurchaseConfig {
                max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
            },
            logging: LoggingConfig {
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_rules() {
        assert_eq!(Config::default().policy(), PurchasePolicy::default());
        assert_eq!(Config::default().policy().max_tickets_per_purchase, 20);
    }

    #[test]
    fn test_config_policy_uses_limit() {
        let config = Config {
            purchase: PurchaseConfig {
                max_tickets_per_purchase: 8,
            },
            ..Config::default()
        };
        assert_eq!(config.policy(), PurchasePolicy::new(8));
    }

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn test_from_lookup_override() {
        let config = Config::from_lookup(lookup(&[
            ("MAX_TICKETS_PER_PURCHASE", "40"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.purchase.max_tickets_per_purchase, 40);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_from_lookup_unparsable_limit_uses_default() {
        let config = Config::from_lookup(lookup(&[("MAX_TICKETS_PER_PURCHASE", "abc")]));
        assert_eq!(config.purchase.max_tickets_per_purchase, 20);
    }

    #[test]
    fn test_from_lookup_zero_limit_uses_default() {
        let config = Config::from_lookup(lookup(&[("MAX_TICKETS_PER_PURCHASE", "0")]));
        assert_eq!(config.policy(), PurchasePolicy::default());
    }

    #[test]
    fn test_from_lookup_negative_limit_uses_default() {
        let config = Config::from_lookup(lookup(&[("MAX_TICKETS_PER_PURCHASE", "-5")]));
        assert_eq!(config.purchase.max_tickets_per_purchase, 20);
    }

    #[test]
    fn test_from_lookup_missing_keys_use_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }
}
