use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

// ============================================================================
// Service Configuration
// ============================================================================
//
// Defaults layered under environment variables with figment, extracted once
// at start-up and handed to the services as plain values.
//
// ============================================================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_ORDER_SERVICE_PORT: u16 = 8081;
pub const DEFAULT_TRANSACTION_LOG_PORT: u16 = 8082;
pub const DEFAULT_TRANSACTION_LOG_URL: &str = "http://localhost:8082/transactions";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// Environment provider restricted to `keys`, with `prefix` stripped so that
/// e.g. ORDER_SERVICE_PORT lands on `port`.
fn env_provider(prefix: &'static str, keys: &[&str]) -> Env {
    Env::raw().only(keys).map(move |key| {
        let key = key.as_str().to_ascii_lowercase();
        match key.strip_prefix(prefix) {
            Some(field) => field.to_string().into(),
            None => key.into(),
        }
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderServiceConfig {
    pub host: String,
    pub port: u16,
    pub transaction_log_url: String,
    /// Unset keeps the hand-off call unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_log_timeout_ms: Option<u64>,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_ORDER_SERVICE_PORT,
            transaction_log_url: DEFAULT_TRANSACTION_LOG_URL.to_string(),
            transaction_log_timeout_ms: None,
        }
    }
}

impl OrderServiceConfig {
    pub const ENV_KEYS: &'static [&'static str] = &[
        "ORDER_SERVICE_HOST",
        "ORDER_SERVICE_PORT",
        "TRANSACTION_LOG_URL",
        "TRANSACTION_LOG_TIMEOUT_MS",
    ];

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(env_provider("order_service_", Self::ENV_KEYS))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    pub fn transaction_log_timeout(&self) -> Option<Duration> {
        self.transaction_log_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLogConfig {
    pub host: String,
    pub port: u16,
    /// MIGHT_FAIL=true turns on the 50% failure injection
    #[serde(default, deserialize_with = "exact_true")]
    pub might_fail: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_seed: Option<u64>,
}

impl Default for TransactionLogConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_TRANSACTION_LOG_PORT,
            might_fail: false,
            failure_seed: None,
        }
    }
}

impl TransactionLogConfig {
    pub const ENV_KEYS: &'static [&'static str] = &[
        "TRANSACTION_LOG_HOST",
        "TRANSACTION_LOG_PORT",
        "MIGHT_FAIL",
        "FAILURE_SEED",
    ];

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(env_provider("transaction_log_", Self::ENV_KEYS))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }
}

/// Only the exact string "true" enables the toggle; any other value, of any
/// type, leaves it off.
fn exact_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Toggle {
        Bool(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Toggle::deserialize(deserializer)? {
        Toggle::Bool(value) => value,
        Toggle::Text(text) => text == "true",
        Toggle::Other(_) => false,
    })
}
