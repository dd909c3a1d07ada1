//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SENTIGATE_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SENTIGATE_*` overrides on top of
/// defaults, then [`Config::validate`] before wiring components.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Max entries in the result cache. Default: `10_000`.
    pub cache_capacity: usize,

    /// TTL for cached results. Default: one hour.
    pub cache_ttl: Duration,

    /// Requests allowed per client per window. Default: `60`.
    pub rate_quota: u32,

    /// Rate-limit window length. Default: one minute.
    pub rate_window: Duration,

    /// Max clients tracked by the rate limiter. Default: `10_000`.
    pub max_clients: usize,

    /// Max normalized text length in bytes. Default: `1000`.
    pub max_text_len: usize,

    /// Lowercase text during normalization. Default: `false`.
    pub normalize_lowercase: bool,

    /// Opaque model identifier forwarded in results, not interpreted here.
    pub model_name: String,

    /// Classifier sidecar endpoint.
    pub model_url: String,
}

/// Default model identifier when `SENTIGATE_MODEL_NAME` is not set.
pub const DEFAULT_MODEL_NAME: &str = "SamLowe/roberta-base-go_emotions";

/// Default sidecar endpoint when `SENTIGATE_MODEL_URL` is not set.
pub const DEFAULT_MODEL_URL: &str = "http://127.0.0.1:9090/score";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            cache_capacity: 10_000,
            cache_ttl: Duration::from_secs(3600),
            rate_quota: 60,
            rate_window: Duration::from_secs(60),
            max_clients: 10_000,
            max_text_len: 1000,
            normalize_lowercase: false,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_url: DEFAULT_MODEL_URL.to_string(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SENTIGATE_PORT";
    const ENV_BIND_ADDR: &'static str = "SENTIGATE_BIND_ADDR";
    const ENV_CACHE_CAPACITY: &'static str = "SENTIGATE_CACHE_CAPACITY";
    const ENV_CACHE_TTL_SECS: &'static str = "SENTIGATE_CACHE_TTL_SECS";
    const ENV_RATE_QUOTA: &'static str = "SENTIGATE_RATE_QUOTA";
    const ENV_RATE_WINDOW_SECS: &'static str = "SENTIGATE_RATE_WINDOW_SECS";
    const ENV_MAX_CLIENTS: &'static str = "SENTIGATE_MAX_CLIENTS";
    const ENV_MAX_TEXT_LEN: &'static str = "SENTIGATE_MAX_TEXT_LEN";
    const ENV_NORMALIZE_LOWERCASE: &'static str = "SENTIGATE_NORMALIZE_LOWERCASE";
    const ENV_MODEL_NAME: &'static str = "SENTIGATE_MODEL_NAME";
    const ENV_MODEL_URL: &'static str = "SENTIGATE_MODEL_URL";

    /// Loads configuration from environment variables (falling back to
    /// defaults). Malformed numeric overrides fall back silently; only the
    /// port and bind address are strict, since a typo there would bind the
    /// wrong socket.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let cache_capacity =
            Self::parse_usize_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity);
        let cache_ttl = Self::parse_secs_from_env(Self::ENV_CACHE_TTL_SECS, defaults.cache_ttl);
        let rate_quota = Self::parse_u32_from_env(Self::ENV_RATE_QUOTA, defaults.rate_quota);
        let rate_window =
            Self::parse_secs_from_env(Self::ENV_RATE_WINDOW_SECS, defaults.rate_window);
        let max_clients = Self::parse_usize_from_env(Self::ENV_MAX_CLIENTS, defaults.max_clients);
        let max_text_len =
            Self::parse_usize_from_env(Self::ENV_MAX_TEXT_LEN, defaults.max_text_len);
        let normalize_lowercase = Self::parse_bool_from_env(
            Self::ENV_NORMALIZE_LOWERCASE,
            defaults.normalize_lowercase,
        );
        let model_name = Self::parse_string_from_env(Self::ENV_MODEL_NAME, defaults.model_name);
        let model_url = Self::parse_string_from_env(Self::ENV_MODEL_URL, defaults.model_url);

        Ok(Self {
            port,
            bind_addr,
            cache_capacity,
            cache_ttl,
            rate_quota,
            rate_window,
            max_clients,
            max_text_len,
            normalize_lowercase,
            model_name,
            model_url,
        })
    }

    /// Validates basic invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_CACHE_CAPACITY,
            });
        }
        if self.cache_ttl.is_zero() {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_CACHE_TTL_SECS,
            });
        }
        if self.rate_quota == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_RATE_QUOTA,
            });
        }
        if self.rate_window.is_zero() {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_RATE_WINDOW_SECS,
            });
        }
        if self.max_clients == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_MAX_CLIENTS,
            });
        }
        if self.max_text_len == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_MAX_TEXT_LEN,
            });
        }
        if self.model_url.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_MODEL_URL,
            });
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
            .unwrap_or(default)
    }

    fn parse_u32_from_env(var_name: &str, default: u32) -> u32 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_secs_from_env(var_name: &str, default: Duration) -> Duration {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(default)
    }
}
