//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>);
//!   session cookies are marked secure when it is `https://`
//! - `CATALOG_LATENCY_MS` - Simulated catalog fetch delay (default: 1000)
//! - `CATALOG_CACHE_TTL_SECS` - Catalog cache lifetime, 0 disables (default: 0)
//! - `CART_LATENCY_MS` - Simulated add-to-cart delay (default: 500)
//! - `ADDED_RESET_MS` - How long the "added" state shows (default: 2000)
//! - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Simulated latency settings
    pub latency: LatencyConfig,
    /// How long fetched catalogs are cached (zero disables the cache)
    pub catalog_cache_ttl: Duration,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Artificial delays that stand in for network round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Delay before the catalog responds
    pub catalog: Duration,
    /// Delay before an add-to-cart is applied
    pub cart_add: Duration,
    /// How long the "added to cart" confirmation stays before resetting
    pub added_reset: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            catalog: Duration::from_millis(1000),
            cart_add: Duration::from_millis(500),
            added_reset: Duration::from_millis(2000),
        }
    }
}

impl LatencyConfig {
    /// No artificial delays at all. Used by tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            catalog: Duration::ZERO,
            cart_add: Duration::ZERO,
            added_reset: Duration::ZERO,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            latency: LatencyConfig::default(),
            catalog_cache_ttl: Duration::ZERO,
            log_format: LogFormat::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_latency = LatencyConfig::default();

        let host = parse_or(&lookup, "STOREFRONT_HOST", defaults.host)?;
        let port = parse_or(&lookup, "STOREFRONT_PORT", defaults.port)?;
        let base_url = lookup("STOREFRONT_BASE_URL").unwrap_or(defaults.base_url);

        let latency = LatencyConfig {
            catalog: millis_or(&lookup, "CATALOG_LATENCY_MS", default_latency.catalog)?,
            cart_add: millis_or(&lookup, "CART_LATENCY_MS", default_latency.cart_add)?,
            added_reset: millis_or(&lookup, "ADDED_RESET_MS", default_latency.added_reset)?,
        };

        let catalog_cache_ttl = Duration::from_secs(parse_or(
            &lookup,
            "CATALOG_CACHE_TTL_SECS",
            defaults.catalog_cache_ttl.as_secs(),
        )?);

        let log_format = parse_or(&lookup, "LOG_FORMAT", defaults.log_format)?;

        Ok(Self {
            host,
            port,
            base_url,
            latency,
            catalog_cache_ttl,
            log_format,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise return the default.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a millisecond count if set, otherwise return the default duration.
fn millis_or<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parse_or(lookup, key, default_ms).map(Duration::from_millis)
}
