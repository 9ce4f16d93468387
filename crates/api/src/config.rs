//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TAVAG_HOST` - Bind address (default: 127.0.0.1)
//! - `TAVAG_PORT` - Listen port (default: 5000)
//! - `TAVAG_BASE_URL` - Public URL, used for checkout redirect targets
//!   (default: http://localhost:5000)
//! - `TAVAG_DELIVERY_FEE` - Flat delivery fee in minor units (default: 2490)
//! - `STRIPE_SECRET_KEY` - Stripe API secret; when absent the payment
//!   endpoints answer 500 instead of the server refusing to start
//! - `STRIPE_STATIC_CHECKOUT_URL` - Fixed checkout link for the static
//!   redirect endpoint
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

use tavag_core::Money;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the API
    pub base_url: String,
    /// Flat delivery fee added to every order total
    pub delivery_fee: Money,
    /// Stripe API secret key; `None` degrades payment endpoints to 500
    pub stripe_secret_key: Option<SecretString>,
    /// Fixed checkout URL for the static redirect endpoint
    pub static_checkout_url: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable is optional; a missing Stripe key is deliberately not a
    /// startup error - the payment routes degrade instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TAVAG_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TAVAG_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TAVAG_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TAVAG_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("TAVAG_BASE_URL", "http://localhost:5000");

        let delivery_fee_raw = get_env_or_default("TAVAG_DELIVERY_FEE", "2490")
            .parse::<i64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TAVAG_DELIVERY_FEE".to_string(), e.to_string())
            })?;
        let delivery_fee = Money::new(delivery_fee_raw).map_err(|e| {
            ConfigError::InvalidEnvVar("TAVAG_DELIVERY_FEE".to_string(), e.to_string())
        })?;

        let stripe_secret_key = get_optional_env("STRIPE_SECRET_KEY").map(SecretString::from);
        let static_checkout_url = get_optional_env("STRIPE_STATIC_CHECKOUT_URL");
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            delivery_fee,
            stripe_secret_key,
            static_checkout_url,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base_config() -> ApiConfig {
        ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 5000,
            base_url: "http://localhost:5000".to_string(),
            delivery_fee: Money::new(2490).unwrap(),
            stripe_secret_key: None,
            static_checkout_url: None,
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = base_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_debug_redacts_stripe_key() {
        let config = ApiConfig {
            stripe_secret_key: Some(SecretString::from("sk_test_abc123")),
            ..base_config()
        };
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("sk_test_abc123"));
    }
}
