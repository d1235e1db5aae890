// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::services::ClientSettings;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Places API Key
    pub google_places_api_key: String,

    /// Root of the Places web service endpoints
    pub places_base_url: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Upper bound on requests sent per second
    pub queries_per_second: u32,

    /// Retries for transient HTTP failures (500, 503, 504, connection errors)
    pub max_retries: u32,

    /// Base backoff between retries in milliseconds, doubled on each attempt
    pub retry_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            google_places_api_key: env::var("GOOGLE_PLACES_API_KEY")
                .unwrap_or_else(|_| String::new()),

            places_base_url: env::var("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|_| ClientSettings::DEFAULT_BASE_URL.to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),

            queries_per_second: env::var("QUERIES_PER_SECOND")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),

            max_retries: env::var("MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),

            retry_delay_ms: env::var("RETRY_DELAY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .unwrap_or(500),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures a search can be issued at all
    pub fn validate(&self) -> Result<(), String> {
        if self.google_places_api_key.trim().is_empty() {
            return Err("GOOGLE_PLACES_API_KEY is required".to_string());
        }

        if self.queries_per_second == 0 {
            return Err("QUERIES_PER_SECOND must be greater than zero".to_string());
        }

        if self.places_base_url.is_empty() {
            log::warn!("GOOGLE_PLACES_BASE_URL is empty - falling back to the public endpoint");
        }

        Ok(())
    }

    /// Transport settings for GooglePlacesClient
    pub fn client_settings(&self) -> ClientSettings {
        let base_url = if self.places_base_url.is_empty() {
            ClientSettings::DEFAULT_BASE_URL.to_string()
        } else {
            self.places_base_url.trim_end_matches('/').to_string()
        };

        ClientSettings {
            base_url,
            timeout: Duration::from_secs(self.request_timeout_secs),
            queries_per_second: self.queries_per_second,
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}
