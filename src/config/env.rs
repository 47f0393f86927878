// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::models::Locale;
use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the image search / community posts backend
    /// Format: https://host[:port] (no trailing slash required)
    pub backend_url: String,

    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Timeout for /images and /reddit backend calls, in seconds
    pub backend_timeout_secs: u64,

    /// Timeout for the backend status probe, in seconds
    pub health_timeout_secs: u64,

    /// Timeout for each individual image download, in seconds
    pub image_timeout_secs: u64,

    /// Memoization window for backend payloads and image bytes, in seconds
    pub cache_ttl_secs: u64,

    /// How often expired cache entries are swept, in seconds
    pub cache_cleanup_interval_secs: u64,

    /// Locale used when a request does not carry `lang`
    pub default_locale: Locale,

    /// Primary theme color handed to the front end
    pub theme_primary_color: String,

    /// Upper bound for the gallery `count` parameter
    pub max_gallery_count: u32,

    /// Largest single image body to download, in bytes
    pub max_image_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            backend_url: env::var("BACKEND_URL").unwrap_or_else(|_| {
                "https://fortunate-rebirth-production-93ce.up.railway.app".to_string()
            }),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: parse_or("SERVER_PORT", 8003),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            backend_timeout_secs: parse_or("BACKEND_TIMEOUT_SECS", 10),

            health_timeout_secs: parse_or("HEALTH_TIMEOUT_SECS", 6),

            image_timeout_secs: parse_or("IMAGE_TIMEOUT_SECS", 8),

            cache_ttl_secs: parse_or("CACHE_TTL_SECS", 300),

            cache_cleanup_interval_secs: parse_or("CACHE_CLEANUP_INTERVAL_SECS", 60),

            default_locale: env::var("DEFAULT_LOCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),

            theme_primary_color: env::var("THEME_PRIMARY_COLOR")
                .unwrap_or_else(|_| "#006666".to_string()),

            max_gallery_count: parse_or("MAX_GALLERY_COUNT", 9),

            max_image_bytes: parse_or("MAX_IMAGE_BYTES", 10 * 1024 * 1024),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.backend_url.is_empty() {
            return Err("BACKEND_URL is required".to_string());
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(format!(
                "BACKEND_URL must be an http(s) URL, got: {}",
                self.backend_url
            ));
        }

        if self.backend_timeout_secs == 0 || self.image_timeout_secs == 0 {
            log::warn!("A zero timeout is configured - outbound calls will fail immediately");
        }

        if self.max_gallery_count == 0 {
            return Err("MAX_GALLERY_COUNT must be at least 1".to_string());
        }

        if self.max_image_bytes == 0 {
            return Err("MAX_IMAGE_BYTES must be at least 1".to_string());
        }

        Ok(())
    }

    /// Per-call timeouts for outbound HTTP
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            backend: Duration::from_secs(self.backend_timeout_secs),
            health: Duration::from_secs(self.health_timeout_secs),
            image: Duration::from_secs(self.image_timeout_secs),
        }
    }
}

/// Outbound request timeouts
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub backend: Duration,
    pub health: Duration,
    pub image: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            backend: Duration::from_secs(10),
            health: Duration::from_secs(6),
            image: Duration::from_secs(8),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
