//! Configuration module for the GridAI backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key for the generation gateway (generation is
    /// disabled when absent)
    pub gemini_api_key: Option<String>,
    /// Base URL of the generative API
    pub gemini_base_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Whether to seed the in-memory store with demo data
    pub seed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let gemini_api_key = env::var("GRIDAI_GEMINI_API_KEY").ok();

        let gemini_base_url = env::var("GRIDAI_GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        let bind_addr = env::var("GRIDAI_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid GRIDAI_BIND_ADDR format");

        let log_level = env::var("GRIDAI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed = env::var("GRIDAI_SEED")
            .map(|v| v != "0" && v != "false")
            .unwrap_or(true);

        Self {
            gemini_api_key,
            gemini_base_url,
            bind_addr,
            log_level,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("GRIDAI_GEMINI_API_KEY");
        env::remove_var("GRIDAI_GEMINI_BASE_URL");
        env::remove_var("GRIDAI_BIND_ADDR");
        env::remove_var("GRIDAI_LOG_LEVEL");
        env::remove_var("GRIDAI_SEED");

        let config = Config::from_env();

        assert!(config.gemini_api_key.is_none());
        assert_eq!(
            config.gemini_base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed);
    }
}
