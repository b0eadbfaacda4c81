//! Application Configuration
//!
//! Configuration for the reports application layer.

use std::time::Duration;

/// Reports application configuration
#[derive(Debug, Clone)]
pub struct ReportsConfig {
    /// Base URL of the blockchain gateway
    pub gateway_base_url: String,
    /// Request timeout for gateway calls
    pub gateway_timeout: Duration,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            gateway_base_url: "http://localhost:8545".to_string(),
            gateway_timeout: Duration::from_secs(30),
        }
    }
}

impl ReportsConfig {
    /// Create config for development (local gateway)
    pub fn development() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportsConfig::default();
        assert!(config.gateway_base_url.starts_with("http://"));
        assert_eq!(config.gateway_timeout, Duration::from_secs(30));
    }
}
