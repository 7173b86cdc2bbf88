//! Configuration for pipeline runs

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

/// Configuration for the concurrent pipeline
///
/// # Examples
///
/// ```
/// use classdoc_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert!(config.worker_count >= 1);
/// assert_eq!(config.drain_timeout_secs, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of documents processed at the same time
    /// Default: available parallelism, at least 1
    pub worker_count: usize,

    /// How long in-flight documents may run after a shutdown request or a
    /// fatal error before the run is abandoned (in seconds)
    /// Default: 30
    pub drain_timeout_secs: u64,

    /// Follow symbolic links while walking the corpus
    /// Default: false
    pub follow_links: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            drain_timeout_secs: 30,
            follow_links: false,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.worker_count == 0 {
            return Err("worker_count must be at least 1".to_string());
        }
        if self.drain_timeout_secs == 0 {
            return Err("drain_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Drain timeout as Duration
    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// Available parallelism of the host, or 1 when it cannot be determined
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(config.worker_count >= 1);
        assert_eq!(config.drain_timeout(), Duration::from_secs(30));
        assert!(!config.follow_links);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = PipelineConfig {
            worker_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_drain_timeout_rejected() {
        let config = PipelineConfig {
            drain_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config = PipelineConfig::from_toml("worker_count = 3").unwrap();
        assert_eq!(config.worker_count, 3);
        assert_eq!(config.drain_timeout_secs, 30);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = PipelineConfig {
            worker_count: 4,
            drain_timeout_secs: 5,
            follow_links: true,
        };
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: PipelineConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.worker_count, deserialized.worker_count);
        assert_eq!(config.drain_timeout_secs, deserialized.drain_timeout_secs);
        assert_eq!(config.follow_links, deserialized.follow_links);

        let toml_str = config.to_toml().unwrap();
        assert_eq!(PipelineConfig::from_toml(&toml_str).unwrap().worker_count, 4);
    }
}
