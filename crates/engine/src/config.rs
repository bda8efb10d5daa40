//! Runtime configuration from environment variables.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tui_pong_types::TICK_MS;

pub const DEFAULT_LOG_PATH: &str = "pong.log";
/// Simulation transitions are logged at debug by the core crate and are
/// part of the default log.
pub const DEFAULT_LOG_FILTER: &str = "info,tui_pong_core=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PongConfig {
    /// Append-only log file.
    pub log_path: PathBuf,
    /// `env_logger` filter directives.
    pub log_filter: String,
    /// Fixed serve seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub tick_period: Duration,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: None,
            tick_period: Duration::from_millis(TICK_MS),
        }
    }
}

impl PongConfig {
    /// Read `PONG_LOG_PATH`, `PONG_LOG` and `PONG_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PongConfig::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            log_path: non_blank("PONG_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            log_filter: non_blank("PONG_LOG").unwrap_or(defaults.log_filter),
            seed: non_blank("PONG_SEED").and_then(|s| s.parse().ok()),
            tick_period: defaults.tick_period,
        }
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PongConfig::from_lookup(lookup(&[]));
        assert_eq!(config, PongConfig::default());
        assert_eq!(config.tick_period, Duration::from_millis(75));
    }

    #[test]
    fn test_reads_all_variables() {
        let config = PongConfig::from_lookup(lookup(&[
            ("PONG_LOG_PATH", "/tmp/pong-test.log"),
            ("PONG_LOG", "debug"),
            ("PONG_SEED", "99"),
        ]));
        assert_eq!(config.log_path, PathBuf::from("/tmp/pong-test.log"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.resolve_seed(), 99);
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = PongConfig::from_lookup(lookup(&[
            ("PONG_LOG_PATH", "   "),
            ("PONG_SEED", "not-a-number"),
        ]));
        assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_default_filter_keeps_core_transitions() {
        let config = PongConfig::default();
        assert!(config.log_filter.starts_with("info"));
        assert!(config.log_filter.contains("tui_pong_core=debug"));
    }

    #[test]
    fn test_config_from_env() {
        // This test just ensures it doesn't panic
        let _config = PongConfig::from_env();
    }
}
