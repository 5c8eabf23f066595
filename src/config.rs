//! Driver configuration read from the environment.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::EngineConfig;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Gravity interval when `STACKTRIS_TICK_MS` is unset or unparseable
pub const DEFAULT_TICK_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Time between gravity ticks
    pub tick_ms: u64,
    pub seed: u32,
    pub width: usize,
    pub height: usize,
    /// Append engine events here when set
    pub log_path: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: 1,
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            log_path: None,
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("STACKTRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = lookup("STACKTRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let width = lookup("STACKTRIS_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        let height = lookup("STACKTRIS_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let log_path = lookup("STACKTRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            tick_ms,
            seed,
            width,
            height,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn engine_config(&self) -> crate::core::Result<EngineConfig> {
        EngineConfig::new(self.width, self.height)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
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
    fn test_values_are_read() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("STACKTRIS_TICK_MS", "250"),
            ("STACKTRIS_SEED", "42"),
            ("STACKTRIS_WIDTH", "12"),
            ("STACKTRIS_HEIGHT", "24"),
            ("STACKTRIS_LOG_PATH", " /tmp/stacktris.log "),
        ]));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.seed, 42);
        assert_eq!((config.width, config.height), (12, 24));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/stacktris.log"));
        assert_eq!(config.engine_config().unwrap().spawn_x, 4);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("STACKTRIS_TICK_MS", "0"),
            ("STACKTRIS_WIDTH", "wide"),
            ("STACKTRIS_LOG_PATH", "  "),
        ]));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(config.width, GRID_WIDTH);
        assert_eq!(config.height, GRID_HEIGHT);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = DriverConfig::from_env();
    }
}
