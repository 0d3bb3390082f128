//! Demo configuration, read from the environment.
//!
//! - `BLOCKS_SEED`: generator seed (default 1)
//! - `BLOCKS_MAX_TICKS`: advance calls before the demo gives up (default 10000)
//! - `BLOCKS_LOG`: tracing level, one of trace/debug/info/warn/error (default info)
//!
//! Values that fail to parse fall back to their defaults.

use std::str::FromStr;

use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed: u32,
    pub max_ticks: u32,
    pub log_level: Level,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_ticks: 10_000,
            log_level: Level::INFO,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let max_ticks = lookup("BLOCKS_MAX_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_ticks);

        let log_level = lookup("BLOCKS_LOG")
            .and_then(|s| Level::from_str(s.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            max_ticks,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(|_| None);
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("BLOCKS_SEED", "42"),
            ("BLOCKS_MAX_TICKS", " 500 "),
            ("BLOCKS_LOG", "debug"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_ticks, 500);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("BLOCKS_SEED", "-3"),
            ("BLOCKS_LOG", "loud"),
        ]));
        assert_eq!(config.seed, 1);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_from_env() {
        // This test just ensures it doesn't panic
        let _config = DemoConfig::from_env();
    }
}
