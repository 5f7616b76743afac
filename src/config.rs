//! Application configuration stored in `~/.config/debase/config.toml`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default event-loop tick interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Default reveal/hide transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_MS: u64 = 2500;

/// Timing configuration for the interactive decoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Event-loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Reveal/hide transition duration in milliseconds.
    pub transition_ms: u64,
    /// How long a toast stays on screen, in milliseconds.
    pub toast_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            toast_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl AppConfig {
    /// Load the configuration file, falling back to defaults when it does
    /// not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save the configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the config file path.
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("debase").join("config.toml"))
    }

    /// Tick interval as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Transition duration as a [`Duration`].
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Toast lifetime as a [`Duration`].
    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.transition_ms, DEFAULT_TRANSITION_MS);
        assert_eq!(config.toast_ms, DEFAULT_TOAST_MS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("transition_ms = 150").unwrap();
        assert_eq!(config.transition_ms, 150);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.toast_ms, DEFAULT_TOAST_MS);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig {
            tick_rate_ms: 100,
            transition_ms: 200,
            toast_ms: 3000,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
