//! Configuration file support for vibeview.
//!
//! Configuration is loaded from `~/.config/vibeview/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/vibeview/config.toml
//! seek_backward_seconds = 5.0
//! seek_forward_seconds = 15.0
//! click_window_ms = 300
//! double_click_interval_ms = 300
//! treat_control_as_command = true
//! history_len = 20
//! pause_on_lose_focus = true
//! auto_resume_on_focus = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::input::SeekStep;
use crate::input::click::DEFAULT_CLICK_WINDOW;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds to seek back with left arrow or `,`
    pub seek_backward_seconds: f64,

    /// Seconds to seek forward with right arrow or `.`
    pub seek_forward_seconds: f64,

    /// How long a single click waits for a double click
    pub click_window_ms: u64,

    /// Max gap between presses the terminal host counts as one multi-click.
    /// Must not exceed `click_window_ms`.
    pub double_click_interval_ms: u64,

    /// Terminals rarely report the super key, so let Ctrl stand in for Cmd
    pub treat_control_as_command: bool,

    /// Number of executed commands kept for display
    pub history_len: usize,

    /// Pause playback when the terminal loses focus
    pub pause_on_lose_focus: bool,

    /// Resume a paused player when the terminal regains focus
    pub auto_resume_on_focus: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seek_backward_seconds: 10.0,
            seek_forward_seconds: 10.0,
            click_window_ms: DEFAULT_CLICK_WINDOW.as_millis() as u64,
            double_click_interval_ms: 300,
            treat_control_as_command: true,
            history_len: 20,
            pause_on_lose_focus: true,
            auto_resume_on_focus: false,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                crate::log::log(&format!("Config ignored: {}", e));
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the input core cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("seek_backward_seconds", self.seek_backward_seconds),
            ("seek_forward_seconds", self.seek_forward_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSeek { name, value });
            }
        }
        if self.click_window_ms == 0 {
            return Err(ConfigError::ZeroWindow("click_window_ms"));
        }
        if self.double_click_interval_ms == 0 {
            return Err(ConfigError::ZeroWindow("double_click_interval_ms"));
        }
        // A slow second press would otherwise report a single click and then a double click
        if self.double_click_interval_ms > self.click_window_ms {
            return Err(ConfigError::IntervalExceedsWindow {
                interval_ms: self.double_click_interval_ms,
                window_ms: self.click_window_ms,
            });
        }
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vibeview")
            .join("config.toml")
    }

    pub fn seek_step(&self) -> SeekStep {
        SeekStep {
            backward_seconds: self.seek_backward_seconds,
            forward_seconds: self.seek_forward_seconds,
        }
    }

    pub fn click_window(&self) -> Duration {
        Duration::from_millis(self.click_window_ms)
    }

    pub fn double_click_interval(&self) -> Duration {
        Duration::from_millis(self.double_click_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.click_window(), DEFAULT_CLICK_WINDOW);
        assert_eq!(config.click_window(), Duration::from_millis(300));
        assert!(config.treat_control_as_command);
        assert!(config.pause_on_lose_focus);
        assert!(!config.auto_resume_on_focus);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            seek_backward_seconds = 5.0
            seek_forward_seconds = 15.0
            click_window_ms = 250
            double_click_interval_ms = 200
            auto_resume_on_focus = true
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.seek_step(),
            SeekStep {
                backward_seconds: 5.0,
                forward_seconds: 15.0,
            }
        );
        assert_eq!(config.click_window(), Duration::from_millis(250));
        assert!(config.auto_resume_on_focus);
        assert!(config.validate().is_ok());
        // Unset keys keep their defaults
        assert_eq!(config.history_len, 20);
        assert!(config.pause_on_lose_focus);
    }

    #[test]
    fn test_negative_seek_is_rejected() {
        let config = Config {
            seek_backward_seconds: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSeek {
                name: "seek_backward_seconds",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let config = Config {
            click_window_ms: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroWindow("click_window_ms"))
        ));
    }

    #[test]
    fn test_interval_longer_than_window_is_rejected() {
        let config = Config {
            click_window_ms: 200,
            double_click_interval_ms: 400,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IntervalExceedsWindow {
                interval_ms: 400,
                window_ms: 200,
            })
        ));

        // Equal values are fine
        let config = Config {
            click_window_ms: 400,
            double_click_interval_ms: 400,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/vibeview/config.toml"));
        assert_eq!(config.seek_backward_seconds, 10.0);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("vibeview-test-{}.toml", std::process::id()));
        std::fs::write(&path, "click_window_ms = 0\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.click_window_ms, 300);

        std::fs::remove_file(&path).ok();
    }
}
