//! Tuning knobs, loadable from TOML.
//!
//! ```toml
//! event_queue_capacity = 512
//! max_game_controllers = 4
//! trigger_threshold = 0.4
//! stick_deadzone = 0.1
//! ```
//!
//! Missing keys fall back to [`InputConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{InputError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Capacity of every bounded push-event queue created by the backends.
    /// Events arriving while a queue is full are dropped with a warning.
    pub event_queue_capacity: usize,
    /// Controller slots scanned by the gamepad driver.
    pub max_game_controllers: u32,
    /// Analog trigger value at or above which the trigger button reads as pressed.
    pub trigger_threshold: f32,
    /// Radial dead zone applied to stick axes.
    pub stick_deadzone: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            event_queue_capacity: 256,
            max_game_controllers: 4,
            trigger_threshold: 0.5,
            stick_deadzone: 0.0,
        }
    }
}

impl InputConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InputError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = InputConfig::from_toml_str("trigger_threshold = 0.25").unwrap();
        assert_eq!(cfg.trigger_threshold, 0.25);
        assert_eq!(cfg.event_queue_capacity, 256);
        assert_eq!(cfg.max_game_controllers, 4);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = InputConfig::from_toml_str("max_game_controllers = \"four\"").unwrap_err();
        assert!(matches!(err, InputError::Config { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = InputConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, InputError::ConfigIo { .. }));
    }
}
