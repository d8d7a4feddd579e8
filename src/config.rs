//! Runtime configuration
//!
//! Loaded once at startup from a JSON file when one is given, otherwise
//! defaults. Validation happens before the engine is built; the frame loop
//! never sees an invalid value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Error;

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display refresh rate the animation is paced against (Hz)
    pub frame_rate: u32,
    /// Initial transition duration (seconds)
    pub transition_secs: f64,
    /// Initial sharpness control value
    pub sharpness_control: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            transition_secs: DEFAULT_TRANSITION_SECS,
            sharpness_control: DEFAULT_SHARPNESS_CONTROL,
        }
    }
}

impl Config {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or malformed (logged, not fatal - bad prefs should not stop
    /// the animation).
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Reject configurations the clock cannot run on.
    pub fn validate(&self) -> Result<(), Error> {
        if self.frame_rate == 0 {
            return Err(Error::Config("frame_rate must be positive".into()));
        }
        if !self.transition_secs.is_finite() || self.transition_secs < MIN_TRANSITION_SECS {
            return Err(Error::Config(format!(
                "transition_secs must be at least {MIN_TRANSITION_SECS}"
            )));
        }
        if !(SHARPNESS_CONTROL_MIN..=SHARPNESS_CONTROL_MAX).contains(&self.sharpness_control) {
            return Err(Error::Config(format!(
                "sharpness_control must be in [{SHARPNESS_CONTROL_MIN}, {SHARPNESS_CONTROL_MAX}]"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let config = Config {
            frame_rate: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_sub_floor_duration() {
        let config = Config {
            transition_secs: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            transition_secs: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_bounds_control() {
        let config = Config {
            sharpness_control: SHARPNESS_CONTROL_MAX + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"transition_secs": 1.5}"#).unwrap();
        assert_eq!(config.transition_secs, 1.5);
        assert_eq!(config.frame_rate, FRAME_RATE);
        assert_eq!(config.sharpness_control, DEFAULT_SHARPNESS_CONTROL);
    }
}
