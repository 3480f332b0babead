//! Game settings
//!
//! Defaults live in code; a JSON file named by `CIRCLE_GAME_SETTINGS` can
//! override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional settings file
pub const SETTINGS_ENV: &str = "CIRCLE_GAME_SETTINGS";

/// Errors loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub width: u32,
    pub height: u32,

    // === Rules ===
    /// Pixels between orbits
    pub orbit_spacing: u32,
    /// Degrees per tick
    pub angle_step: i32,
    /// Collision band in degrees
    pub collision_tolerance: u16,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Demo ===
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub idle_mode: bool,
    /// Stop the headless demo after this many ticks (0 = run until quit)
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,

            orbit_spacing: ORBIT_SPACING,
            angle_step: ANGLE_STEP,
            collision_tolerance: COLLISION_TOLERANCE,
            tick_rate: TICK_RATE_HZ,

            seed: None,
            idle_mode: true,
            max_ticks: 600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from the file named by `CIRCLE_GAME_SETTINGS`, or defaults
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.orbit_spacing == 0 {
            return Err(SettingsError::Invalid("orbit_spacing must be positive"));
        }
        if self.angle_step == 0 || self.angle_step.unsigned_abs() >= FULL_TURN.unsigned_abs() {
            return Err(SettingsError::Invalid("angle_step must be within 1..360 degrees"));
        }
        if self.collision_tolerance >= 180 {
            return Err(SettingsError::Invalid("collision_tolerance must be below 180"));
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.orbit_spacing, 50);
        assert_eq!(settings.tick_rate, 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1024, "seed": 9 }"#).unwrap();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.height, 600);
        assert_eq!(settings.angle_step, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "orbit_spacing": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "angle_step": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "angle_step": -2147483648 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "angle_step": 360 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(Settings::from_json(r#"{ "angle_step": -359 }"#).is_ok());
        assert!(matches!(
            Settings::from_json(r#"{ "tick_rate": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ width: "),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from(Path::new("/nonexistent/circle-game.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(err.to_string().starts_with("failed to read settings"));
    }
}
