//! Gesture configuration
//!
//! Stored as RON. Every field has a default, so a config file only needs the
//! values it changes:
//!
//! ```ron
//! (
//!     drag_sensitivity: 20.0,
//!     keys: (toggle_rotate: "E"),
//! )
//! ```

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::{canonical_key_name, GestureKey};

/// Drag sensitivity used when nothing else is configured
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 14.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Key names for each gesture command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub undo: String,
    pub reset: String,
    pub toggle_scale: String,
    pub toggle_rotate: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            undo: "D".to_string(),
            reset: "R".to_string(),
            toggle_scale: "S".to_string(),
            toggle_rotate: "T".to_string(),
        }
    }
}

impl KeyBindings {
    pub fn name_for(&self, command: GestureKey) -> &str {
        match command {
            GestureKey::Undo => &self.undo,
            GestureKey::Reset => &self.reset,
            GestureKey::ToggleScale => &self.toggle_scale,
            GestureKey::ToggleRotate => &self.toggle_rotate,
        }
    }

    /// Canonical key name per command. Unknown names and keys bound twice are errors.
    pub fn resolve(&self) -> Result<Vec<(GestureKey, &'static str)>, ConfigError> {
        let mut resolved: Vec<(GestureKey, &'static str)> = Vec::with_capacity(GestureKey::ALL.len());

        for command in GestureKey::ALL {
            let name = self.name_for(command);
            let key = canonical_key_name(name).ok_or_else(|| {
                ConfigError::Invalid(format!("unknown key '{}' for {}", name, command.label()))
            })?;
            if let Some((other, _)) = resolved.iter().find(|(_, k)| *k == key) {
                return Err(ConfigError::Invalid(format!(
                    "key '{}' bound to both {} and {}",
                    key,
                    other.label(),
                    command.label()
                )));
            }
            resolved.push((command, key));
        }

        Ok(resolved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Multiplier from unprojected pointer delta to world offset
    pub drag_sensitivity: f32,
    /// Pixel offset of the feedback text from the cursor
    pub feedback_offset: (f32, f32),
    /// Keep the gesture-start snapshot after release so undo can revert a finished gesture
    pub keep_snapshot_on_release: bool,
    pub keys: KeyBindings,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            feedback_offset: (55.0, 15.0),
            keep_snapshot_on_release: false,
            keys: KeyBindings::default(),
        }
    }
}

impl GestureConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Reject values the gesture math or the key map cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "drag_sensitivity must be a positive number, got {}",
                self.drag_sensitivity
            )));
        }
        if !self.feedback_offset.0.is_finite() || !self.feedback_offset.1.is_finite() {
            return Err(ConfigError::Invalid("feedback_offset must be finite".to_string()));
        }
        self.keys.resolve()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GestureConfig::default();
        assert_eq!(config.drag_sensitivity, 14.0);
        assert_eq!(config.feedback_offset, (55.0, 15.0));
        assert!(!config.keep_snapshot_on_release);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = GestureConfig::from_ron("(drag_sensitivity: 20.0, keys: (toggle_rotate: \"E\"))").unwrap();
        assert_eq!(config.drag_sensitivity, 20.0);
        assert_eq!(config.keys.toggle_rotate, "E");
        assert_eq!(config.keys.undo, "D");
        assert_eq!(config.feedback_offset, (55.0, 15.0));
    }

    #[test]
    fn test_rejects_bad_sensitivity() {
        let err = GestureConfig::from_ron("(drag_sensitivity: -1.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed() {
        let err = GestureConfig::from_ron("(drag_sensitivity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bindings_resolve_to_canonical_names() {
        let keys = KeyBindings {
            undo: "z".to_string(),
            toggle_rotate: "escape".to_string(),
            ..KeyBindings::default()
        };
        let resolved = keys.resolve().unwrap();
        assert_eq!(resolved[0], (GestureKey::Undo, "Z"));
        assert_eq!(resolved[3], (GestureKey::ToggleRotate, "Esc"));
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let keys = KeyBindings {
            reset: "d".to_string(),
            ..KeyBindings::default()
        };
        assert!(matches!(keys.resolve(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_binding_rejected() {
        let err = GestureConfig::from_ron("(keys: (toggle_rotate: \"Hyper\"))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ron");

        let config = GestureConfig {
            drag_sensitivity: 9.5,
            keep_snapshot_on_release: true,
            ..GestureConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(GestureConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GestureConfig::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
