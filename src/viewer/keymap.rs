//! Key bindings resolved to macroquad key codes
//!
//! Names are validated by the config; this only maps the canonical names to
//! `KeyCode`s once at startup.

use macroquad::input::KeyCode;
use crate::config::{ConfigError, KeyBindings};
use crate::input::GestureKey;

/// Resolved bindings, one key per command
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    bindings: Vec<(KeyCode, GestureKey, &'static str)>,
}

impl KeyMap {
    pub fn from_bindings(keys: &KeyBindings) -> Result<Self, ConfigError> {
        let bindings = keys
            .resolve()?
            .into_iter()
            .map(|(command, name)| {
                key_code(name)
                    .map(|code| (code, command, name))
                    .ok_or_else(|| ConfigError::Invalid(format!("no key code for '{}'", name)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bindings })
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, GestureKey)> + '_ {
        self.bindings.iter().map(|&(code, command, _)| (code, command))
    }

    /// Display name of the key bound to `command`
    pub fn name_for(&self, command: GestureKey) -> Option<&'static str> {
        self.bindings.iter().find(|(_, c, _)| *c == command).map(|&(_, _, name)| name)
    }
}

/// Key code for a canonical key name
fn key_code(name: &str) -> Option<KeyCode> {
    let key = match name {
        "A" => KeyCode::A,
        "B" => KeyCode::B,
        "C" => KeyCode::C,
        "D" => KeyCode::D,
        "E" => KeyCode::E,
        "F" => KeyCode::F,
        "G" => KeyCode::G,
        "H" => KeyCode::H,
        "I" => KeyCode::I,
        "J" => KeyCode::J,
        "K" => KeyCode::K,
        "L" => KeyCode::L,
        "M" => KeyCode::M,
        "N" => KeyCode::N,
        "O" => KeyCode::O,
        "P" => KeyCode::P,
        "Q" => KeyCode::Q,
        "R" => KeyCode::R,
        "S" => KeyCode::S,
        "T" => KeyCode::T,
        "U" => KeyCode::U,
        "V" => KeyCode::V,
        "W" => KeyCode::W,
        "X" => KeyCode::X,
        "Y" => KeyCode::Y,
        "Z" => KeyCode::Z,
        "0" => KeyCode::Key0,
        "1" => KeyCode::Key1,
        "2" => KeyCode::Key2,
        "3" => KeyCode::Key3,
        "4" => KeyCode::Key4,
        "5" => KeyCode::Key5,
        "6" => KeyCode::Key6,
        "7" => KeyCode::Key7,
        "8" => KeyCode::Key8,
        "9" => KeyCode::Key9,
        "Esc" => KeyCode::Escape,
        "Enter" => KeyCode::Enter,
        "Space" => KeyCode::Space,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Del" => KeyCode::Delete,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        _ => return None,
    };
    Some(key)
}
