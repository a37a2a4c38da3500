//! Raw macroquad input to controller events

use macroquad::prelude::*;

use crate::input::{InputEvent, PickHit};
use super::KeyMap;

/// Tracks the cursor between frames so moves are only reported when it moves
#[derive(Debug, Clone, Default)]
pub struct EventPoller {
    last_mouse: Option<(f32, f32)>,
}

impl EventPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append this frame's events to `out`. Order: move, press, release, keys.
    pub fn poll(&mut self, keymap: &KeyMap, pick: Option<PickHit>, out: &mut Vec<InputEvent>) {
        let screen = mouse_position();

        if self.last_mouse != Some(screen) {
            out.push(InputEvent::PointerMove { screen, pick });
            self.last_mouse = Some(screen);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            out.push(InputEvent::PointerDown { screen, pick });
        }
        if is_mouse_button_released(MouseButton::Left) {
            out.push(InputEvent::PointerUp { screen, pick });
        }

        for (code, key) in keymap.iter() {
            if is_key_pressed(code) {
                out.push(InputEvent::KeyDown(key));
            }
            if is_key_released(code) {
                out.push(InputEvent::KeyUp(key));
            }
        }
    }
}
