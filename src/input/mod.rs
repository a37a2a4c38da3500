//! Input events consumed by the gesture controller
//!
//! The host translates raw window input into these discrete events. Pointer
//! events carry the screen position and the host's pick result, so the
//! controller never touches the scene itself.

mod key_names;

pub use key_names::{canonical_key_name, KEY_NAMES};

use crate::mesh::MeshId;

/// What a pick ray hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickHit {
    pub mesh: MeshId,
    /// Raw triangle index; normalized to a face pair by the controller
    pub face_id: u32,
}

/// Keyboard commands understood by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKey {
    /// Restore the gesture-start geometry
    Undo,
    /// Restore the load-time geometry
    Reset,
    ToggleScale,
    ToggleRotate,
}

impl GestureKey {
    pub const ALL: [GestureKey; 4] = [
        GestureKey::Undo,
        GestureKey::Reset,
        GestureKey::ToggleScale,
        GestureKey::ToggleRotate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GestureKey::Undo => "Undo",
            GestureKey::Reset => "Reset",
            GestureKey::ToggleScale => "Scale",
            GestureKey::ToggleRotate => "Rotate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { screen: (f32, f32), pick: Option<PickHit> },
    PointerMove { screen: (f32, f32), pick: Option<PickHit> },
    PointerUp { screen: (f32, f32), pick: Option<PickHit> },
    KeyDown(GestureKey),
    KeyUp(GestureKey),
}
