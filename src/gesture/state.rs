//! Gesture session state
//!
//! Everything the controller remembers between input events: the running
//! gesture (if any), the mode toggles and the hovered face.

use crate::math::Vec3;
use crate::mesh::{FaceGroup, MeshId};

/// What a pointer-move does to the selected face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    None,
    /// Push the face along its axis mask
    Extrude,
    /// Grow/shrink the face about its center
    Scale,
    /// Orient the whole mesh about the face's axis mask
    Rotate,
}

impl GestureMode {
    pub fn label(&self) -> &'static str {
        match self {
            GestureMode::None => "None",
            GestureMode::Extrude => "Extrude",
            GestureMode::Scale => "Scale",
            GestureMode::Rotate => "Rotate",
        }
    }
}

/// Scale/rotate toggles. At most one is on; neither means extrude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeToggles {
    pub scale: bool,
    pub rotate: bool,
}

impl ModeToggles {
    pub fn toggle_scale(&mut self) {
        self.scale = !self.scale;
        if self.scale {
            self.rotate = false;
        }
    }

    pub fn toggle_rotate(&mut self) {
        self.rotate = !self.rotate;
        if self.rotate {
            self.scale = false;
        }
    }

    /// Mode a pointer-move should use right now
    pub fn mode(&self) -> GestureMode {
        if self.rotate {
            GestureMode::Rotate
        } else if self.scale {
            GestureMode::Scale
        } else {
            GestureMode::Extrude
        }
    }
}

/// A running gesture. Geometry snapshots live in `SnapshotStore`.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub mode: GestureMode,
    pub mesh: MeshId,
    /// Even face-pair id the gesture was started on
    pub face_pair: u32,
    /// Unprojected pointer position when the gesture started
    pub anchor: Vec3,
    /// Resolved when the gesture starts; a face that cannot be resolved never starts one
    pub face_group: Option<FaceGroup>,
}

impl GestureState {
    pub fn new(mesh: MeshId, face_pair: u32, anchor: Vec3, mode: GestureMode) -> Self {
        Self {
            mode,
            mesh,
            face_pair,
            anchor,
            face_group: None,
        }
    }
}

/// Controller state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// Pointer went down on the mesh, no gesture running yet
    PressedOnFace,
    Active,
}

/// All mutable session data owned by the controller
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub toggles: ModeToggles,
    /// Set by a pointer-down on the mesh, cleared when a gesture is released
    pub pressed_on_face: bool,
    pub gesture: Option<GestureState>,
    /// Face pair under the pointer, for highlighting
    pub hovered_face_pair: Option<u32>,
}

impl Session {
    pub fn state(&self) -> ControllerState {
        if self.gesture.is_some() {
            ControllerState::Active
        } else if self.pressed_on_face {
            ControllerState::PressedOnFace
        } else {
            ControllerState::Idle
        }
    }

    pub fn mode(&self) -> GestureMode {
        self.gesture.as_ref().map(|g| g.mode).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_exclusive() {
        let mut toggles = ModeToggles::default();
        assert_eq!(toggles.mode(), GestureMode::Extrude);

        toggles.toggle_scale();
        assert_eq!(toggles.mode(), GestureMode::Scale);

        toggles.toggle_rotate();
        assert!(!toggles.scale);
        assert_eq!(toggles.mode(), GestureMode::Rotate);

        toggles.toggle_scale();
        assert!(!toggles.rotate);
        assert_eq!(toggles.mode(), GestureMode::Scale);

        toggles.toggle_scale();
        assert_eq!(toggles, ModeToggles::default());
    }

    #[test]
    fn test_session_state() {
        let mut session = Session::default();
        assert_eq!(session.state(), ControllerState::Idle);
        assert_eq!(session.mode(), GestureMode::None);

        session.pressed_on_face = true;
        assert_eq!(session.state(), ControllerState::PressedOnFace);

        session.gesture = Some(GestureState::new(MeshId(0), 4, Vec3::ZERO, GestureMode::Extrude));
        assert_eq!(session.state(), ControllerState::Active);
        assert_eq!(session.mode(), GestureMode::Extrude);
    }
}
