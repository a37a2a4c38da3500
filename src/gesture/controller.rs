//! Gesture controller
//!
//! Turns pointer and key events into face gestures:
//!
//! - Press and release on a face: start a gesture on that face pair
//! - Move: extrude, scale or rotate from the gesture-start geometry
//! - Press and release again: keep the result (the gesture ends)
//! - Undo key: back to the gesture-start geometry
//! - Reset key: back to the load-time geometry
//! - Scale/rotate keys: latch the mode used by subsequent moves
//!
//! Every handler runs to completion and leaves the mesh in a consistent
//! state. Misuse (moves with no gesture, undo with nothing captured,
//! degenerate faces) degrades to a no-op.

use log::{debug, info, warn};

use crate::config::GestureConfig;
use crate::feedback::FeedbackSink;
use crate::input::{GestureKey, InputEvent, PickHit};
use crate::math::Vec3;
use crate::mesh::{face_pair_of, resolve_face_group, Mesh};
use super::snapshot::SnapshotStore;
use super::state::{ControllerState, GestureMode, GestureState, ModeToggles, Session};
use super::transform::{self, TransformUpdate};

/// Screen-to-world projection supplied by the host
pub trait Unproject {
    fn unproject(&self, screen_x: f32, screen_y: f32) -> Vec3;
}

impl<F> Unproject for F
where
    F: Fn(f32, f32) -> Vec3,
{
    fn unproject(&self, screen_x: f32, screen_y: f32) -> Vec3 {
        self(screen_x, screen_y)
    }
}

/// Host collaborators lent to the controller for one event
pub struct Scene<'a> {
    pub mesh: &'a mut Mesh,
    pub feedback: &'a mut dyn FeedbackSink,
    pub unproject: &'a dyn Unproject,
}

#[derive(Debug, Clone)]
pub struct GestureController {
    session: Session,
    snapshots: SnapshotStore,
    drag_sensitivity: f32,
    feedback_offset: (f32, f32),
    keep_snapshot_on_release: bool,
}

impl GestureController {
    /// Create a controller for `mesh`, capturing its current state as the reset baseline
    pub fn new(mesh: &Mesh, config: &GestureConfig) -> Self {
        Self {
            session: Session::default(),
            snapshots: SnapshotStore::with_baseline(mesh),
            drag_sensitivity: config.drag_sensitivity,
            feedback_offset: config.feedback_offset,
            keep_snapshot_on_release: config.keep_snapshot_on_release,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> ControllerState {
        self.session.state()
    }

    pub fn mode(&self) -> GestureMode {
        self.session.mode()
    }

    pub fn toggles(&self) -> ModeToggles {
        self.session.toggles
    }

    pub fn hovered_face_pair(&self) -> Option<u32> {
        self.session.hovered_face_pair
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn handle(&mut self, event: &InputEvent, scene: &mut Scene<'_>) {
        match *event {
            InputEvent::PointerDown { pick, .. } => self.pointer_down(pick, scene),
            InputEvent::PointerMove { screen, pick } => self.pointer_move(screen, pick, scene),
            InputEvent::PointerUp { screen, pick } => self.pointer_up(screen, pick, scene),
            InputEvent::KeyDown(key) => self.key_down(key, scene),
            // Toggles latch on key-down
            InputEvent::KeyUp(_) => {}
        }
    }

    fn hit_on_mesh(pick: Option<PickHit>, mesh: &Mesh) -> Option<PickHit> {
        pick.filter(|hit| hit.mesh == mesh.id())
    }

    fn pointer_down(&mut self, pick: Option<PickHit>, scene: &mut Scene<'_>) {
        if Self::hit_on_mesh(pick, scene.mesh).is_some() {
            self.session.pressed_on_face = true;
        }
    }

    fn pointer_up(&mut self, screen: (f32, f32), pick: Option<PickHit>, scene: &mut Scene<'_>) {
        if !self.session.pressed_on_face {
            return;
        }

        if self.session.gesture.is_some() {
            self.commit(scene);
            return;
        }

        if let Some(hit) = Self::hit_on_mesh(pick, scene.mesh) {
            self.start_gesture(hit, screen, scene);
        }
    }

    fn start_gesture(&mut self, hit: PickHit, screen: (f32, f32), scene: &mut Scene<'_>) {
        let face_pair = face_pair_of(hit.face_id);
        let Some(group) = resolve_face_group(face_pair, scene.mesh.indices(), scene.mesh.positions()) else {
            warn!("Face pair {} is degenerate or outside the mesh, not starting", face_pair);
            self.session.pressed_on_face = false;
            return;
        };

        self.snapshots.start_gesture(scene.mesh);
        let anchor = scene.unproject.unproject(screen.0, screen.1);
        let mode = self.session.toggles.mode();
        let mut gesture = GestureState::new(scene.mesh.id(), face_pair, anchor, mode);
        gesture.face_group = Some(group);
        self.session.gesture = Some(gesture);

        info!("{} gesture started on face pair {}", mode.label(), face_pair);
    }

    fn pointer_move(&mut self, screen: (f32, f32), pick: Option<PickHit>, scene: &mut Scene<'_>) {
        self.session.hovered_face_pair =
            Self::hit_on_mesh(pick, scene.mesh).map(|hit| face_pair_of(hit.face_id));

        let Some(gesture) = self.session.gesture.as_mut() else {
            return;
        };
        let Some(base) = self.snapshots.gesture_start() else {
            warn!("Gesture on face pair {} has no start snapshot, ending it", gesture.face_pair);
            self.clear_gesture(scene);
            return;
        };

        let Some(group) = gesture.face_group.as_ref() else {
            warn!("Gesture on face pair {} has no face group, abandoning it", gesture.face_pair);
            self.snapshots.discard_gesture();
            self.clear_gesture(scene);
            return;
        };

        let mode = self.session.toggles.mode();
        if gesture.mode != mode {
            debug!("Gesture mode {} -> {}", gesture.mode.label(), mode.label());
            gesture.mode = mode;
        }

        let current = scene.unproject.unproject(screen.0, screen.1);
        let offset = transform::drag_offset(current, gesture.anchor, self.drag_sensitivity);

        scene.feedback.set_screen_anchor(
            screen.0 + self.feedback_offset.0,
            screen.1 + self.feedback_offset.1,
        );

        let Some(update) = transform::apply(mode, &base.positions, group, offset) else {
            return;
        };
        scene.feedback.set_text(update.feedback());
        match update {
            TransformUpdate::Geometry { positions, .. } => scene.mesh.set_positions(positions),
            TransformUpdate::Orientation { orientation, .. } => scene.mesh.set_orientation(orientation),
        }
    }

    fn key_down(&mut self, key: GestureKey, scene: &mut Scene<'_>) {
        match key {
            GestureKey::Undo => {
                if self.snapshots.restore_to_gesture_start(scene.mesh) {
                    info!("Undo: restored gesture-start geometry");
                }
                self.clear_gesture(scene);
            }
            GestureKey::Reset => {
                if self.snapshots.restore_to_baseline(scene.mesh) {
                    info!("Reset: restored baseline geometry");
                }
                self.snapshots.discard_gesture();
                self.clear_gesture(scene);
            }
            GestureKey::ToggleScale => {
                self.session.toggles.toggle_scale();
                info!("Scale mode {}", if self.session.toggles.scale { "on" } else { "off" });
            }
            GestureKey::ToggleRotate => {
                self.session.toggles.toggle_rotate();
                info!("Rotate mode {}", if self.session.toggles.rotate { "on" } else { "off" });
            }
        }
    }

    /// End the gesture keeping the mesh as it is
    fn commit(&mut self, scene: &mut Scene<'_>) {
        if let Some(gesture) = &self.session.gesture {
            info!("{} gesture on face pair {} released", gesture.mode.label(), gesture.face_pair);
        }
        if !self.keep_snapshot_on_release {
            self.snapshots.discard_gesture();
        }
        self.clear_gesture(scene);
    }

    /// Back to idle: no gesture, no pending press, no feedback text
    fn clear_gesture(&mut self, scene: &mut Scene<'_>) {
        self.session.gesture = None;
        self.session.pressed_on_face = false;
        scene.feedback.set_text("");
    }
}
