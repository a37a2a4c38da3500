//! Geometry snapshots for undo and reset
//!
//! Two slots: the load-time baseline (restored by reset) and the state at the
//! start of the current gesture (restored by undo). Both are owned copies.

use crate::math::Quat;
use crate::mesh::Mesh;

/// Full copy of a mesh's mutable state
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSnapshot {
    pub positions: Vec<f32>,
    pub orientation: Quat,
}

impl MeshSnapshot {
    pub fn capture(mesh: &Mesh) -> Self {
        Self {
            positions: mesh.positions().to_vec(),
            orientation: mesh.orientation(),
        }
    }

    /// Write this snapshot back into `mesh`
    pub fn apply(&self, mesh: &mut Mesh) {
        mesh.set_positions(self.positions.clone());
        mesh.set_orientation(self.orientation);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    baseline: Option<MeshSnapshot>,
    gesture_start: Option<MeshSnapshot>,
}

impl SnapshotStore {
    /// Store whose baseline is the mesh as it is now
    pub fn with_baseline(mesh: &Mesh) -> Self {
        Self {
            baseline: Some(MeshSnapshot::capture(mesh)),
            gesture_start: None,
        }
    }

    pub fn gesture_start(&self) -> Option<&MeshSnapshot> {
        self.gesture_start.as_ref()
    }

    /// Capture positions and orientation at gesture start
    pub fn start_gesture(&mut self, mesh: &Mesh) {
        self.gesture_start = Some(MeshSnapshot::capture(mesh));
    }

    /// Drop the gesture capture without touching the mesh
    pub fn discard_gesture(&mut self) {
        self.gesture_start = None;
    }

    /// Write the gesture-start capture back and clear it.
    /// Returns false (and leaves the mesh alone) if nothing was captured.
    pub fn restore_to_gesture_start(&mut self, mesh: &mut Mesh) -> bool {
        match self.gesture_start.take() {
            Some(snapshot) => {
                mesh.set_positions(snapshot.positions);
                mesh.set_orientation(snapshot.orientation);
                true
            }
            None => false,
        }
    }

    /// Write the baseline back. Returns false if there is no baseline.
    pub fn restore_to_baseline(&self, mesh: &mut Mesh) -> bool {
        match &self.baseline {
            Some(snapshot) => {
                snapshot.apply(mesh);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn disturb(mesh: &mut Mesh) {
        let mut positions = mesh.positions().to_vec();
        positions.iter_mut().for_each(|p| *p *= 3.0);
        mesh.set_positions(positions);
        mesh.set_orientation(Quat::from_axis_angle(Vec3::X, 1.0));
    }

    #[test]
    fn test_undo_restores_gesture_start() {
        let mut mesh = Mesh::cube(2.0);
        let mut store = SnapshotStore::with_baseline(&mesh);

        disturb(&mut mesh);
        let before = MeshSnapshot::capture(&mesh);
        store.start_gesture(&mesh);
        disturb(&mut mesh);

        assert!(store.restore_to_gesture_start(&mut mesh));
        assert_eq!(MeshSnapshot::capture(&mesh), before);
        assert!(store.gesture_start().is_none());
    }

    #[test]
    fn test_undo_twice_is_noop() {
        let mut mesh = Mesh::cube(2.0);
        let mut store = SnapshotStore::default();
        store.start_gesture(&mesh);
        assert!(store.restore_to_gesture_start(&mut mesh));

        disturb(&mut mesh);
        let version = mesh.version();
        assert!(!store.restore_to_gesture_start(&mut mesh));
        assert_eq!(mesh.version(), version);
    }

    #[test]
    fn test_reset_restores_baseline_repeatedly() {
        let mut mesh = Mesh::cube(2.0).with_orientation(Quat::from_axis_angle(Vec3::X, 0.5));
        let store = SnapshotStore::with_baseline(&mesh);
        let baseline = MeshSnapshot::capture(&mesh);

        for _ in 0..3 {
            disturb(&mut mesh);
            assert!(store.restore_to_baseline(&mut mesh));
            assert_eq!(MeshSnapshot::capture(&mesh), baseline);
        }
    }

    #[test]
    fn test_reset_without_baseline() {
        let mut mesh = Mesh::cube(2.0);
        let store = SnapshotStore::default();
        assert!(!store.restore_to_baseline(&mut mesh));
        assert_eq!(mesh.version(), 0);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut mesh = Mesh::cube(2.0);
        let mut store = SnapshotStore::default();
        store.start_gesture(&mesh);
        disturb(&mut mesh);
        assert_eq!(store.gesture_start().map(|s| s.positions[0]), Some(-1.0));
    }
}
