//! Face transforms driven by a pointer offset
//!
//! Pure functions: each takes the gesture-start geometry, the resolved face
//! group and the scaled world-space pointer offset, and returns the new mesh
//! state plus the cursor feedback text.
//!
//! Extrude and scale are always relative to the gesture-start geometry.
//! Rotate produces an absolute orientation that replaces the mesh's current
//! one; successive rotate updates do not accumulate.

use crate::math::{Quat, Vec3};
use crate::mesh::FaceGroup;
use super::state::GestureMode;

/// Result of one transform step
#[derive(Debug, Clone, PartialEq)]
pub enum TransformUpdate {
    /// Replace the position buffer
    Geometry { positions: Vec<f32>, feedback: String },
    /// Replace the mesh orientation
    Orientation { orientation: Quat, feedback: String },
}

impl TransformUpdate {
    pub fn feedback(&self) -> &str {
        match self {
            TransformUpdate::Geometry { feedback, .. } => feedback,
            TransformUpdate::Orientation { feedback, .. } => feedback,
        }
    }
}

/// World-space offset `(current - anchor) * sensitivity`
pub fn drag_offset(current: Vec3, anchor: Vec3, sensitivity: f32) -> Vec3 {
    (current - anchor) * sensitivity
}

/// Format with 2 decimals, printing negative zero as "0.00"
fn fixed2(value: f32) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{:.2}", value + 0.0)
}

/// Move every group vertex by `axis_mask ⊙ offset`.
///
/// Only the group's own vertices move. Vertices of neighbouring faces that
/// sit at the same corners stay put, so the box opens up along the face edge.
pub fn extrude(base: &[f32], group: &FaceGroup, offset: Vec3) -> TransformUpdate {
    let delta = group.axis_mask.mul_elem(offset);
    let mut positions = base.to_vec();

    for &index in group.indices.iter() {
        if let Some(p) = Vec3::from_slice(base, index as usize) {
            (p + delta).write_to(&mut positions, index as usize);
        }
    }

    TransformUpdate::Geometry {
        positions,
        feedback: format!("[{}, {}, {}]", fixed2(delta.x), fixed2(delta.y), fixed2(delta.z)),
    }
}

/// Scale the group's vertices about the group center by `1 + |offset|`
pub fn scale(base: &[f32], group: &FaceGroup, offset: Vec3) -> TransformUpdate {
    let factor = 1.0 + offset.len();
    let center = group.center;
    let mut positions = base.to_vec();

    for &index in group.indices.iter() {
        if let Some(p) = Vec3::from_slice(base, index as usize) {
            ((p - center) * factor + center).write_to(&mut positions, index as usize);
        }
    }

    TransformUpdate::Geometry {
        positions,
        feedback: fixed2(factor),
    }
}

/// Orientation of `|offset|` radians about the group's axis mask
pub fn rotate(group: &FaceGroup, offset: Vec3) -> TransformUpdate {
    let angle = offset.len();
    TransformUpdate::Orientation {
        orientation: Quat::from_axis_angle(group.axis_mask, angle),
        feedback: fixed2(angle),
    }
}

/// Dispatch on `mode`. `GestureMode::None` produces nothing.
pub fn apply(mode: GestureMode, base: &[f32], group: &FaceGroup, offset: Vec3) -> Option<TransformUpdate> {
    match mode {
        GestureMode::None => None,
        GestureMode::Extrude => Some(extrude(base, group, offset)),
        GestureMode::Scale => Some(scale(base, group, offset)),
        GestureMode::Rotate => Some(rotate(group, offset)),
    }
}
