//! Editable triangle mesh
//!
//! Flat position buffer (3 floats per vertex), triangle index triples and a
//! whole-mesh orientation. Every write bumps `version` so a renderer can tell
//! when to rebuild its draw data.
//!
//! Faces are stored as consecutive triangle pairs: triangles `2k` and `2k + 1`
//! form quad `k`, which is what the gesture code calls a face pair.

mod face_group;
mod small_set;

pub use face_group::*;
pub use small_set::SmallSet;

use crate::math::{Quat, Vec3};

/// Identifies a mesh in pick results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    id: MeshId,
    positions: Vec<f32>,
    indices: Vec<u32>,
    orientation: Quat,
    version: u64,
}

/// Corner indices of each hexahedron quad (corner bit 0 = +x, bit 1 = +y, bit 2 = +z).
/// Counter-clockwise seen from outside.
const HEX_FACES: [[usize; 4]; 6] = [
    [4, 5, 7, 6], // Front (+Z)
    [1, 0, 2, 3], // Back (-Z)
    [6, 7, 3, 2], // Top (+Y)
    [0, 1, 5, 4], // Bottom (-Y)
    [5, 1, 3, 7], // Right (+X)
    [0, 4, 6, 2], // Left (-X)
];

impl Mesh {
    pub fn new(positions: Vec<f32>, indices: Vec<u32>) -> Self {
        Self {
            id: MeshId::default(),
            positions,
            indices,
            orientation: Quat::IDENTITY,
            version: 0,
        }
    }

    pub fn with_id(mut self, id: MeshId) -> Self {
        self.id = id;
        self
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Axis-aligned cube centered at the origin
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Vec3::new(
                if i & 1 != 0 { h } else { -h },
                if i & 2 != 0 { h } else { -h },
                if i & 4 != 0 { h } else { -h },
            );
        }
        Self::hexahedron(corners)
    }

    /// Six-quad solid from 8 corners, indexed by bit pattern (bit 0 = +x, bit 1 = +y, bit 2 = +z).
    ///
    /// Each face gets its own 4 vertices (24 total), like a flat-shaded box,
    /// and is split into triangles `(a, b, c)` and `(a, c, d)`.
    pub fn hexahedron(corners: [Vec3; 8]) -> Self {
        let mut positions = Vec::with_capacity(24 * 3);
        let mut indices = Vec::with_capacity(36);

        for face in HEX_FACES.iter() {
            let base = (positions.len() / 3) as u32;
            for &corner in face {
                let p = corners[corner];
                positions.extend_from_slice(&[p.x, p.y, p.z]);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self::new(positions, indices)
    }

    pub fn id(&self) -> MeshId {
        self.id
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn set_positions(&mut self, positions: Vec<f32>) {
        self.positions = positions;
        self.version += 1;
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
        self.version += 1;
    }

    /// Incremented on every position or orientation write
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space vertex position
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        Vec3::from_slice(&self.positions, index)
    }

    /// Vertex position with the mesh orientation applied
    pub fn world_vertex(&self, index: usize) -> Option<Vec3> {
        self.vertex(index).map(|v| self.orientation.rotate(v))
    }

    /// World-space corners of triangle `tri`
    pub fn world_triangle(&self, tri: usize) -> Option<[Vec3; 3]> {
        let idx = self.indices.get(tri * 3..tri * 3 + 3)?;
        Some([
            self.world_vertex(idx[0] as usize)?,
            self.world_vertex(idx[1] as usize)?,
            self.world_vertex(idx[2] as usize)?,
        ])
    }
}

/// Normalize a raw picked triangle id to the even id of its face pair
pub fn face_pair_of(face_id: u32) -> u32 {
    2 * (face_id / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_layout() {
        let mesh = Mesh::cube(2.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.positions().iter().all(|c| c.abs() == 1.0));
        assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_right_face_pair_is_plus_x() {
        let mesh = Mesh::cube(2.0);
        // Right face is quad 4, triangles 8 and 9
        for &i in &mesh.indices()[8 * 3..10 * 3] {
            assert_eq!(mesh.vertex(i as usize).map(|v| v.x), Some(1.0));
        }
    }

    #[test]
    fn test_writes_bump_version() {
        let mut mesh = Mesh::cube(2.0);
        assert_eq!(mesh.version(), 0);
        let positions = mesh.positions().to_vec();
        mesh.set_positions(positions);
        mesh.set_orientation(Quat::IDENTITY);
        assert_eq!(mesh.version(), 2);
    }

    #[test]
    fn test_world_vertex_applies_orientation() {
        let q = Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI);
        let mesh = Mesh::cube(2.0).with_orientation(q);
        let local = mesh.vertex(16).unwrap();
        let world = mesh.world_vertex(16).unwrap();
        assert!((world.x + local.x).abs() < 1e-5);
        assert!((world.z + local.z).abs() < 1e-5);
    }

    #[test]
    fn test_face_pair_of() {
        assert_eq!(face_pair_of(0), 0);
        assert_eq!(face_pair_of(1), 0);
        assert_eq!(face_pair_of(9), 8);
        assert_eq!(face_pair_of(10), 10);
    }
}
