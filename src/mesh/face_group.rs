//! Vertex group resolution for a face pair
//!
//! A face pair is two triangles forming one planar quad. Resolving it yields
//! the quad's 4 vertex indices, their positions, the mean center and an
//! axis-mask normal.
//!
//! The axis-mask normal is the face normal with every component made
//! non-negative. It selects which world axes an extrusion affects and is not
//! an outward direction: the -X and +X faces both resolve to (1, 0, 0).

use crate::math::Vec3;
use super::small_set::SmallSet;

/// Resolved quad of a face pair, cached for the duration of a gesture
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGroup {
    /// Even id of the first triangle of the pair
    pub face_pair: u32,
    /// The 4 unique vertex indices, in index-buffer order
    pub indices: [u32; 4],
    /// Positions of `indices`, same order
    pub positions: [Vec3; 4],
    /// Arithmetic mean of `positions`
    pub center: Vec3,
    /// Unit normal with absolute-valued components
    pub axis_mask: Vec3,
}

impl FaceGroup {
    pub fn contains(&self, vertex: u32) -> bool {
        self.indices.contains(&vertex)
    }
}

/// Resolve the face pair starting at triangle `face_pair` (must be even).
///
/// Returns `None` on degenerate input: triangles outside the index buffer,
/// indices outside the position buffer, anything but 4 unique indices, fewer
/// than 3 distinct positions, or a zero-area normal triangle.
pub fn resolve_face_group(face_pair: u32, indices: &[u32], positions: &[f32]) -> Option<FaceGroup> {
    let start = (face_pair as usize).checked_mul(3)?;
    let pair = indices.get(start..start.checked_add(6)?)?;

    let unique: SmallSet<u32, 6> = pair.iter().copied().collect();
    if unique.len() != 4 {
        return None;
    }

    let mut group_indices = [0u32; 4];
    let mut group_positions = [Vec3::ZERO; 4];
    for (slot, &index) in unique.iter().enumerate() {
        group_indices[slot] = index;
        group_positions[slot] = Vec3::from_slice(positions, index as usize)?;
    }

    let mut distinct: SmallSet<[u32; 3], 4> = SmallSet::new();
    let mut normal_basis = [Vec3::ZERO; 3];
    for p in group_positions.iter() {
        let bits = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        let slot = distinct.len();
        if distinct.insert(bits) && slot < 3 {
            normal_basis[slot] = *p;
        }
    }
    if distinct.len() < 3 {
        return None;
    }

    let sum = group_positions.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    let center = sum * (1.0 / 4.0);

    let [v0, v1, v2] = normal_basis;
    let normal = (v2 - v0).cross(v1 - v0);
    if normal.len() == 0.0 || !normal.is_finite() {
        return None;
    }
    let axis_mask = normal.normalize().abs();

    Some(FaceGroup {
        face_pair,
        indices: group_indices,
        positions: group_positions,
        center,
        axis_mask,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    fn resolve(mesh: &Mesh, pair: u32) -> Option<FaceGroup> {
        resolve_face_group(pair, mesh.indices(), mesh.positions())
    }

    #[test]
    fn test_cube_faces_resolve_to_coplanar_quads() {
        let mesh = Mesh::cube(2.0);
        for pair in (0..12).step_by(2) {
            let group = resolve(&mesh, pair).expect("cube face should resolve");

            let mut sorted = group.indices;
            sorted.sort();
            sorted.windows(2).for_each(|w| assert_ne!(w[0], w[1]));

            // Coplanar: every corner lies in the plane through the first three
            let [a, b, c, d] = group.positions;
            let n = (b - a).cross(c - a);
            assert!(n.dot(d - a).abs() < 1e-5, "pair {} not planar", pair);
        }
    }

    #[test]
    fn test_plus_x_face() {
        let mesh = Mesh::cube(2.0);
        let group = resolve(&mesh, 8).unwrap();
        assert!(group.positions.iter().all(|p| p.x == 1.0));
        assert_eq!(group.center, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(group.axis_mask, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_opposite_faces_share_mask() {
        let mesh = Mesh::cube(2.0);
        let right = resolve(&mesh, 8).unwrap();
        let left = resolve(&mesh, 10).unwrap();
        assert_eq!(right.axis_mask, left.axis_mask);
    }

    #[test]
    fn test_mask_non_negative_on_skewed_hexahedron() {
        let corners = [
            Vec3::new(-1.0, -1.2, -0.8),
            Vec3::new(1.3, -0.9, -1.1),
            Vec3::new(-0.7, 1.1, -1.0),
            Vec3::new(1.0, 1.4, -0.6),
            Vec3::new(-1.1, -1.0, 1.2),
            Vec3::new(0.9, -1.3, 0.9),
            Vec3::new(-1.2, 0.8, 1.0),
            Vec3::new(1.1, 1.0, 1.3),
        ];
        let mesh = Mesh::hexahedron(corners);
        for pair in (0..12).step_by(2) {
            let group = resolve(&mesh, pair).unwrap();
            let m = group.axis_mask;
            assert!(m.x >= 0.0 && m.y >= 0.0 && m.z >= 0.0, "pair {}: {:?}", pair, m);
            assert!((m.len() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_center_is_mean() {
        let mesh = Mesh::cube(4.0);
        let group = resolve(&mesh, 4).unwrap();
        let mean = group.positions.iter().fold(Vec3::ZERO, |acc, p| acc + *p) * 0.25;
        assert_eq!(group.center, mean);
        assert_eq!(group.center, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_out_of_range_pair() {
        let mesh = Mesh::cube(2.0);
        assert!(resolve(&mesh, 12).is_none());
        assert!(resolve(&mesh, u32::MAX - 1).is_none());
    }

    #[test]
    fn test_collapsed_positions_rejected() {
        // Four distinct indices but only two distinct positions
        let positions = vec![
            0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        assert!(resolve_face_group(0, &indices, &positions).is_none());
    }

    #[test]
    fn test_three_unique_indices_rejected() {
        let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = vec![0, 1, 2, 0, 1, 2];
        assert!(resolve_face_group(0, &indices, &positions).is_none());
    }

    #[test]
    fn test_index_past_positions_rejected() {
        let positions = vec![0.0; 9];
        let indices = vec![0, 1, 2, 0, 2, 7];
        assert!(resolve_face_group(0, &indices, &positions).is_none());
    }
}
