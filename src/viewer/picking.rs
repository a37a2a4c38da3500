//! Screen-space picking and unprojection
//!
//! Rays come from the inverse of the camera's view-projection matrix, so they
//! match whatever macroquad draws. Mesh triangles are tested in world space
//! (mesh orientation applied).

use macroquad::math::{vec3, Mat4};

use crate::input::PickHit;
use crate::math::Vec3;
use crate::mesh::Mesh;
use super::from_glam;

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// Pixel position to normalized device coordinates (y up)
fn screen_to_ndc(screen: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    let w = size.0.max(1.0);
    let h = size.1.max(1.0);
    (2.0 * screen.0 / w - 1.0, 1.0 - 2.0 * screen.1 / h)
}

/// Point on the near clip plane under a screen position
pub fn unproject_near(inverse_view_proj: Mat4, screen: (f32, f32), size: (f32, f32)) -> Vec3 {
    let (nx, ny) = screen_to_ndc(screen, size);
    from_glam(inverse_view_proj.project_point3(vec3(nx, ny, -1.0)))
}

/// Ray from the near plane through the far plane under a screen position.
/// None if the matrix is singular.
pub fn screen_to_ray(inverse_view_proj: Mat4, screen: (f32, f32), size: (f32, f32)) -> Option<Ray> {
    let (nx, ny) = screen_to_ndc(screen, size);
    let near = from_glam(inverse_view_proj.project_point3(vec3(nx, ny, -1.0)));
    let far = from_glam(inverse_view_proj.project_point3(vec3(nx, ny, 1.0)));
    let direction = far - near;

    if !near.is_finite() || !direction.is_finite() || direction.len() == 0.0 {
        return None;
    }
    Some(Ray::new(near, direction))
}

/// Ray-triangle intersection using Möller–Trumbore algorithm.
/// Returns the distance along the ray. Both triangle sides count as hits.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 0.0000001;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Nearest triangle of `mesh` hit by `ray`; the face id is the triangle index
pub fn pick_mesh(mesh: &Mesh, ray: &Ray) -> Option<PickHit> {
    let mut nearest: Option<(u32, f32)> = None;

    for tri in 0..mesh.triangle_count() {
        let Some([v0, v1, v2]) = mesh.world_triangle(tri) else {
            continue;
        };
        if let Some(t) = ray_triangle_intersect(ray, v0, v1, v2) {
            if nearest.map_or(true, |(_, best)| t < best) {
                nearest = Some((tri as u32, t));
            }
        }
    }

    nearest.map(|(face_id, _)| PickHit { mesh: mesh.id(), face_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quat;
    use crate::viewer::to_glam;

    const SIZE: (f32, f32) = (800.0, 600.0);

    /// Camera on +Z looking at the origin, same matrices as a perspective `Camera3D`
    fn front_view() -> Mat4 {
        let projection = Mat4::perspective_rh_gl(0.8, SIZE.0 / SIZE.1, 0.01, 10000.0);
        let view = Mat4::look_at_rh(to_glam(Vec3::new(0.0, 0.0, 10.0)), to_glam(Vec3::ZERO), to_glam(Vec3::Y));
        (projection * view).inverse()
    }

    #[test]
    fn test_ray_direction_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert!((ray.direction.len() - 1.0).abs() < 0.001);
        assert!(ray.direction.y.abs() < 0.001);
    }

    #[test]
    fn test_center_ray_points_forward() {
        let ray = screen_to_ray(front_view(), (400.0, 300.0), SIZE).unwrap();
        assert!(ray.origin.x.abs() < 0.001 && ray.origin.y.abs() < 0.001);
        assert!((ray.direction.z + 1.0).abs() < 0.001, "dir={:?}", ray.direction);
    }

    #[test]
    fn test_unproject_near_follows_cursor() {
        let inv = front_view();
        let left = unproject_near(inv, (300.0, 300.0), SIZE);
        let right = unproject_near(inv, (500.0, 300.0), SIZE);
        let up = unproject_near(inv, (400.0, 200.0), SIZE);
        assert!(right.x > left.x);
        assert!(up.y > 0.0);
        // Near plane sits 0.01 in front of the eye
        assert!((left.z - 9.99).abs() < 0.01, "z={}", left.z);
    }

    #[test]
    fn test_triangle_hit_and_miss() {
        let ray = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray_triangle_intersect(&ray, Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((t.unwrap() - 5.0).abs() < 0.001);

        let away = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(ray_triangle_intersect(&away, Vec3::ZERO, Vec3::X, Vec3::Y).is_none());

        let outside = Ray::new(Vec3::new(0.8, 0.8, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_triangle_intersect(&outside, Vec3::ZERO, Vec3::X, Vec3::Y).is_none());
    }

    #[test]
    fn test_pick_front_face() {
        let mesh = Mesh::cube(2.0);
        let ray = screen_to_ray(front_view(), (410.0, 290.0), SIZE).unwrap();
        let hit = pick_mesh(&mesh, &ray).unwrap();
        // Front (+Z) quad is triangles 0 and 1; the back face is farther away
        assert!(hit.face_id < 2, "face_id={}", hit.face_id);
    }

    #[test]
    fn test_pick_uses_orientation() {
        // Quarter turn about Y brings the -X (left) face to the front
        let mesh = Mesh::cube(2.0).with_orientation(Quat::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_2));
        let ray = screen_to_ray(front_view(), (410.0, 290.0), SIZE).unwrap();
        let hit = pick_mesh(&mesh, &ray).unwrap();
        assert!(hit.face_id == 10 || hit.face_id == 11, "face_id={}", hit.face_id);
    }

    #[test]
    fn test_pick_miss() {
        let mesh = Mesh::cube(2.0);
        let ray = screen_to_ray(front_view(), (5.0, 5.0), SIZE).unwrap();
        assert!(pick_mesh(&mesh, &ray).is_none());
    }
}
