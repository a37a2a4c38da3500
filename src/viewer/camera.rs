//! Orbit camera around the origin

use std::f32::consts::PI;
use macroquad::prelude::*;

use crate::math::Vec3 as MVec3;
use super::to_glam;

const FOVY: f32 = 0.8;
const MIN_POLAR: f32 = 0.05;
const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 200.0;

/// Spherical camera: azimuth around +Y, polar angle from +Y, distance to target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub radius: f32,
    last_mouse: (f32, f32),
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: -PI / 2.5,
            polar: PI / 2.5,
            radius: 15.0,
            last_mouse: (0.0, 0.0),
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> MVec3 {
        MVec3::new(
            self.radius * self.azimuth.cos() * self.polar.sin(),
            self.radius * self.polar.cos(),
            self.radius * self.azimuth.sin() * self.polar.sin(),
        )
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * 0.005;
        self.polar = (self.polar - dy * 0.005).clamp(MIN_POLAR, PI - MIN_POLAR);
    }

    pub fn zoom(&mut self, scroll: f32) {
        if scroll.abs() > 0.1 {
            self.radius = (self.radius * (1.0 - scroll.signum() * 0.1)).clamp(MIN_RADIUS, MAX_RADIUS);
        }
    }

    /// Right-drag orbits, wheel zooms
    pub fn update_from_input(&mut self) {
        let mouse_pos = mouse_position();
        if is_mouse_button_down(MouseButton::Right) {
            self.orbit(mouse_pos.0 - self.last_mouse.0, mouse_pos.1 - self.last_mouse.1);
        }
        self.zoom(mouse_wheel().1);
        self.last_mouse = mouse_pos;
    }

    pub fn camera3d(&self, aspect: f32) -> Camera3D {
        Camera3D {
            position: to_glam(self.eye()),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: FOVY,
            aspect: Some(aspect),
            ..Default::default()
        }
    }

    /// Inverse of the matrix `camera3d` renders with
    pub fn inverse_view_projection(&self, aspect: f32) -> Mat4 {
        self.camera3d(aspect).matrix().inverse()
    }
}
