//! Desktop host for the gesture controller
//!
//! Owns the mesh, camera and cursor text. Each frame it picks under the
//! cursor, turns mouse/keyboard state into `InputEvent`s, feeds them to the
//! controller and redraws.

mod camera;
mod draw;
mod events;
mod keymap;
mod picking;

pub use camera::OrbitCamera;
pub use draw::{draw_axes, draw_overlay, draw_scene_mesh, face_outline, key_help};
pub use events::EventPoller;
pub use keymap::KeyMap;
pub use picking::{pick_mesh, ray_triangle_intersect, screen_to_ray, unproject_near, Ray};

use log::info;
use macroquad::prelude::*;

use crate::config::{ConfigError, GestureConfig};
use crate::feedback::CursorText;
use crate::gesture::{GestureController, Scene};
use crate::input::InputEvent;
use crate::math::Vec3 as MVec3;
use crate::mesh::Mesh;

const AXIS_LENGTH: f32 = 100.0;

pub(crate) fn to_glam(v: MVec3) -> Vec3 {
    vec3(v.x, v.y, v.z)
}

pub(crate) fn from_glam(v: Vec3) -> MVec3 {
    MVec3::new(v.x, v.y, v.z)
}

pub struct Viewer {
    mesh: Mesh,
    controller: GestureController,
    keymap: KeyMap,
    feedback: CursorText,
    camera: OrbitCamera,
    poller: EventPoller,
    events: Vec<InputEvent>,
}

impl Viewer {
    /// The mesh's current state becomes the reset baseline
    pub fn new(mesh: Mesh, config: &GestureConfig) -> Result<Self, ConfigError> {
        let keymap = KeyMap::from_bindings(&config.keys)?;
        let controller = GestureController::new(&mesh, config);
        info!(
            "Viewer ready: {} vertices, {} triangles, sensitivity {}",
            mesh.vertex_count(),
            mesh.triangle_count(),
            config.drag_sensitivity
        );

        Ok(Self {
            mesh,
            controller,
            keymap,
            feedback: CursorText::new(),
            camera: OrbitCamera::default(),
            poller: EventPoller::new(),
            events: Vec::new(),
        })
    }

    /// Process one frame of input and draw it
    pub fn frame(&mut self) {
        self.camera.update_from_input();

        let size = (screen_width(), screen_height());
        let aspect = size.0 / size.1.max(1.0);
        let inverse = self.camera.inverse_view_projection(aspect);

        let pick = screen_to_ray(inverse, mouse_position(), size).and_then(|ray| pick_mesh(&self.mesh, &ray));

        self.events.clear();
        self.poller.poll(&self.keymap, pick, &mut self.events);

        let unproject = |x: f32, y: f32| unproject_near(inverse, (x, y), size);
        for event in self.events.iter() {
            let mut scene = Scene {
                mesh: &mut self.mesh,
                feedback: &mut self.feedback,
                unproject: &unproject,
            };
            self.controller.handle(event, &mut scene);
        }

        clear_background(draw::BACKGROUND);

        set_camera(&self.camera.camera3d(aspect));
        draw_scene_mesh(&self.mesh, self.controller.hovered_face_pair());
        draw_axes(AXIS_LENGTH);

        set_default_camera();
        draw_overlay(&self.feedback, &self.keymap, self.controller.mode(), self.controller.toggles());
    }

    pub async fn run(mut self) {
        loop {
            self.frame();
            next_frame().await;
        }
    }
}
