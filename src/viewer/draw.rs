//! Scene drawing: shaded mesh, face outlines, axes and the 2D overlay

use macroquad::models::{draw_mesh as draw_gpu_mesh, Mesh as GpuMesh, Vertex};
use macroquad::prelude::*;

use crate::feedback::CursorText;
use crate::gesture::{GestureMode, ModeToggles};
use crate::input::GestureKey;
use crate::math::Vec3 as MVec3;
use crate::mesh::{face_pair_of, Mesh};
use super::{to_glam, KeyMap};

const FACE_COLOR: (f32, f32, f32) = (0.85, 0.85, 0.85);
const HOVER_COLOR: (f32, f32, f32) = (0.77, 0.81, 0.93);
pub const BACKGROUND: Color = Color::new(0.95, 0.95, 0.95, 1.0);

/// Ambient plus a key light from the upper right, lighting both sides
fn light_intensity(normal: MVec3) -> f32 {
    let key = MVec3::new(6.0, 3.0, 0.0).normalize();
    (0.5 + 0.5 * normal.normalize().dot(key).abs()).clamp(0.0, 1.0)
}

fn shade(base: (f32, f32, f32), normal: MVec3) -> Color {
    let i = light_intensity(normal);
    Color::new(base.0 * i, base.1 * i, base.2 * i, 1.0)
}

/// Boundary edges of a face pair (the shared diagonal is left out)
pub fn face_outline(indices: &[u32], face_pair: u32) -> Vec<(u32, u32)> {
    let start = face_pair as usize * 3;
    let Some(pair) = start.checked_add(6).and_then(|end| indices.get(start..end)) else {
        return Vec::new();
    };

    let mut edges: Vec<(u32, u32)> = Vec::with_capacity(6);
    for tri in pair.chunks(3) {
        for k in 0..3 {
            edges.push((tri[k], tri[(k + 1) % 3]));
        }
    }
    edges
        .iter()
        .copied()
        .filter(|&(a, b)| {
            edges.iter().filter(|&&(c, d)| (c == a && d == b) || (c == b && d == a)).count() == 1
        })
        .collect()
}

/// Flat-shaded triangles, hovered face pair highlighted, black outlines
pub fn draw_scene_mesh(mesh: &Mesh, hovered_face_pair: Option<u32>) {
    let mut vertices = Vec::with_capacity(mesh.triangle_count() * 3);
    let mut indices = Vec::with_capacity(mesh.triangle_count() * 3);

    for tri in 0..mesh.triangle_count() {
        let Some([v0, v1, v2]) = mesh.world_triangle(tri) else {
            continue;
        };
        let hovered = hovered_face_pair == Some(face_pair_of(tri as u32));
        let base = if hovered { HOVER_COLOR } else { FACE_COLOR };
        let color = shade(base, (v1 - v0).cross(v2 - v0));

        // u16 index buffer
        if vertices.len() + 3 > u16::MAX as usize {
            break;
        }
        for v in [v0, v1, v2] {
            indices.push(vertices.len() as u16);
            vertices.push(Vertex::new(v.x, v.y, v.z, 0.0, 0.0, color));
        }
    }

    draw_gpu_mesh(&GpuMesh { vertices, indices, texture: None });

    for pair in (0..mesh.triangle_count() as u32).step_by(2) {
        for (a, b) in face_outline(mesh.indices(), pair) {
            if let (Some(p), Some(q)) = (mesh.world_vertex(a as usize), mesh.world_vertex(b as usize)) {
                draw_line_3d(to_glam(p), to_glam(q), BLACK);
            }
        }
    }
}

pub fn draw_axes(length: f32) {
    draw_line_3d(Vec3::ZERO, vec3(length, 0.0, 0.0), RED);
    draw_line_3d(Vec3::ZERO, vec3(0.0, length, 0.0), GREEN);
    draw_line_3d(Vec3::ZERO, vec3(0.0, 0.0, length), BLUE);
}

/// Key help line, e.g. "D: Undo | R: Reset | S: Scale | T: Rotate"
pub fn key_help(keymap: &KeyMap) -> String {
    let mut parts: Vec<String> = GestureKey::ALL
        .iter()
        .filter_map(|&command| keymap.name_for(command).map(|name| format!("{}: {}", name, command.label())))
        .collect();
    parts.push("RMB: Orbit".to_string());
    parts.push("Scroll: Zoom".to_string());
    parts.join(" | ")
}

/// Feedback text at its anchor, mode line and key help (screen space)
pub fn draw_overlay(feedback: &CursorText, keymap: &KeyMap, mode: GestureMode, toggles: ModeToggles) {
    if !feedback.is_empty() {
        draw_text(&feedback.text, feedback.anchor.0, feedback.anchor.1, 16.0, BLACK);
    }

    let status = match mode {
        GestureMode::None => format!("Click a face to {}", toggles.mode().label().to_lowercase()),
        active => active.label().to_string(),
    };
    draw_text(&status, 10.0, 20.0, 16.0, Color::from_rgba(60, 60, 70, 255));

    let help = key_help(keymap);
    let dims = measure_text(&help, None, 14, 1.0);
    draw_text(
        &help,
        (screen_width() - dims.width) / 2.0,
        screen_height() - 12.0,
        14.0,
        Color::from_rgba(100, 100, 110, 220),
    );
}
