//! boxsculpt: push, scale and turn the faces of a box with the mouse

pub mod config;
pub mod feedback;
pub mod gesture;
pub mod input;
pub mod math;
pub mod mesh;
pub mod viewer;
