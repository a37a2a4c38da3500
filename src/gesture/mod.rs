//! Face gestures: state, snapshots, transforms and the event controller

mod controller;
mod snapshot;
mod state;
pub mod transform;

pub use controller::{GestureController, Scene, Unproject};
pub use snapshot::{MeshSnapshot, SnapshotStore};
pub use state::{ControllerState, GestureMode, GestureState, ModeToggles, Session};
pub use transform::TransformUpdate;
