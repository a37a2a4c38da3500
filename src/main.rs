//! boxsculpt: click a face of the box, then move the mouse to push it out,
//! scale it, or turn the box around the face's axis.
//!
//! Click again to keep the result. Undo goes back to the start of the
//! current gesture, reset to the box as it was when the program started.

use std::f32::consts::PI;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use log::{info, warn};
use macroquad::prelude::*;

use boxsculpt::config::GestureConfig;
use boxsculpt::math::{Quat, Vec3 as MVec3};
use boxsculpt::mesh::{Mesh, MeshId};
use boxsculpt::viewer::Viewer;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser)]
#[command(name = "boxsculpt", version, about = "Extrude, scale and rotate box faces with the mouse")]
struct Args {
    /// Config file (RON). Defaults to <config dir>/boxsculpt/config.ron when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the drag sensitivity from the config
    #[arg(long)]
    sensitivity: Option<f32>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("boxsculpt v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        sample_count: 4,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("boxsculpt").join("config.ron"))
}

/// `--config`, then the per-user file if it exists, then defaults
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> GestureConfig {
    use clap::Parser;

    let args = Args::parse();
    let path = args.config.or_else(|| default_config_path().filter(|p| p.exists()));

    let mut config = match path {
        Some(path) => match GestureConfig::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config {}: {}, using defaults", path.display(), e);
                GestureConfig::default()
            }
        },
        None => GestureConfig::default(),
    };

    if let Some(sensitivity) = args.sensitivity {
        let mut overridden = config.clone();
        overridden.drag_sensitivity = sensitivity;
        match overridden.validate() {
            Ok(()) => config = overridden,
            Err(e) => warn!("Ignoring --sensitivity: {}", e),
        }
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> GestureConfig {
    GestureConfig::default()
}

/// 2x2x2 box tipped forward 30 degrees; this pose is what reset returns to
fn initial_mesh() -> Mesh {
    Mesh::cube(2.0)
        .with_id(MeshId(1))
        .with_orientation(Quat::from_axis_angle(MVec3::X, PI / 6.0))
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();

    let viewer = match Viewer::new(initial_mesh(), &config) {
        Ok(viewer) => viewer,
        Err(e) => {
            warn!("Cannot start viewer: {}", e);
            return;
        }
    };

    viewer.run().await;
}
