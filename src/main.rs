//! geom3d driver
//!
//! Builds the configured polyhedron, rotates it about the configured axis and
//! pivot, and prints the resulting vertices.

use geom3d::config::AppConfig;
use geom3d::Polyhedrond;

fn run(config: &AppConfig) -> Polyhedrond {
    let mut polyhedron = config.shape.build();
    log::info!("Built polyhedron with {} vertices", polyhedron.num_vertices());

    let rotation = &config.rotation;
    let axis = rotation.axis();
    if (axis.length() - 1.0).abs() > 1e-9 {
        log::warn!("Rotation axis {:?} is not unit length; result will be scaled", axis);
    }

    let pivot = rotation.pivot();
    let angle = rotation.angle_radians();
    for step in 0..rotation.steps {
        polyhedron.rotate(axis, pivot, angle);
        log::debug!("Step {}: {:?}", step + 1, polyhedron.vertices());
    }

    log::info!(
        "Rotated {} step(s) of {} degrees about {:?} through {:?}",
        rotation.steps,
        rotation.angle_degrees,
        axis,
        pivot
    );

    polyhedron
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (RUST_LOG still wins over the configured level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting geom3d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let polyhedron = run(&config);
    for (i, v) in polyhedron.vertices().iter().enumerate() {
        println!("{:>3}: ({:.6}, {:.6}, {:.6})", i, v.x, v.y, v.z);
    }
}
