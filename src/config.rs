//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`G3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use geom3d_math::{Polyhedrond, Vector3};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Polyhedron to build
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Rotation to apply
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`G3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // G3D_ROTATION__ANGLE_DEGREES=90 -> rotation.angle_degrees = 90
        figment = figment.merge(Env::prefixed("G3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Shape configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Vertex list; empty (or fewer than four points) selects the default tetrahedron
    #[serde(default)]
    pub vertices: Vec<[f64; 3]>,
}

impl ShapeConfig {
    /// Build the configured polyhedron
    pub fn build(&self) -> Polyhedrond {
        if self.vertices.is_empty() {
            return Polyhedrond::new();
        }
        let points: Vec<Vector3<f64>> = self.vertices.iter().map(|&v| v.into()).collect();
        Polyhedrond::from_points(&points)
    }
}

/// Rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Rotation axis direction [x, y, z]
    pub axis: [f64; 3],
    /// Pivot point the axis passes through [x, y, z]
    pub pivot: [f64; 3],
    /// Angle per step in degrees
    pub angle_degrees: f64,
    /// Number of times the rotation is applied
    pub steps: u32,
    /// Scale the axis to unit length before rotating
    pub normalize_axis: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            axis: [0.0, 0.0, 1.0],
            pivot: [0.0, 0.0, 0.0],
            angle_degrees: 90.0,
            steps: 1,
            normalize_axis: true,
        }
    }
}

impl RotationConfig {
    /// Axis as a vector, normalized if requested
    pub fn axis(&self) -> Vector3<f64> {
        let axis = Vector3::from(self.axis);
        if self.normalize_axis {
            axis.normalized()
        } else {
            axis
        }
    }

    /// Pivot as a vector
    pub fn pivot(&self) -> Vector3<f64> {
        Vector3::from(self.pivot)
    }

    /// Angle per step in radians
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
