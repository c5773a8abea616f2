//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HYPERSOLID_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hypersolid_math::RotationPlane;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which shape to show
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Per-tick rotation
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Headless session settings
    #[serde(default)]
    pub session: SessionConfig,
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
    /// 3. Environment variables (`HYPERSOLID_*`)
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

        // HYPERSOLID_SHAPE__NAME=simplex -> shape.name = "simplex"
        figment = figment.merge(Env::prefixed("HYPERSOLID_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Shape selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Name of the shape to build at startup
    pub name: String,
    /// Optional RON shape library merged over the built-in shapes
    #[serde(default)]
    pub library: Option<String>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            name: "tesseract".to_string(),
            library: None,
        }
    }
}

/// Rotation applied on every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Angle added per tick, in radians (negative reverses direction)
    pub step: f32,
    /// Planes rotated each tick, in this order
    pub spin_planes: Vec<RotationPlane>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            step: std::f32::consts::PI / 600.0,
            spin_planes: vec![RotationPlane::XW, RotationPlane::YZ],
        }
    }
}

/// Headless session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of ticks to run
    pub ticks: u32,
    /// Print the final projection to stdout
    pub print_segments: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            print_segments: false,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), used when RUST_LOG is unset
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
