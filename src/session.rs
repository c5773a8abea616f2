//! Viewing session
//!
//! A [`Session`] is the single owner of the current [`HyperShape`]. It plays
//! the role a render loop would: each tick applies the configured spin and
//! hands back that frame's projection. Switching datasets discards the old
//! shape, along with its rotation and listeners.

use hypersolid_core::{HyperShape, LibraryError, LineSegment, RotationPlane, ShapeLibrary};

use crate::config::{AppConfig, RotationConfig};

/// Owns the shape library and the shape currently on display
#[derive(Debug)]
pub struct Session {
    library: ShapeLibrary,
    shape_name: String,
    shape: HyperShape,
    step: f32,
    spin_planes: Vec<RotationPlane>,
    ticks: u64,
}

impl Session {
    /// Start a session showing `shape_name` from `library`
    pub fn new(
        library: ShapeLibrary,
        shape_name: &str,
        rotation: &RotationConfig,
    ) -> Result<Self, LibraryError> {
        let shape = library.build(shape_name)?;
        log::info!(
            "Showing '{}' ({} vertices, {} edges)",
            shape_name,
            shape.vertex_count(),
            shape.edge_count()
        );

        Ok(Self {
            library,
            shape_name: shape_name.to_string(),
            shape,
            step: rotation.step,
            spin_planes: rotation.spin_planes.clone(),
            ticks: 0,
        })
    }

    /// Build the library and initial shape described by `config`
    ///
    /// The built-in shapes are always present; a configured library file is
    /// merged over them.
    pub fn from_config(config: &AppConfig) -> Result<Self, LibraryError> {
        let mut library = ShapeLibrary::builtin();
        if let Some(path) = &config.shape.library {
            library.merge(ShapeLibrary::load(path)?);
        }
        Self::new(library, &config.shape.name, &config.rotation)
    }

    /// The shape currently on display
    #[inline]
    pub fn shape(&self) -> &HyperShape {
        &self.shape
    }

    /// Mutable access, e.g. to register listeners
    #[inline]
    pub fn shape_mut(&mut self) -> &mut HyperShape {
        &mut self.shape
    }

    /// Name of the shape currently on display
    #[inline]
    pub fn shape_name(&self) -> &str {
        &self.shape_name
    }

    #[inline]
    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    /// Number of ticks run so far
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Replace the current shape with a fresh one built from `name`
    ///
    /// On error the current shape is kept.
    pub fn switch_shape(&mut self, name: &str) -> Result<(), LibraryError> {
        let shape = self.library.build(name)?;
        log::info!("Switched from '{}' to '{}'", self.shape_name, name);
        self.shape = shape;
        self.shape_name = name.to_string();
        Ok(())
    }

    /// Rotate the current shape
    pub fn rotate(&mut self, plane: RotationPlane, delta: f32) {
        self.shape.rotate(plane, delta);
    }

    /// Apply one step about each spin plane, then project
    pub fn tick(&mut self) -> Vec<LineSegment> {
        for &plane in &self.spin_planes {
            self.shape.rotate(plane, self.step);
        }
        self.ticks += 1;
        self.shape.project()
    }
}
