//! Core types for Hypersolid
//!
//! This crate holds the 4D wireframe engine:
//!
//! - [`RotationState`] - Six accumulated plane angles, kept in `[0, 2π)`
//! - [`HyperShape`] - Fixed vertices/edges plus their current rotated form
//! - [`Edge`] - Validated pair of vertex indices
//! - [`LineSegment`] / [`LineVertex`] - 3D projection output for renderers
//! - [`ShapeEvent`] / [`ShapeListener`] - Typed notifications fired by a shape
//! - [`ShapeLibrary`] / [`ShapeData`] - Named datasets (built-in and RON files)

mod rotation_state;
mod shape_error;
mod edge;
mod hyper_shape;
pub mod listener;
pub mod projection;
pub mod library;

pub use rotation_state::{normalize_angle, RotationState};
pub use shape_error::ShapeError;
pub use edge::Edge;
pub use hyper_shape::{validate_shape, HyperShape};
pub use listener::{ListenerKey, ShapeEvent, ShapeListener, ShapeListeners};
pub use projection::{flatten_segments, LineSegment, LineVertex};
pub use library::{LibraryError, ShapeData, ShapeLibrary, DEFAULT_HALF_SIZE};

// Re-export commonly used types from hypersolid_math for convenience
pub use hypersolid_math::{PlaneRotation, RotationPlane, Vec4};
