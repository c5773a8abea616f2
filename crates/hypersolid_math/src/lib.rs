//! 4D Mathematics Library
//!
//! This crate provides the vector and rotation types for Hypersolid.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`RotationPlane`] - the six coordinate planes of 4-space and their rotation kernels
//! - [`PlaneRotation`] - a single-plane rotation with sine/cosine precomputed

mod vec4;
pub mod plane;

pub use vec4::Vec4;
pub use plane::{Axis, Handedness, ParsePlaneError, PlaneRotation, RotationPlane};
