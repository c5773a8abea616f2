//! Coordinate-plane rotations in 4D
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Each single-plane rotation changes only the two coordinates named by the
//! plane and leaves the other two untouched. With `s = sin θ`, `c = cos θ`
//! and the plane's axes `(a, b)`:
//!
//! | plane | a'          | b'           |
//! |-------|-------------|--------------|
//! | XY    | c·x + s·y   | −s·x + c·y   |
//! | XZ    | c·x + s·z   | −s·x + c·z   |
//! | XW    | c·x + s·w   | −s·x + c·w   |
//! | YZ    | c·y + s·z   | −s·y + c·z   |
//! | YW    | c·y − s·w   | s·y + c·w    |
//! | ZW    | c·z − s·w   | s·z + c·w    |
//!
//! YW and ZW turn the opposite way from the other four planes for the same
//! positive angle. Callers that drive rotations from input rely on this table,
//! so it is kept as is rather than unified.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// One of the coordinate axes of 4-space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - yaw-like turn of the visible 3D slice
    XY,
    /// XZ plane
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

/// Sense of a plane rotation relative to the standard `a' = c·a + s·b` form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    /// `a' = c·a + s·b`, `b' = −s·a + c·b`
    Standard,
    /// `a' = c·a − s·b`, `b' = s·a + c·b`
    Flipped,
}

impl RotationPlane {
    /// All planes in storage order. Indexes returned by [`RotationPlane::index`]
    /// refer to this array.
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Order in which accumulated plane rotations are composed.
    ///
    /// Rotations in different planes do not commute, so every consumer must
    /// apply them in this exact sequence to get the same orientation for the
    /// same set of angles.
    pub const APPLICATION_ORDER: [RotationPlane; 6] = [
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
        RotationPlane::XY,
        RotationPlane::XZ,
    ];

    /// Position of this plane in [`RotationPlane::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    /// Lowercase name, as used in datasets and config files
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }

    /// The two axes spanning this plane
    pub const fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::XW => (Axis::X, Axis::W),
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::YW => (Axis::Y, Axis::W),
            RotationPlane::ZW => (Axis::Z, Axis::W),
        }
    }

    /// Sign convention used by this plane's rotation
    pub const fn handedness(self) -> Handedness {
        match self {
            RotationPlane::YW | RotationPlane::ZW => Handedness::Flipped,
            _ => Handedness::Standard,
        }
    }

    /// Rotate `v` in this plane given a precomputed sine and cosine
    ///
    /// Pure: returns a new vector, only the plane's two coordinates differ.
    #[inline]
    pub fn rotate_sc(self, v: Vec4, s: f32, c: f32) -> Vec4 {
        match self {
            RotationPlane::XY => Vec4::new(c * v.x + s * v.y, -s * v.x + c * v.y, v.z, v.w),
            RotationPlane::XZ => Vec4::new(c * v.x + s * v.z, v.y, -s * v.x + c * v.z, v.w),
            RotationPlane::XW => Vec4::new(c * v.x + s * v.w, v.y, v.z, -s * v.x + c * v.w),
            RotationPlane::YZ => Vec4::new(v.x, c * v.y + s * v.z, -s * v.y + c * v.z, v.w),
            RotationPlane::YW => Vec4::new(v.x, c * v.y - s * v.w, v.z, s * v.y + c * v.w),
            RotationPlane::ZW => Vec4::new(v.x, v.y, c * v.z - s * v.w, s * v.z + c * v.w),
        }
    }

    /// Rotate `v` by `angle` radians in this plane
    #[inline]
    pub fn rotate(self, v: Vec4, angle: f32) -> Vec4 {
        let (s, c) = angle.sin_cos();
        self.rotate_sc(v, s, c)
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a plane name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlaneError(String);

impl fmt::Display for ParsePlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown rotation plane '{}' (expected one of xy, xz, xw, yz, yw, zw)", self.0)
    }
}

impl std::error::Error for ParsePlaneError {}

impl FromStr for RotationPlane {
    type Err = ParsePlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        RotationPlane::ALL
            .iter()
            .copied()
            .find(|p| p.name() == lower)
            .ok_or_else(|| ParsePlaneError(s.to_string()))
    }
}

/// A single-plane rotation with its sine and cosine precomputed
///
/// Used when the same rotation is applied to every vertex of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    pub plane: RotationPlane,
    sin: f32,
    cos: f32,
}

impl PlaneRotation {
    /// Create a rotation of `angle` radians in `plane`
    pub fn new(plane: RotationPlane, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { plane, sin, cos }
    }

    /// Apply to a single vector
    #[inline]
    pub fn apply(&self, v: Vec4) -> Vec4 {
        self.plane.rotate_sc(v, self.sin, self.cos)
    }

    /// Apply in place to every vector in the slice
    pub fn apply_all(&self, vertices: &mut [Vec4]) {
        for v in vertices.iter_mut() {
            *v = self.apply(*v);
        }
    }
}
