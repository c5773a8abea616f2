//! Named shape datasets
//!
//! A [`ShapeLibrary`] maps identifiers such as `"tesseract"` to raw
//! [`ShapeData`]. Libraries can be built in code or loaded from RON files of
//! the form:
//!
//! ```text
//! {
//!     "pentachoron": (
//!         vertices: [(x: 50.0, y: 50.0, z: 50.0, w: -50.0), ...],
//!         edges: [(0, 1), (0, 2), ...],
//!     ),
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};
use hypersolid_math::Vec4;

use crate::hyper_shape::validate_shape;
use crate::{Edge, HyperShape, ShapeError};

/// Coordinate magnitude used by the built-in shapes
pub const DEFAULT_HALF_SIZE: f32 = 50.0;

/// Raw vertex/edge data for one shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeData {
    pub vertices: Vec<Vec4>,
    pub edges: Vec<Edge>,
}

impl ShapeData {
    /// Create shape data from vertices and edges
    pub fn new(vertices: Vec<Vec4>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Tesseract with vertices at `±half_size` on every axis
    ///
    /// Vertex `i` takes the negative value on x, y, z, w when bits 3, 2, 1, 0
    /// of `i` are set. Edges join vertices differing in one bit, listed in
    /// ascending `(a, b)` order: 32 in total.
    pub fn tesseract(half_size: f32) -> Self {
        let h = half_size;
        let sign = |i: usize, bit: usize| if i & bit == 0 { h } else { -h };
        let vertices = (0..16)
            .map(|i| Vec4::new(sign(i, 8), sign(i, 4), sign(i, 2), sign(i, 1)))
            .collect();

        let mut edges = Vec::with_capacity(32);
        for i in 0..16 {
            for bit in [1, 2, 4, 8] {
                let j = i | bit;
                if j != i {
                    edges.push(Edge::new(i, j));
                }
            }
        }

        Self { vertices, edges }
    }

    /// Regular 5-cell (4-simplex)
    ///
    /// Four vertices sit on the `w = -half_size` cell at alternating corners
    /// of the cube, the fifth on the w axis at `half_size·(√5 − 1)`. Every
    /// pair of vertices is joined: 10 edges.
    pub fn simplex(half_size: f32) -> Self {
        let h = half_size;
        let vertices = vec![
            Vec4::new(h, h, h, -h),
            Vec4::new(h, -h, -h, -h),
            Vec4::new(-h, h, -h, -h),
            Vec4::new(-h, -h, h, -h),
            Vec4::new(0.0, 0.0, 0.0, h * 5.0_f32.sqrt() - h),
        ];

        let mut edges = Vec::with_capacity(10);
        for a in 0..5 {
            for b in (a + 1)..5 {
                edges.push(Edge::new(a, b));
            }
        }

        Self { vertices, edges }
    }

    /// Check the data without building a shape
    pub fn validate(&self) -> Result<(), ShapeError> {
        validate_shape(&self.vertices, &self.edges)
    }

    /// Build a [`HyperShape`] from this data
    pub fn build(&self) -> Result<HyperShape, ShapeError> {
        HyperShape::new(&self.vertices, &self.edges)
    }
}

/// A collection of named shape datasets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeLibrary {
    shapes: BTreeMap<String, ShapeData>,
}

impl ShapeLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding `tesseract` and `simplex`
    pub fn builtin() -> Self {
        let mut shapes = BTreeMap::new();
        shapes.insert("tesseract".to_string(), ShapeData::tesseract(DEFAULT_HALF_SIZE));
        shapes.insert("simplex".to_string(), ShapeData::simplex(DEFAULT_HALF_SIZE));
        Self { shapes }
    }

    /// Parse a library from RON text, validating every shape
    pub fn from_ron_str(source: &str) -> Result<Self, LibraryError> {
        let library: Self = ron::from_str(source)?;
        library.validate()?;
        Ok(library)
    }

    /// Load a library from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let library = Self::from_ron_str(&contents)?;
        log::debug!("Loaded {} shapes from {}", library.len(), path.display());
        Ok(library)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(false)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty)
    }

    /// Save to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LibraryError> {
        let contents = self.to_ron_string().map_err(LibraryError::Serialize)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add or replace a shape after validating it
    pub fn insert(&mut self, name: impl Into<String>, data: ShapeData) -> Result<(), LibraryError> {
        let name = name.into();
        data.validate().map_err(|source| LibraryError::Shape { name: name.clone(), source })?;
        self.shapes.insert(name, data);
        Ok(())
    }

    /// Add every shape of `other`, replacing shapes with the same name
    pub fn merge(&mut self, other: ShapeLibrary) {
        self.shapes.extend(other.shapes);
    }

    /// Look up a shape's data
    pub fn get(&self, name: &str) -> Option<&ShapeData> {
        self.shapes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Shape names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Build a fresh [`HyperShape`] from the named dataset
    pub fn build(&self, name: &str) -> Result<HyperShape, LibraryError> {
        let data = self
            .get(name)
            .ok_or_else(|| LibraryError::UnknownShape(name.to_string()))?;
        data.build()
            .map_err(|source| LibraryError::Shape { name: name.to_string(), source })
    }

    fn validate(&self) -> Result<(), LibraryError> {
        for (name, data) in &self.shapes {
            data.validate()
                .map_err(|source| LibraryError::Shape { name: name.clone(), source })?;
        }
        Ok(())
    }
}

/// Error loading, saving, or building from a shape library
#[derive(Debug)]
pub enum LibraryError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax or shape layout)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
    /// No shape with this name
    UnknownShape(String),
    /// A named shape has invalid data
    Shape { name: String, source: ShapeError },
}

impl From<io::Error> for LibraryError {
    fn from(e: io::Error) -> Self {
        LibraryError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LibraryError {
    fn from(e: ron::error::SpannedError) -> Self {
        LibraryError::Parse(e)
    }
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::Io(e) => write!(f, "IO error: {}", e),
            LibraryError::Parse(e) => write!(f, "Parse error: {}", e),
            LibraryError::Serialize(e) => write!(f, "Serialization error: {}", e),
            LibraryError::UnknownShape(name) => write!(f, "Unknown shape: '{}'", name),
            LibraryError::Shape { name, source } => write!(f, "Shape '{}': {}", name, source),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Io(e) => Some(e),
            LibraryError::Parse(e) => Some(e),
            LibraryError::Serialize(e) => Some(e),
            LibraryError::UnknownShape(_) => None,
            LibraryError::Shape { source, .. } => Some(source),
        }
    }
}
