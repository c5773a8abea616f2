//! Shape construction errors
//!
//! Every variant describes invalid input data. Shapes are validated once, at
//! construction, and never fail afterwards.

use std::fmt;

/// Error type for malformed shape data
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// An edge references a vertex index outside `0..vertex_count`
    EdgeOutOfRange {
        /// Position of the edge in the edge list
        edge: usize,
        /// The offending vertex index
        index: usize,
        /// Number of vertices in the shape
        vertex_count: usize,
    },
    /// An edge connects a vertex to itself
    SelfLoop {
        /// Position of the edge in the edge list
        edge: usize,
        /// The repeated vertex index
        vertex: usize,
    },
    /// A vertex has a NaN or infinite coordinate
    NonFiniteVertex {
        /// Position of the vertex in the vertex list
        vertex: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EdgeOutOfRange { edge, index, vertex_count } => write!(
                f,
                "Invalid shape input: edge {} references vertex {} but the shape has {} vertices",
                edge, index, vertex_count
            ),
            ShapeError::SelfLoop { edge, vertex } => write!(
                f,
                "Invalid shape input: edge {} connects vertex {} to itself",
                edge, vertex
            ),
            ShapeError::NonFiniteVertex { vertex } => write!(
                f,
                "Invalid shape input: vertex {} has a non-finite coordinate",
                vertex
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
