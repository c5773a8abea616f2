//! Edges between shape vertices

use serde::{Serialize, Deserialize};

use crate::ShapeError;

/// An ordered pair of vertex indices
///
/// Serialized as a 2-tuple, e.g. `(0, 1)` in RON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge from `a` to `b`
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Both endpoints as an array
    #[inline]
    pub fn indices(&self) -> [usize; 2] {
        [self.a, self.b]
    }

    /// Check this edge against a vertex count
    ///
    /// `position` is the edge's index in its list and is only used for error reporting.
    pub fn validate(&self, position: usize, vertex_count: usize) -> Result<(), ShapeError> {
        for index in self.indices() {
            if index >= vertex_count {
                return Err(ShapeError::EdgeOutOfRange { edge: position, index, vertex_count });
            }
        }
        if self.a == self.b {
            return Err(ShapeError::SelfLoop { edge: position, vertex: self.a });
        }
        Ok(())
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<[usize; 2]> for Edge {
    fn from([a, b]: [usize; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.a, edge.b)
    }
}
