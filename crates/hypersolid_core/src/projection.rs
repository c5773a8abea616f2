//! 4D → 3D projection to line segments
//!
//! Projection drops the w coordinate. The dropped value is kept on each
//! vertex as `w_depth` for renderers that want to tint or fade by w; nothing
//! here depends on it.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use hypersolid_math::Vec4;

use crate::Edge;

/// A projected line endpoint, laid out for direct upload as a line-list vertex buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct LineVertex {
    /// Position in 3D space (x, y, z of the 4D vertex)
    pub position: [f32; 3],
    /// The 4D vertex's w coordinate
    pub w_depth: f32,
}

impl From<Vec4> for LineVertex {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self {
            position: v.xyz(),
            w_depth: v.w,
        }
    }
}

/// One projected edge
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Index of the source edge
    pub edge: usize,
    pub start: LineVertex,
    pub end: LineVertex,
}

impl LineSegment {
    /// Length of the segment in 3D
    pub fn length(&self) -> f32 {
        let [ax, ay, az] = self.start.position;
        let [bx, by, bz] = self.end.position;
        ((bx - ax).powi(2) + (by - ay).powi(2) + (bz - az).powi(2)).sqrt()
    }
}

/// Project every edge, in edge order
///
/// Edges must already be validated against `vertices`.
pub(crate) fn project_edges(vertices: &[Vec4], edges: &[Edge]) -> Vec<LineSegment> {
    edges
        .iter()
        .enumerate()
        .map(|(i, e)| LineSegment {
            edge: i,
            start: vertices[e.a].into(),
            end: vertices[e.b].into(),
        })
        .collect()
}

/// Flatten segments into a `2·E` endpoint list (start, end, start, end, ...)
pub fn flatten_segments(segments: &[LineSegment]) -> Vec<LineVertex> {
    let mut out = Vec::with_capacity(segments.len() * 2);
    for s in segments {
        out.push(s.start);
        out.push(s.end);
    }
    out
}
