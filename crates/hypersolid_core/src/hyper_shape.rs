//! Rigid 4D wireframe shape with accumulated plane rotations

use hypersolid_math::{RotationPlane, Vec4};

use crate::listener::{ListenerKey, ShapeEvent, ShapeListener, ShapeListeners};
use crate::projection::{flatten_segments, project_edges, LineSegment, LineVertex};
use crate::{Edge, RotationState, ShapeError};

/// A 4D polytope given by vertices and edges, plus its current orientation
///
/// The original vertices never change. Every rotation recomputes the derived
/// vertices from them, applying the six accumulated plane angles in
/// [`RotationPlane::APPLICATION_ORDER`], so floating-point error never
/// compounds across calls and two call sequences that reach the same angles
/// give the same result.
#[derive(Debug)]
pub struct HyperShape {
    original: Vec<Vec4>,
    edges: Vec<Edge>,
    rotations: RotationState,
    derived: Vec<Vec4>,
    listeners: ShapeListeners,
    /// Listeners moved out while an event is being delivered
    detached: usize,
}

/// Check vertices and edges, returning the first problem found
pub fn validate_shape(vertices: &[Vec4], edges: &[Edge]) -> Result<(), ShapeError> {
    if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(ShapeError::NonFiniteVertex { vertex });
    }
    for (i, edge) in edges.iter().enumerate() {
        edge.validate(i, vertices.len())?;
    }
    Ok(())
}

impl HyperShape {
    /// Create a shape from copies of `vertices` and `edges`
    ///
    /// Fails if an edge points outside the vertex list, joins a vertex to
    /// itself, or a vertex has a non-finite coordinate.
    pub fn new(vertices: &[Vec4], edges: &[Edge]) -> Result<Self, ShapeError> {
        validate_shape(vertices, edges)?;

        log::debug!(
            "Constructed shape with {} vertices and {} edges",
            vertices.len(),
            edges.len()
        );

        Ok(Self {
            original: vertices.to_vec(),
            edges: edges.to_vec(),
            rotations: RotationState::new(),
            derived: vertices.to_vec(),
            listeners: ShapeListeners::new(),
            detached: 0,
        })
    }

    /// Vertices as supplied at construction
    #[inline]
    pub fn original_vertices(&self) -> &[Vec4] {
        &self.original
    }

    /// Vertices under the current rotation
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.derived
    }

    /// Edge list, in construction order
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Current accumulated rotation
    #[inline]
    pub fn rotations(&self) -> &RotationState {
        &self.rotations
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.original.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add `delta` radians about `plane`, recompute, and fire [`ShapeEvent::Rotate`]
    ///
    /// A non-finite delta is ignored: nothing is recomputed and no event fires.
    pub fn rotate(&mut self, plane: RotationPlane, delta: f32) {
        if !self.rotations.add(plane, delta) {
            return;
        }
        self.apply_rotations();
        log::trace!("Rotated {} by {} (now {})", plane, delta, self.rotations.get(plane));
        self.emit(ShapeEvent::Rotate);
    }

    /// Replace the whole rotation state, recompute, and fire [`ShapeEvent::Rotate`]
    pub fn set_rotations(&mut self, rotations: RotationState) {
        self.rotations = rotations;
        self.apply_rotations();
        self.emit(ShapeEvent::Rotate);
    }

    /// Return to the unrotated orientation
    pub fn reset_rotation(&mut self) {
        self.set_rotations(RotationState::IDENTITY);
    }

    /// One 3D segment per edge, in edge order
    pub fn project(&self) -> Vec<LineSegment> {
        project_edges(&self.derived, &self.edges)
    }

    /// The projection as a flat `2·E` line-list
    pub fn project_vertices(&self) -> Vec<LineVertex> {
        flatten_segments(&self.project())
    }

    /// Register a listener for `event`
    ///
    /// Listeners run synchronously in registration order and receive the shape.
    pub fn on<L>(&mut self, event: ShapeEvent, listener: L) -> ListenerKey
    where
        L: ShapeListener + 'static,
    {
        self.listeners.insert(event, Box::new(listener))
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn off(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key)
    }

    /// Number of registered listeners, including while they are being notified
    pub fn listener_count(&self) -> usize {
        self.listeners.len() + self.detached
    }

    fn apply_rotations(&mut self) {
        self.derived.copy_from_slice(&self.original);
        for rotation in self.rotations.plane_rotations() {
            rotation.apply_all(&mut self.derived);
        }
    }

    fn emit(&mut self, event: ShapeEvent) {
        if self.listeners.is_empty() {
            return;
        }
        // Listeners borrow the shape immutably, so they are detached while running
        let mut listeners = std::mem::take(&mut self.listeners);
        self.detached = listeners.len();
        listeners.notify(event, self);
        self.detached = 0;
        self.listeners = listeners;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};
    use std::sync::{Arc, Mutex};

    fn square() -> (Vec<Vec4>, Vec<Edge>) {
        let verts = vec![
            Vec4::new(1.0, 1.0, 0.0, 0.0),
            Vec4::new(-1.0, 1.0, 0.0, 0.0),
            Vec4::new(-1.0, -1.0, 0.0, 0.0),
            Vec4::new(1.0, -1.0, 0.0, 0.0),
        ];
        let edges = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 0)];
        (verts, edges)
    }

    #[test]
    fn test_new_copies_input() {
        let (verts, edges) = square();
        let shape = HyperShape::new(&verts, &edges).unwrap();
        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.edge_count(), 4);
        assert_eq!(shape.vertices(), &verts[..]);
        assert_eq!(shape.original_vertices(), &verts[..]);
        assert!(shape.rotations().is_identity());
    }

    #[test]
    fn test_new_rejects_bad_edges() {
        let (verts, _) = square();
        assert!(matches!(
            HyperShape::new(&verts, &[Edge::new(0, 4)]),
            Err(ShapeError::EdgeOutOfRange { index: 4, .. })
        ));
        assert!(matches!(
            HyperShape::new(&verts, &[Edge::new(0, 1), Edge::new(2, 2)]),
            Err(ShapeError::SelfLoop { edge: 1, vertex: 2 })
        ));
    }

    #[test]
    fn test_new_rejects_nan_vertex() {
        let verts = [Vec4::ZERO, Vec4::new(0.0, f32::NAN, 0.0, 0.0)];
        assert_eq!(
            HyperShape::new(&verts, &[]).unwrap_err(),
            ShapeError::NonFiniteVertex { vertex: 1 }
        );
    }

    #[test]
    fn test_empty_shape_is_valid() {
        let mut shape = HyperShape::new(&[], &[]).unwrap();
        shape.rotate(RotationPlane::XY, 1.0);
        assert!(shape.vertices().is_empty());
        assert!(shape.project().is_empty());
    }

    #[test]
    fn test_rotate_keeps_original() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        shape.rotate(RotationPlane::XY, FRAC_PI_2);
        assert_eq!(shape.original_vertices(), &verts[..]);
        assert_eq!(shape.vertices().len(), verts.len());
        // (1, 1) -> (1, -1) under a standard quarter turn
        assert!(shape.vertices()[0].approx_eq(Vec4::new(1.0, -1.0, 0.0, 0.0), 0.0001));
    }

    #[test]
    fn test_full_turn_restores() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        shape.rotate(RotationPlane::XY, TAU);
        for (a, b) in shape.vertices().iter().zip(&verts) {
            assert!(a.approx_eq(*b, 0.0001));
        }
    }

    #[test]
    fn test_reset_rotation() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        shape.rotate(RotationPlane::XZ, 0.3);
        shape.rotate(RotationPlane::YW, 1.1);
        shape.reset_rotation();
        assert_eq!(shape.vertices(), &verts[..]);
    }

    #[test]
    fn test_listener_sees_updated_vertices() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        shape.on(ShapeEvent::Rotate, move |s: &HyperShape| {
            sink.lock().unwrap().push(s.rotations().get(RotationPlane::XW));
        });

        shape.rotate(RotationPlane::XW, PI);
        assert_eq!(*seen.lock().unwrap(), vec![PI]);
        assert_eq!(shape.listener_count(), 1);
    }

    #[test]
    fn test_off_stops_notifications() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let key = shape.on(ShapeEvent::Rotate, move |_: &HyperShape| {
            *counter.lock().unwrap() += 1;
        });

        shape.rotate(RotationPlane::XY, 0.1);
        assert!(shape.off(key));
        shape.rotate(RotationPlane::XY, 0.1);
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(!shape.off(key));
    }

    #[test]
    fn test_project_vertices_len() {
        let (verts, edges) = square();
        let shape = HyperShape::new(&verts, &edges).unwrap();
        assert_eq!(shape.project().len(), 4);
        assert_eq!(shape.project_vertices().len(), 8);
    }

    #[test]
    fn test_non_finite_rotate_is_silent() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        shape.on(ShapeEvent::Rotate, move |_: &HyperShape| {
            *counter.lock().unwrap() += 1;
        });

        shape.rotate(RotationPlane::XW, f32::NAN);
        shape.rotate(RotationPlane::XW, f32::INFINITY);
        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(shape.rotations().is_identity());
        assert_eq!(shape.vertices(), &verts[..]);
    }

    #[test]
    fn test_set_rotations_from_loaded_state() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();

        let state: RotationState = ron::from_str("(100.0, -3.0, 0.0, 0.0, 0.0, 0.0)").unwrap();
        shape.set_rotations(state);
        for (plane, angle) in shape.rotations().iter() {
            assert!((0.0..TAU).contains(&angle), "{} = {}", plane, angle);
        }

        let state: RotationState = ron::from_str("(NaN, 0.0, 0.0, 0.0, 0.0, 0.0)").unwrap();
        shape.set_rotations(state);
        assert!(shape.vertices().iter().all(|v| v.is_finite()));
        assert_eq!(shape.vertices(), &verts[..]);
    }

    #[test]
    fn test_listener_count_during_notify() {
        let (verts, edges) = square();
        let mut shape = HyperShape::new(&verts, &edges).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        shape.on(ShapeEvent::Rotate, move |s: &HyperShape| {
            sink.lock().unwrap().push(s.listener_count());
        });
        shape.on(ShapeEvent::Rotate, |_: &HyperShape| {});

        shape.rotate(RotationPlane::XY, 0.5);
        assert_eq!(*seen.lock().unwrap(), vec![2]);
        assert_eq!(shape.listener_count(), 2);
    }
}
