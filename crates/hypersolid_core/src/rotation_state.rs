//! Accumulated rotation angles, one per coordinate plane

use std::f32::consts::TAU;

use serde::{Serialize, Deserialize};
use hypersolid_math::{PlaneRotation, RotationPlane, Vec4};

/// Running rotation totals for the six planes of 4-space
///
/// Every stored angle lies in `[0, 2π)`. Deltas are reduced with a floor-style
/// modulo, so negative deltas wrap around instead of going negative.
///
/// The serialized form is the bare six-angle tuple in [`RotationPlane::ALL`]
/// order. Loaded angles are normalized and non-finite ones read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 6]", into = "[f32; 6]")]
pub struct RotationState {
    /// Angles indexed by [`RotationPlane::index`]
    angles: [f32; 6],
}

/// Reduce an angle into `[0, 2π)`
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let r = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU { 0.0 } else { r }
}

impl RotationState {
    /// All six angles at zero
    pub const IDENTITY: Self = Self { angles: [0.0; 6] };

    /// Create a state with every angle at zero
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Add `delta` radians to the angle of `plane`
    ///
    /// Non-finite deltas are ignored so the state stays bounded. Returns
    /// whether the delta was applied.
    pub fn add(&mut self, plane: RotationPlane, delta: f32) -> bool {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite rotation delta {} for plane {}", delta, plane);
            return false;
        }
        let slot = &mut self.angles[plane.index()];
        *slot = normalize_angle(*slot + delta);
        true
    }

    /// Current angle of `plane`, in `[0, 2π)`
    #[inline]
    pub fn get(&self, plane: RotationPlane) -> f32 {
        self.angles[plane.index()]
    }

    /// Overwrite the angle of `plane` (normalized)
    ///
    /// Returns false, leaving the angle alone, if `angle` is not finite.
    pub fn set(&mut self, plane: RotationPlane, angle: f32) -> bool {
        if !angle.is_finite() {
            log::warn!("Ignoring non-finite rotation angle {} for plane {}", angle, plane);
            return false;
        }
        self.angles[plane.index()] = normalize_angle(angle);
        true
    }

    /// All six angles in [`RotationPlane::ALL`] order
    #[inline]
    pub fn angles(&self) -> [f32; 6] {
        self.angles
    }

    /// Zero every angle
    pub fn reset(&mut self) {
        self.angles = [0.0; 6];
    }

    /// True when every angle is zero
    pub fn is_identity(&self) -> bool {
        self.angles.iter().all(|&a| a == 0.0)
    }

    /// Iterate `(plane, angle)` pairs in [`RotationPlane::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, f32)> + '_ {
        RotationPlane::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// The six single-plane rotations, in [`RotationPlane::APPLICATION_ORDER`]
    pub fn plane_rotations(&self) -> [PlaneRotation; 6] {
        RotationPlane::APPLICATION_ORDER.map(|p| PlaneRotation::new(p, self.get(p)))
    }

    /// Apply the composed rotation to a single vector
    pub fn apply(&self, v: Vec4) -> Vec4 {
        self.plane_rotations().iter().fold(v, |acc, r| r.apply(acc))
    }
}

impl From<[f32; 6]> for RotationState {
    fn from(angles: [f32; 6]) -> Self {
        let angles = angles.map(|a| if a.is_finite() { normalize_angle(a) } else { 0.0 });
        Self { angles }
    }
}

impl From<RotationState> for [f32; 6] {
    fn from(state: RotationState) -> Self {
        state.angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_starts_at_zero() {
        let state = RotationState::new();
        for plane in RotationPlane::ALL {
            assert_eq!(state.get(plane), 0.0);
        }
        assert!(state.is_identity());
    }

    #[test]
    fn test_add_accumulates() {
        let mut state = RotationState::new();
        state.add(RotationPlane::XW, 0.5);
        state.add(RotationPlane::XW, 0.25);
        assert!((state.get(RotationPlane::XW) - 0.75).abs() < EPSILON);
        assert_eq!(state.get(RotationPlane::XY), 0.0);
    }

    #[test]
    fn test_add_wraps_past_full_turn() {
        let mut state = RotationState::new();
        state.add(RotationPlane::YZ, 3.0 * PI);
        assert!((state.get(RotationPlane::YZ) - PI).abs() < EPSILON);
    }

    #[test]
    fn test_negative_delta_wraps_non_negative() {
        let mut state = RotationState::new();
        state.add(RotationPlane::ZW, -FRAC_PI_2);
        let angle = state.get(RotationPlane::ZW);
        assert!(angle >= 0.0);
        assert!((angle - 3.0 * FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_full_turn_returns_to_zero() {
        let mut state = RotationState::new();
        state.add(RotationPlane::XY, TAU);
        assert_eq!(state.get(RotationPlane::XY), 0.0);
    }

    #[test]
    fn test_tiny_negative_stays_below_tau() {
        let angle = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&angle), "got {}", angle);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut state = RotationState::new();
        assert!(state.add(RotationPlane::XW, 1.0));
        assert!(!state.add(RotationPlane::XW, f32::NAN));
        assert!(!state.add(RotationPlane::XW, f32::INFINITY));
        assert!(!state.set(RotationPlane::XW, f32::NEG_INFINITY));
        assert!((state.get(RotationPlane::XW) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_and_reset() {
        let mut state = RotationState::new();
        state.set(RotationPlane::YW, -PI);
        assert!((state.get(RotationPlane::YW) - PI).abs() < EPSILON);
        state.reset();
        assert!(state.is_identity());
    }

    #[test]
    fn test_iter_in_plane_order() {
        let mut state = RotationState::new();
        state.add(RotationPlane::XZ, 1.0);
        let planes: Vec<_> = state.iter().map(|(p, _)| p).collect();
        assert_eq!(planes, RotationPlane::ALL.to_vec());
        assert_eq!(state.iter().nth(1).map(|(_, a)| a), Some(1.0));
    }

    #[test]
    fn test_plane_rotations_follow_application_order() {
        let state = RotationState::new();
        let planes: Vec<_> = state.plane_rotations().iter().map(|r| r.plane).collect();
        assert_eq!(planes, RotationPlane::APPLICATION_ORDER.to_vec());
    }

    #[test]
    fn test_apply_identity_is_exact() {
        let v = Vec4::new(50.0, -50.0, 12.5, 3.0);
        assert_eq!(RotationState::new().apply(v), v);
    }

    #[test]
    fn test_from_array_normalizes() {
        let state = RotationState::from([100.0, -3.0, TAU, 0.5, 0.0, -0.0]);
        for (plane, angle) in state.iter() {
            assert!((0.0..TAU).contains(&angle), "{} = {}", plane, angle);
        }
        assert!((state.get(RotationPlane::XY) - normalize_angle(100.0)).abs() < EPSILON);
        assert!((state.get(RotationPlane::XZ) - (TAU - 3.0)).abs() < EPSILON);
        assert_eq!(state.get(RotationPlane::XW), 0.0);
        assert_eq!(state.get(RotationPlane::YZ), 0.5);
    }

    #[test]
    fn test_from_array_zeroes_non_finite() {
        let state = RotationState::from([f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0, 0.0, 0.0]);
        assert_eq!(state.angles(), [0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let v = state.apply(Vec4::new(50.0, 50.0, 50.0, 50.0));
        assert!(v.is_finite());
    }

    #[test]
    fn test_ron_loads_out_of_range_angles() {
        let state: RotationState = ron::from_str("(100.0, -3.0, 0.0, 0.0, 0.0, 0.0)").unwrap();
        for (plane, angle) in state.iter() {
            assert!((0.0..TAU).contains(&angle), "{} = {}", plane, angle);
        }

        let state: RotationState = ron::from_str("(NaN, 0.0, 0.0, NaN, 0.0, 0.0)").unwrap();
        assert!(state.is_identity());
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut state = RotationState::new();
        state.add(RotationPlane::XW, 1.25);
        state.add(RotationPlane::ZW, -0.5);

        let text = ron::to_string(&state).unwrap();
        let loaded: RotationState = ron::from_str(&text).unwrap();
        assert_eq!(loaded, state);
    }
}
