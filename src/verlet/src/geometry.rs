use crate::V2;

/// Distances below this are treated as coincident points.
pub const MIN_DISTANCE: f32 = 1e-6;

pub fn distance(p1: V2, p2: V2) -> f32 {
	(p1 - p2).magnitude()
}

/// Unit vector pointing from `p2` towards `p1`.
///
/// Returns `None` when the two points (nearly) coincide, since no direction
/// exists then.
pub fn direction(p1: V2, p2: V2) -> Option<V2> {
	let dp = p1 - p2;
	let l = dp.magnitude();
	if !l.is_finite() || l < MIN_DISTANCE {
		return None;
	}
	Some(dp / l)
}
