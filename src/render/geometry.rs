//! Geometry functions: segment length, midpoint, and the rotation that
//! stands a +Y-aligned primitive along a segment

use glam::{DMat4, DQuat, DVec3};

use crate::types::Point3;

/// Segments shorter than this have no usable direction
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Euclidean distance between two points
#[inline]
pub fn distance(p: Point3, q: Point3) -> f64 {
    p.distance(q)
}

/// Point halfway between `p` and `q`
#[inline]
pub fn midpoint(p: Point3, q: Point3) -> Point3 {
    (p + q) * 0.5
}

/// Unit vector from `p` toward `q`, or `None` when the points coincide
pub fn direction(p: Point3, q: Point3) -> Option<DVec3> {
    let delta = q - p;
    let len = delta.length();
    if len < DEGENERATE_LENGTH || !len.is_finite() {
        None
    } else {
        Some(delta / len)
    }
}

/// Whether `p → q` is too short to orient anything along
#[inline]
pub fn is_degenerate(p: Point3, q: Point3) -> bool {
    direction(p, q).is_none()
}

/// Rotation taking the +Y axis onto the direction `p → q`.
///
/// Coincident points have no direction; they get the identity rather than a
/// NaN rotation. Anti-parallel segments (pointing down -Y) turn 180° about an
/// axis perpendicular to Y.
pub fn orientation(p: Point3, q: Point3) -> DQuat {
    match direction(p, q) {
        Some(dir) => DQuat::from_rotation_arc(DVec3::Y, dir),
        None => DQuat::IDENTITY,
    }
}

/// [`orientation`] as a 4x4 transform
pub fn orientation_matrix(p: Point3, q: Point3) -> DMat4 {
    DMat4::from_quat(orientation(p, q))
}
