use crate::error::Result;

use super::{normalized, Point3, Vector3, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}

/// Distance between two points in the A–S (mid-sagittal) plane.
///
/// The R coordinate of both points is discarded.
#[must_use]
pub fn sagittal_distance(a: &Point3, b: &Point3) -> f64 {
    let da = b.y - a.y;
    let ds = b.z - a.z;
    (da * da + ds * ds).sqrt()
}

/// Perpendicular distance from `point` to the infinite line through
/// `line_a` and `line_b`.
///
/// Takes the vector from `line_a` to `point`, removes its projection onto the
/// line direction, and returns the length of what is left.
///
/// # Errors
///
/// Returns an error if `line_a` and `line_b` coincide (no line direction).
pub fn point_to_line_dist(point: &Point3, line_a: &Point3, line_b: &Point3) -> Result<f64> {
    let dir = normalized(&(line_b - line_a))?;
    let to_point = point - line_a;
    let residual = to_point - dir * to_point.dot(&dir);
    Ok(residual.norm())
}

/// Angle between two vectors in degrees, in `[0, 180]`.
///
/// # Errors
///
/// Returns an error if either vector is (near) zero-length.
pub fn angle_between_deg(a: &Vector3, b: &Vector3) -> Result<f64> {
    let a = normalized(a)?;
    let b = normalized(b)?;
    Ok(a.dot(&b).clamp(-1.0, 1.0).acos().to_degrees())
}

/// Angle at `vertex` formed by the rays towards `a` and `b`, in degrees.
///
/// # Errors
///
/// Returns an error if `vertex` coincides with `a` or `b`.
pub fn vertex_angle_deg(vertex: &Point3, a: &Point3, b: &Point3) -> Result<f64> {
    angle_between_deg(&(a - vertex), &(b - vertex))
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Returns `true` if the three points are collinear within [`TOLERANCE`]
/// (relative to the triangle's edge lengths).
#[must_use]
pub fn are_collinear(a: &Point3, b: &Point3, c: &Point3) -> bool {
    let ab = b - a;
    let ac = c - a;
    let scale = ab.norm() * ac.norm();
    scale < TOLERANCE || ab.cross(&ac).norm() < TOLERANCE * scale
}
