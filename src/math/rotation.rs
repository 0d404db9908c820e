use nalgebra::Unit;
use tracing::{trace, warn};

use super::{Matrix3, Rotation3, Vector3, TOLERANCE};

/// Maximum deviation of `RᵀR` from the identity tolerated before a composed
/// rotation is re-orthonormalized.
pub const DRIFT_TOLERANCE: f64 = 1e-9;

/// Minimal-angle rotation taking unit vector `from` onto unit vector `to`.
///
/// The axis is `from × to` (right-hand rule), the angle is
/// `acos(from · to)` in `[0, π]`. The axis already encodes the rotation
/// sense, so the angle needs no sign correction.
///
/// When `|from × to|` is not above [`TOLERANCE`] no axis is defined and the
/// identity is returned. For anti-parallel inputs this is not a rotation
/// onto `to`; callers depend on that exact behavior.
#[must_use]
pub fn rotation_between(from: &Vector3, to: &Vector3) -> Rotation3 {
    let axis = from.cross(to);
    let axis_len = axis.norm();
    let cos = from.dot(to).clamp(-1.0, 1.0);

    if axis_len <= TOLERANCE {
        if cos < 0.0 {
            warn!(?from, ?to, "anti-parallel vectors, substituting identity rotation");
        } else {
            trace!(?from, ?to, "vectors already parallel");
        }
        return Rotation3::identity();
    }

    let angle = cos.acos();
    trace!(?axis, angle_deg = angle.to_degrees(), "rotation between vectors");
    Rotation3::from_axis_angle(&Unit::new_unchecked(axis / axis_len), angle)
}

/// Largest absolute entry of `MᵀM − I`.
#[must_use]
pub fn orthonormality_error(m: &Matrix3) -> f64 {
    (m.transpose() * m - Matrix3::identity()).amax()
}

/// Returns `true` if `m` is orthonormal with determinant +1, both within `tol`.
#[must_use]
pub fn is_proper_rotation(m: &Matrix3, tol: f64) -> bool {
    orthonormality_error(m) <= tol && (m.determinant() - 1.0).abs() <= tol
}

/// Composes two rotations as `later · earlier` (`earlier` is applied first).
///
/// The product is re-orthonormalized only when its drift exceeds
/// [`DRIFT_TOLERANCE`], so rotations can be accumulated over many rounds.
#[must_use]
pub fn compose(later: &Rotation3, earlier: &Rotation3) -> Rotation3 {
    let product = later.matrix() * earlier.matrix();
    let drift = orthonormality_error(&product);
    if drift > DRIFT_TOLERANCE {
        warn!(drift, "rotation drifted from orthonormal, re-orthonormalizing");
        return reorthonormalize(&product);
    }
    Rotation3::from_matrix_unchecked(product)
}

/// Gram–Schmidt re-orthonormalization of the columns of `m`.
///
/// The first column keeps its direction, the second is made orthogonal to it,
/// and the third is rebuilt as their cross product so the result is a proper
/// rotation.
#[must_use]
pub fn reorthonormalize(m: &Matrix3) -> Rotation3 {
    let c0 = m.column(0).normalize();
    let c1 = m.column(1).into_owned();
    let c1 = (c1 - c0 * c0.dot(&c1)).normalize();
    let c2 = c0.cross(&c1);
    Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[c0, c1, c2]))
}
