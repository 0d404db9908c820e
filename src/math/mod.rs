pub mod distance_3d;
pub mod rotation;

use crate::error::{GeometryError, Result};

/// 3D point type, in RAS (Right, Anterior, Superior) coordinates.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Proper 3D rotation (orthonormal, determinant +1).
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Also the near-parallel threshold below which a rotation axis is treated
/// as undefined and the identity rotation is substituted.
pub const TOLERANCE: f64 = 1e-10;

/// Anatomical axis of the RAS frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Patient right (first coordinate).
    R,
    /// Anterior (second coordinate).
    A,
    /// Superior (third coordinate).
    S,
}

impl Axis {
    /// All axes in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::R, Axis::A, Axis::S];

    /// Coordinate index of this axis.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::R => 0,
            Axis::A => 1,
            Axis::S => 2,
        }
    }

    /// Unit vector pointing along the positive direction of this axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.0;
        v
    }
}

/// Returns `v / |v|`, or [`GeometryError::ZeroVector`] if `|v|` is below
/// [`TOLERANCE`].
///
/// # Errors
///
/// Returns an error if the vector is (near) zero-length.
pub fn normalized(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_unit_vectors() {
        assert_eq!(Axis::R.unit(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Axis::A.unit(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::S.unit(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normalized_rejects_zero() {
        assert!(normalized(&Vector3::new(0.0, 0.0, 1e-12)).is_err());
        let n = normalized(&Vector3::new(3.0, 0.0, 4.0));
        assert!(n.is_ok_and(|n| (n.norm() - 1.0).abs() < 1e-12));
    }
}
