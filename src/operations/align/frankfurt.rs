use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::distance_3d::are_collinear;
use crate::math::rotation::{compose, rotation_between};
use crate::math::{normalized, Point3, Rotation3, Vector3};

use super::FhTriad;

/// Normal of the Frankfurt plane after alignment (pointing inferior).
pub const GOAL_NORMAL: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Direction of the right-ear → left-ear line after alignment.
pub const EAR_LINE_GOAL: Vector3 = Vector3::new(-1.0, 0.0, 0.0);

/// Computes the rotation that brings three Frankfurt horizontal landmarks
/// into the transverse plane with the ear line pointing patient-left.
///
/// The result is `R2 · R1`: `R1` tilts the landmark plane normal onto
/// [`GOAL_NORMAL`], then `R2` turns the ear line (as seen after `R1`) onto
/// [`EAR_LINE_GOAL`] about the S axis. Either stage becomes the identity
/// when its vectors are already within `1e-10` of parallel.
pub struct FrankfurtAlignment {
    source: Source,
}

enum Source {
    Unlabeled(Vec<Point3>),
    Labeled(FhTriad),
}

impl FrankfurtAlignment {
    /// Creates a new `FrankfurtAlignment` from unlabeled points, whose roles
    /// are resolved with [`FhTriad::classify`].
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            source: Source::Unlabeled(points),
        }
    }

    /// Creates a new `FrankfurtAlignment` from points with known roles.
    #[must_use]
    pub fn from_triad(triad: FhTriad) -> Self {
        Self {
            source: Source::Labeled(triad),
        }
    }

    /// Executes the alignment, returning the rotation to apply about the
    /// RAS origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not hold exactly three points, or
    /// if the points are collinear (no plane normal).
    pub fn execute(&self) -> Result<Rotation3> {
        let triad = match &self.source {
            Source::Unlabeled(points) => FhTriad::classify(points)?,
            Source::Labeled(triad) => *triad,
        };
        let FhTriad {
            left_ear,
            right_ear,
            left_orbit,
        } = triad;

        if are_collinear(&left_orbit, &right_ear, &left_ear) {
            return Err(GeometryError::Degenerate(
                "Frankfurt landmarks are collinear".into(),
            )
            .into());
        }

        // Operand order fixes the normal's sign: inferior for a plausible head.
        let original_normal =
            normalized(&(left_orbit - right_ear).cross(&(left_orbit - left_ear)))?;
        let r1 = rotation_between(&original_normal, &GOAL_NORMAL);

        let ear_line = normalized(&((r1 * left_ear) - (r1 * right_ear)))?;
        let r2 = rotation_between(&ear_line, &EAR_LINE_GOAL);

        let total = compose(&r2, &r1);
        debug!(
            ?original_normal,
            tilt_deg = r1.angle().to_degrees(),
            yaw_deg = r2.angle().to_degrees(),
            "computed Frankfurt alignment"
        );
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Unit;

    use super::*;
    use crate::error::{CephalonError, OperationError};
    use crate::math::rotation::is_proper_rotation;
    use crate::math::Axis;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn canonical() -> [Point3; 3] {
        [p(-70.0, 0.0, 0.0), p(70.0, 0.0, 0.0), p(-35.0, 80.0, 0.0)]
    }

    fn tilt() -> Rotation3 {
        Rotation3::from_axis_angle(
            &Unit::new_normalize(Vector3::new(1.0, 2.0, 3.0)),
            20.0_f64.to_radians(),
        )
    }

    #[test]
    fn symmetric_triad_in_goal_plane_is_identity() {
        let r = FrankfurtAlignment::new(vec![
            p(-70.0, 0.0, 0.0),
            p(70.0, 0.0, 0.0),
            p(0.0, 90.0, 0.0),
        ])
        .execute()
        .unwrap();
        assert_relative_eq!(r, Rotation3::identity(), epsilon = 1e-12);

        // Right ear keeps the larger R coordinate: right → left points to -R.
        let right = r * p(70.0, 0.0, 0.0);
        let left = r * p(-70.0, 0.0, 0.0);
        assert!(right.z.abs() < 1e-12 && left.z.abs() < 1e-12);
        assert!(right.x > left.x);
    }

    #[test]
    fn aligned_input_is_idempotent() {
        let r = FrankfurtAlignment::new(canonical().to_vec()).execute().unwrap();
        assert_relative_eq!(r, Rotation3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn undoes_a_known_tilt() {
        let q = tilt();
        let tilted: Vec<Point3> = canonical().iter().map(|pt| q * pt).collect();
        let r = FrankfurtAlignment::new(tilted).execute().unwrap();
        assert_relative_eq!(r * q, Rotation3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn result_is_a_proper_rotation() {
        let q = tilt();
        let inputs = [
            vec![p(-68.0, -4.0, 3.0), p(71.0, 2.0, -1.0), p(-33.0, 77.0, 12.0)],
            canonical().iter().map(|pt| q * pt).collect(),
            vec![p(-60.0, 10.0, -20.0), p(65.0, -5.0, 15.0), p(-20.0, 85.0, 30.0)],
        ];
        for pts in inputs {
            let r = FrankfurtAlignment::new(pts).execute().unwrap();
            assert!(is_proper_rotation(r.matrix(), 1e-9));
        }
    }

    #[test]
    fn aligned_points_share_a_transverse_plane() {
        let pts = vec![p(-60.0, 10.0, -20.0), p(65.0, -5.0, 15.0), p(-20.0, 85.0, 30.0)];
        let r = FrankfurtAlignment::new(pts.clone()).execute().unwrap();
        let moved: Vec<Point3> = pts.iter().map(|pt| r * pt).collect();
        assert!((moved[0].z - moved[1].z).abs() < 1e-9);
        assert!((moved[0].z - moved[2].z).abs() < 1e-9);

        // Ear line now runs along -R, from right ear to left ear.
        let ear_line = (moved[0] - moved[1]).normalize();
        assert_relative_eq!(ear_line, EAR_LINE_GOAL, epsilon = 1e-9);

        // Orbit stays the most anterior point.
        let reclassified = FhTriad::classify(&moved).unwrap();
        assert_relative_eq!(reclassified.left_orbit, moved[2], epsilon = 1e-12);
        let a = Axis::A.index();
        assert!(moved[2][a] > moved[0][a] && moved[2][a] > moved[1][a]);
    }

    #[test]
    fn labeled_triad_survives_extreme_yaw() {
        // 100° yaw makes the right ear the most anterior point.
        let q = Rotation3::from_axis_angle(&Vector3::z_axis(), 100.0_f64.to_radians());
        let [le, re, orb] = canonical().map(|pt| q * pt);
        let triad = FhTriad {
            left_ear: le,
            right_ear: re,
            left_orbit: orb,
        };
        assert_ne!(FhTriad::classify(&[le, re, orb]).unwrap(), triad);

        let r = FrankfurtAlignment::from_triad(triad).execute().unwrap();
        assert_relative_eq!(r * q, Rotation3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn reversed_ear_line_gives_identity_yaw() {
        // Head facing posterior: the normal is already inferior, and right → left
        // ear points along +R, exactly opposite the goal, so no yaw axis exists.
        let triad = FhTriad {
            left_ear: p(70.0, 0.0, 0.0),
            right_ear: p(-70.0, 0.0, 0.0),
            left_orbit: p(35.0, -80.0, 0.0),
        };
        let r = FrankfurtAlignment::from_triad(triad).execute().unwrap();
        assert_eq!(r, Rotation3::identity());
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let err = FrankfurtAlignment::new(vec![
            p(-70.0, 0.0, 0.0),
            p(70.0, 0.0, 0.0),
            p(0.0, 0.0, 0.0),
        ])
        .execute()
        .unwrap_err();
        assert!(matches!(
            err,
            CephalonError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn wrong_count_is_invalid_input() {
        let err = FrankfurtAlignment::new(vec![p(0.0, 0.0, 0.0)])
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            CephalonError::Operation(OperationError::InvalidInput(_))
        ));
    }
}
