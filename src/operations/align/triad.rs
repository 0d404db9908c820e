use crate::error::{OperationError, Result};
use crate::landmark::{names, NamedLandmarkSet};
use crate::math::{Axis, Point3};

/// The three Frankfurt horizontal reference points, resolved by role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FhTriad {
    pub left_ear: Point3,
    pub right_ear: Point3,
    pub left_orbit: Point3,
}

impl FhTriad {
    /// Resolves roles from coordinates alone.
    ///
    /// The orbit is the most anterior point; of the remaining two, the more
    /// rightward is the right ear. Ties go to the earlier point. Points that
    /// violate this ordering (e.g. an extremely rotated head) are silently
    /// misassigned; use [`FhTriad::from_landmarks`] when labels are known.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` does not hold exactly three points.
    pub fn classify(points: &[Point3]) -> Result<Self> {
        let [a, b, c] = points else {
            return Err(OperationError::InvalidInput(format!(
                "Frankfurt alignment needs exactly 3 points (left ear, right ear, left orbit), got {}",
                points.len()
            ))
            .into());
        };

        let mut rest = vec![*a, *b, *c];
        let orbit_idx = argmax(&rest, Axis::A);
        let left_orbit = rest.remove(orbit_idx);
        let right_idx = argmax(&rest, Axis::R);
        let right_ear = rest.remove(right_idx);
        let left_ear = rest[0];

        Ok(Self {
            left_ear,
            right_ear,
            left_orbit,
        })
    }

    /// Resolves roles from the labeled landmarks
    /// [`LEFT_EAR_FH`](names::LEFT_EAR_FH), [`RIGHT_EAR_FH`](names::RIGHT_EAR_FH)
    /// and [`LEFT_ORBIT_FH`](names::LEFT_ORBIT_FH).
    ///
    /// # Errors
    ///
    /// Returns an error naming every FH landmark that is not placed.
    pub fn from_landmarks(landmarks: &NamedLandmarkSet) -> Result<Self> {
        let lookup = |name: &str| landmarks.get(name).copied();
        match (
            lookup(names::LEFT_EAR_FH),
            lookup(names::RIGHT_EAR_FH),
            lookup(names::LEFT_ORBIT_FH),
        ) {
            (Some(left_ear), Some(right_ear), Some(left_orbit)) => Ok(Self {
                left_ear,
                right_ear,
                left_orbit,
            }),
            _ => {
                let missing: Vec<&str> = names::FH_LANDMARKS
                    .into_iter()
                    .filter(|n| landmarks.get(n).is_none())
                    .collect();
                Err(OperationError::InvalidInput(format!(
                    "missing Frankfurt landmarks: {}",
                    missing.join(", ")
                ))
                .into())
            }
        }
    }
}

/// Index of the point with the largest coordinate along `axis`; first wins ties.
fn argmax(points: &[Point3], axis: Axis) -> usize {
    let i = axis.index();
    let mut best = 0;
    for (idx, pt) in points.iter().enumerate().skip(1) {
        if pt[i] > points[best][i] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CephalonError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn classify_is_order_independent() {
        let le = p(-70.0, 0.0, 0.0);
        let re = p(70.0, 0.0, 0.0);
        let orb = p(-35.0, 80.0, 0.0);
        let expected = FhTriad {
            left_ear: le,
            right_ear: re,
            left_orbit: orb,
        };
        for pts in [[le, re, orb], [orb, le, re], [re, orb, le], [orb, re, le]] {
            assert_eq!(FhTriad::classify(&pts).unwrap(), expected);
        }
    }

    #[test]
    fn classify_rejects_wrong_count() {
        let two = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)];
        let err = FhTriad::classify(&two).unwrap_err();
        assert!(matches!(
            err,
            CephalonError::Operation(OperationError::InvalidInput(_))
        ));
        let four = [p(0.0, 0.0, 0.0); 4];
        assert!(FhTriad::classify(&four).is_err());
    }

    #[test]
    fn from_landmarks_uses_labels() {
        // Labels disagree with the coordinate heuristic on purpose.
        let mut set = NamedLandmarkSet::new();
        set.insert(names::LEFT_EAR_FH, p(0.0, 90.0, 0.0));
        set.insert(names::RIGHT_EAR_FH, p(-70.0, 0.0, 0.0));
        set.insert(names::LEFT_ORBIT_FH, p(70.0, 0.0, 0.0));
        let triad = FhTriad::from_landmarks(&set).unwrap();
        assert_eq!(triad.left_ear, p(0.0, 90.0, 0.0));
        assert_eq!(triad.left_orbit, p(70.0, 0.0, 0.0));
    }

    #[test]
    fn from_landmarks_reports_missing() {
        let mut set = NamedLandmarkSet::with_catalog(names::FH_LANDMARKS);
        set.insert(names::LEFT_EAR_FH, p(-70.0, 0.0, 0.0));
        let err = FhTriad::from_landmarks(&set).unwrap_err().to_string();
        assert!(err.contains(names::RIGHT_EAR_FH), "{err}");
        assert!(err.contains(names::LEFT_ORBIT_FH), "{err}");
        assert!(!err.contains(names::LEFT_EAR_FH), "{err}");
    }
}
