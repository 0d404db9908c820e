use tracing::debug;

use crate::error::Result;
use crate::math::{normalized, Point3, Vector3};

use super::{ComposeSlicePose, JumpMode, SlicePose};

/// Threshold on the R and S components of the unit trajectory below which it
/// counts as parallel to the A axis.
pub const PARALLEL_TOLERANCE: f64 = 0.001;

/// Parallel and orthogonal slices through a straight trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoses {
    /// Slice containing the trajectory.
    pub parallel: SlicePose,
    /// Slice cut across the trajectory.
    pub orthogonal: SlicePose,
}

/// Frames a pair of slices along a straight path from `entry` to `target`,
/// e.g. an airway axis or an instrument track.
pub struct TrajectoryViews {
    entry: Point3,
    target: Point3,
}

impl TrajectoryViews {
    /// Creates a new `TrajectoryViews` operation.
    #[must_use]
    pub fn new(entry: Point3, target: Point3) -> Self {
        Self { entry, target }
    }

    /// Returns `(along, in_plane_normal)`: the entry → target vector and the
    /// normal of a plane containing it.
    ///
    /// The in-plane normal is `reference × unit(along)`, with reference A
    /// unless the trajectory runs (nearly) along A, in which case R is used.
    ///
    /// # Errors
    ///
    /// Returns an error if entry and target coincide.
    pub fn vectors(&self) -> Result<(Vector3, Vector3)> {
        let along = self.target - self.entry;
        let unit = normalized(&along)?;
        let reference = if unit.x.abs() < PARALLEL_TOLERANCE && unit.z.abs() < PARALLEL_TOLERANCE {
            debug!("trajectory parallel to A, using R as reference");
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };
        Ok((along, reference.cross(&unit)))
    }

    /// Executes the framing, positioning both slices at `position`.
    ///
    /// A path lying exactly diagonal between two axes (e.g. 45° between R and
    /// S) gives a normal with tied largest components and is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if entry and target coincide, or if either normal
    /// cannot be framed (see [`FrameFromNormal::execute`](super::FrameFromNormal::execute)).
    pub fn execute(&self, position: Point3, mode: JumpMode) -> Result<TrajectoryPoses> {
        let (along, in_plane_normal) = self.vectors()?;
        let parallel = ComposeSlicePose::new(in_plane_normal, position, mode).execute()?;
        let orthogonal = ComposeSlicePose::new(along, position, mode).execute()?;
        Ok(TrajectoryPoses {
            parallel,
            orthogonal,
        })
    }
}
