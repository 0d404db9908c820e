use tracing::debug;

use crate::error::Result;
use crate::math::{Matrix4, Point3, Vector3};

use super::{CanonicalView, FrameFromNormal};

/// How a slice is moved onto a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpMode {
    /// Move the whole view: the target becomes the slice center.
    Center,
    /// Keep the current center and only shift it along the normal until the
    /// plane passes through the target.
    Offset { current_center: Point3 },
}

/// An oriented slicing plane through a point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlicePose {
    pub axis_x: Vector3,
    pub axis_y: Vector3,
    pub normal: Vector3,
    /// Slice center in RAS.
    pub position: Point3,
    pub view: CanonicalView,
}

impl SlicePose {
    /// Slice-to-RAS matrix: columns `(axis_x, axis_y, normal, position)`.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 1>(0, 0).copy_from(&self.axis_x);
        m.fixed_view_mut::<3, 1>(0, 1).copy_from(&self.axis_y);
        m.fixed_view_mut::<3, 1>(0, 2).copy_from(&self.normal);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.position.coords);
        m
    }

    /// Signed distance from `point` to the slice plane, positive on the
    /// normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&(point - self.position))
    }
}

/// Orients a slice from a plane normal and moves it onto a target point.
pub struct ComposeSlicePose {
    normal: Vector3,
    target: Point3,
    mode: JumpMode,
}

impl ComposeSlicePose {
    /// Creates a new `ComposeSlicePose` operation.
    #[must_use]
    pub fn new(normal: Vector3, target: Point3, mode: JumpMode) -> Self {
        Self {
            normal,
            target,
            mode,
        }
    }

    /// Executes the composition. The orientation is set first, then the
    /// position according to the [`JumpMode`].
    ///
    /// # Errors
    ///
    /// Returns an error if the normal cannot be framed (see
    /// [`FrameFromNormal::execute`]).
    pub fn execute(&self) -> Result<SlicePose> {
        let frame = FrameFromNormal::new(self.normal).execute()?;

        let position = match self.mode {
            JumpMode::Center => self.target,
            JumpMode::Offset { current_center } => {
                let depth = frame.normal.dot(&(self.target - current_center));
                current_center + frame.normal * depth
            }
        };
        debug!(view = ?frame.view, mode = ?self.mode, ?position, "composed slice pose");

        Ok(SlicePose {
            axis_x: frame.axis_x,
            axis_y: frame.axis_y,
            normal: frame.normal,
            position,
            view: frame.view,
        })
    }
}
