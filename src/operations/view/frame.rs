use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::{normalized, Axis, Matrix3, Vector3, TOLERANCE};

/// One of the three canonical anatomical viewing planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CanonicalView {
    /// Normal mostly along R. Image up is superior, image right is posterior.
    Sagittal,
    /// Normal mostly along A. Image up is superior, image right is patient left.
    Coronal,
    /// Normal mostly along S. Image up is anterior, image right is patient left.
    Axial,
}

impl CanonicalView {
    /// View whose normal is closest to `axis`.
    #[must_use]
    pub fn from_normal_axis(axis: Axis) -> Self {
        match axis {
            Axis::R => Self::Sagittal,
            Axis::A => Self::Coronal,
            Axis::S => Self::Axial,
        }
    }

    /// Whether a normal whose dominant component has sign `positive` must be
    /// negated to avoid a mirrored view.
    fn inverts(self, positive: bool) -> bool {
        match self {
            // Patient right (sagittal) and superior (axial) point out of the screen.
            Self::Sagittal | Self::Axial => positive,
            // Anterior points into the screen.
            Self::Coronal => !positive,
        }
    }
}

/// Right-handed orthonormal slice basis: `axis_x × axis_y = normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub axis_x: Vector3,
    pub axis_y: Vector3,
    pub normal: Vector3,
    pub view: CanonicalView,
}

impl ViewFrame {
    /// Basis matrix with columns `(axis_x, axis_y, normal)`.
    #[must_use]
    pub fn basis(&self) -> Matrix3 {
        Matrix3::from_columns(&[self.axis_x, self.axis_y, self.normal])
    }
}

/// Derives a non-mirrored slice basis from an arbitrary plane normal,
/// matching the closest canonical view.
pub struct FrameFromNormal {
    normal: Vector3,
}

impl FrameFromNormal {
    /// Creates a new `FrameFromNormal` operation. `normal` need not be unit length.
    #[must_use]
    pub fn new(normal: Vector3) -> Self {
        Self { normal }
    }

    /// Executes the framing.
    ///
    /// The dominant component of the normal picks the view, and may flip the
    /// normal. The axis with the smallest component is the one closest to
    /// lying in the slice; it is pinned exactly (as X or as Y) so the view
    /// stays as close as possible to its canonical orientation. Ties for the
    /// smallest component go to the earlier axis (R before A before S).
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length, or if its largest
    /// absolute component is shared by two or more axes.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<ViewFrame> {
        let normal = self.normal;
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        let (largest, smallest) = dominant_axes(&normal);
        let magnitude = normal[largest.index()].abs();
        let tied = Axis::ALL
            .iter()
            .filter(|a| normal[a.index()].abs() == magnitude)
            .count();
        if tied > 1 || largest == smallest {
            return Err(GeometryError::DegenerateNormal {
                x: normal.x,
                y: normal.y,
                z: normal.z,
            }
            .into());
        }

        let view = CanonicalView::from_normal_axis(largest);
        let normal = if view.inverts(normal[largest.index()] > 0.0) {
            -normal
        } else {
            normal
        };

        let provisional_x = match (view, smallest) {
            (CanonicalView::Sagittal | CanonicalView::Coronal, Axis::S) => {
                Axis::S.unit().cross(&normal)
            }
            (CanonicalView::Axial, Axis::A) => Axis::A.unit().cross(&normal),
            (CanonicalView::Sagittal, Axis::A) => Vector3::new(0.0, -1.0, 0.0),
            (CanonicalView::Coronal | CanonicalView::Axial, Axis::R) => {
                Vector3::new(-1.0, 0.0, 0.0)
            }
            (view, axis) => {
                unreachable!("smallest axis {axis:?} cannot be the normal axis of {view:?}")
            }
        };
        trace!(?view, ?smallest, ?provisional_x, "provisional slice X axis");

        // Y = N × X, then X = Y × N keeps X's general direction but exactly orthogonal.
        let normal = normalized(&normal)?;
        let axis_x = normalized(&provisional_x)?;
        let axis_y = normalized(&normal.cross(&axis_x))?;
        let axis_x = normalized(&axis_y.cross(&normal))?;

        debug!(?view, ?largest, ?smallest, "framed slice from normal");
        Ok(ViewFrame {
            axis_x,
            axis_y,
            normal,
            view,
        })
    }
}

/// Axes of the largest and smallest absolute components; first wins ties.
fn dominant_axes(v: &Vector3) -> (Axis, Axis) {
    let mut largest = Axis::R;
    let mut smallest = Axis::R;
    for axis in [Axis::A, Axis::S] {
        let m = v[axis.index()].abs();
        if m > v[largest.index()].abs() {
            largest = axis;
        }
        if m < v[smallest.index()].abs() {
            smallest = axis;
        }
    }
    (largest, smallest)
}
