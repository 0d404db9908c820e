use tracing::debug;

use crate::landmark::names::{
    BASION, C3_ANTERIOR, HYOID, LEFT_CONDYLION, LEFT_GONION, MENTON, NASION, POGONION,
    RIGHT_CONDYLION, RIGHT_GONION, TONGUE_SUPERIOR, VALLECULA,
};
use crate::landmark::NamedLandmarkSet;
use crate::math::distance_3d::{
    distance, midpoint, point_to_line_dist, sagittal_distance, vertex_angle_deg,
};
use crate::math::{Axis, Point3};

use super::{Unit, ValueFormat};

/// A point a measure is taken from: a landmark, or the midpoint of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRef {
    Landmark(&'static str),
    Midpoint(&'static str, &'static str),
}

impl PointRef {
    /// Resolves the point, or `None` if any landmark it needs is absent.
    #[must_use]
    pub fn resolve(&self, landmarks: &NamedLandmarkSet) -> Option<Point3> {
        match *self {
            Self::Landmark(name) => landmarks.get(name).copied(),
            Self::Midpoint(a, b) => Some(midpoint(landmarks.get(a)?, landmarks.get(b)?)),
        }
    }

    fn landmarks(&self) -> Vec<&'static str> {
        match *self {
            Self::Landmark(name) => vec![name],
            Self::Midpoint(a, b) => vec![a, b],
        }
    }
}

/// Geometric definition of a measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureKind {
    /// Euclidean distance.
    Distance(PointRef, PointRef),
    /// Distance in the A–S plane.
    SagittalDistance(PointRef, PointRef),
    /// `point[axis] - reference[axis]`.
    AxisOffset {
        point: PointRef,
        reference: PointRef,
        axis: Axis,
    },
    /// Perpendicular distance from `point` to the line through `line`.
    PointToLine {
        point: PointRef,
        line: (PointRef, PointRef),
    },
    /// Angle at `vertex` between the rays to `a` and `b`.
    VertexAngle {
        vertex: PointRef,
        a: PointRef,
        b: PointRef,
    },
}

impl MeasureKind {
    #[must_use]
    pub fn unit(&self) -> Unit {
        match self {
            Self::VertexAngle { .. } => Unit::Degrees,
            _ => Unit::Millimeters,
        }
    }

    fn points(&self) -> Vec<PointRef> {
        match *self {
            Self::Distance(a, b) | Self::SagittalDistance(a, b) => vec![a, b],
            Self::AxisOffset {
                point, reference, ..
            } => vec![point, reference],
            Self::PointToLine { point, line } => vec![point, line.0, line.1],
            Self::VertexAngle { vertex, a, b } => vec![vertex, a, b],
        }
    }

    /// Names of every landmark the measure depends on.
    #[must_use]
    pub fn required_landmarks(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for name in self.points().iter().flat_map(PointRef::landmarks) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Evaluates the measure. Absent landmarks, and geometry with no defined
    /// value (coincident points for a line or an angle), yield `None`.
    #[must_use]
    pub fn evaluate(&self, landmarks: &NamedLandmarkSet) -> Option<f64> {
        let r = |p: PointRef| p.resolve(landmarks);
        match *self {
            Self::Distance(a, b) => Some(distance(&r(a)?, &r(b)?)),
            Self::SagittalDistance(a, b) => Some(sagittal_distance(&r(a)?, &r(b)?)),
            Self::AxisOffset {
                point,
                reference,
                axis,
            } => Some(r(point)?[axis.index()] - r(reference)?[axis.index()]),
            Self::PointToLine { point, line } => {
                point_to_line_dist(&r(point)?, &r(line.0)?, &r(line.1)?)
                    .inspect_err(|err| debug!(%err, "line measure undefined"))
                    .ok()
            }
            Self::VertexAngle { vertex, a, b } => vertex_angle_deg(&r(vertex)?, &r(a)?, &r(b)?)
                .inspect_err(|err| debug!(%err, "angle measure undefined"))
                .ok(),
        }
    }
}

/// One entry of the measure catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureDef {
    pub label: &'static str,
    pub kind: MeasureKind,
    pub format: ValueFormat,
}

const fn lm(name: &'static str) -> PointRef {
    PointRef::Landmark(name)
}

const fn unsigned(label: &'static str, kind: MeasureKind) -> MeasureDef {
    MeasureDef {
        label,
        kind,
        format: ValueFormat::Unsigned,
    }
}

const fn signed(label: &'static str, kind: MeasureKind) -> MeasureDef {
    MeasureDef {
        label,
        kind,
        format: ValueFormat::Signed,
    }
}

/// The fixed, ordered measure catalog.
pub const CATALOG: [MeasureDef; 17] = [
    unsigned(
        "Tongue height",
        MeasureKind::Distance(lm(VALLECULA), lm(TONGUE_SUPERIOR)),
    ),
    signed(
        "Tongue anterior position",
        MeasureKind::AxisOffset {
            point: lm(TONGUE_SUPERIOR),
            reference: lm(BASION),
            axis: Axis::A,
        },
    ),
    signed(
        "Tongue superior position",
        MeasureKind::AxisOffset {
            point: lm(TONGUE_SUPERIOR),
            reference: lm(BASION),
            axis: Axis::S,
        },
    ),
    unsigned(
        "Hyoid posterior position",
        MeasureKind::SagittalDistance(lm(HYOID), lm(C3_ANTERIOR)),
    ),
    signed(
        "Hyoid anterior position",
        MeasureKind::AxisOffset {
            point: lm(HYOID),
            reference: lm(POGONION),
            axis: Axis::A,
        },
    ),
    unsigned(
        "Hyoid craniocaudal position",
        MeasureKind::PointToLine {
            point: lm(HYOID),
            line: (lm(MENTON), PointRef::Midpoint(LEFT_GONION, RIGHT_GONION)),
        },
    ),
    unsigned(
        "Nasion-basion distance",
        MeasureKind::Distance(lm(NASION), lm(BASION)),
    ),
    unsigned(
        "Left mandibular ramus height",
        MeasureKind::Distance(lm(LEFT_CONDYLION), lm(LEFT_GONION)),
    ),
    unsigned(
        "Right mandibular ramus height",
        MeasureKind::Distance(lm(RIGHT_CONDYLION), lm(RIGHT_GONION)),
    ),
    unsigned(
        "Inferior pogonial angle",
        MeasureKind::VertexAngle {
            vertex: lm(POGONION),
            a: lm(LEFT_GONION),
            b: lm(RIGHT_GONION),
        },
    ),
    unsigned(
        "Bigonial distance",
        MeasureKind::Distance(lm(LEFT_GONION), lm(RIGHT_GONION)),
    ),
    unsigned(
        "Left mandibular body length",
        MeasureKind::Distance(lm(LEFT_GONION), lm(POGONION)),
    ),
    unsigned(
        "Right mandibular body length",
        MeasureKind::Distance(lm(RIGHT_GONION), lm(POGONION)),
    ),
    unsigned(
        "Left mandibular total length",
        MeasureKind::Distance(lm(LEFT_CONDYLION), lm(POGONION)),
    ),
    unsigned(
        "Right mandibular total length",
        MeasureKind::Distance(lm(RIGHT_CONDYLION), lm(POGONION)),
    ),
    unsigned(
        "Left gonial angle substitute",
        MeasureKind::VertexAngle {
            vertex: lm(LEFT_GONION),
            a: lm(LEFT_CONDYLION),
            b: lm(POGONION),
        },
    ),
    unsigned(
        "Right gonial angle substitute",
        MeasureKind::VertexAngle {
            vertex: lm(RIGHT_GONION),
            a: lm(RIGHT_CONDYLION),
            b: lm(POGONION),
        },
    ),
];
