use tracing::debug;

use crate::landmark::NamedLandmarkSet;

use super::CATALOG;

/// Unit of a measured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Millimeters,
    Degrees,
}

impl Unit {
    /// Short unit symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Degrees => "deg",
        }
    }
}

/// Formatting hint for renderers: signed values carry an explicit `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFormat {
    Unsigned,
    Signed,
}

/// One measured value of a report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureResult {
    pub label: String,
    /// `None` when a required landmark is missing or the geometry is undefined.
    pub value: Option<f64>,
    pub unit: Unit,
    pub format: ValueFormat,
}

impl MeasureResult {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

/// Computes every catalog measure from a landmark set.
pub struct MeasureReport<'a> {
    landmarks: &'a NamedLandmarkSet,
}

impl<'a> MeasureReport<'a> {
    /// Creates a new `MeasureReport` query.
    #[must_use]
    pub fn new(landmarks: &'a NamedLandmarkSet) -> Self {
        Self { landmarks }
    }

    /// Executes the query, returning one result per catalog entry in catalog
    /// order. Missing data never fails; it shows up as absent values.
    #[must_use]
    pub fn execute(&self) -> Vec<MeasureResult> {
        let results: Vec<MeasureResult> = CATALOG
            .iter()
            .map(|def| MeasureResult {
                label: def.label.to_owned(),
                value: def.kind.evaluate(self.landmarks),
                unit: def.kind.unit(),
                format: def.format,
            })
            .collect();
        debug!(
            available = results.iter().filter(|r| r.is_available()).count(),
            total = results.len(),
            "computed measure report"
        );
        results
    }
}
