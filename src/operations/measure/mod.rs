mod catalog;
mod report;

pub use catalog::{MeasureDef, MeasureKind, PointRef, CATALOG};
pub use report::{MeasureReport, MeasureResult, Unit, ValueFormat};
