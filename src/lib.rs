//! Landmark geometry for craniofacial and airway annotation.
//!
//! All operations are pure functions over plain coordinates in the RAS
//! frame: [`FrankfurtAlignment`] re-orients a head to the Frankfurt
//! horizontal, [`FrameFromNormal`] and [`ComposeSlicePose`] derive
//! non-mirrored oblique slice poses, and [`MeasureReport`] computes the
//! anthropometric measure catalog.

pub mod error;
pub mod landmark;
pub mod math;
pub mod operations;

pub use error::{CephalonError, Result};
pub use landmark::NamedLandmarkSet;
pub use operations::align::{FhTriad, FrankfurtAlignment};
pub use operations::measure::{MeasureReport, MeasureResult};
pub use operations::view::{ComposeSlicePose, FrameFromNormal, JumpMode, SlicePose};
