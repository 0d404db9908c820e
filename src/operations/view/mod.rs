mod frame;
mod pose;
mod trajectory;

pub use frame::{CanonicalView, FrameFromNormal, ViewFrame};
pub use pose::{ComposeSlicePose, JumpMode, SlicePose};
pub use trajectory::{TrajectoryPoses, TrajectoryViews, PARALLEL_TOLERANCE};
