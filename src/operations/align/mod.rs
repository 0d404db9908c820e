mod frankfurt;
mod triad;

pub use frankfurt::{FrankfurtAlignment, EAR_LINE_GOAL, GOAL_NORMAL};
pub use triad::FhTriad;
