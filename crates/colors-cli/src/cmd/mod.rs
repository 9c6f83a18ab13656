mod contrast_ratio;
mod distance;

pub use contrast_ratio::ContrastRatioArgs;
pub use distance::{DistanceArgs, DISTANCE_LONG_ABOUT};
