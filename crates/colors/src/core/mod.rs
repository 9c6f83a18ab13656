mod contrast;
mod distance;
mod equality;
mod math;
mod string;

// contrast
pub use contrast::{ContrastLevel, UNREPORTED};
pub(crate) use contrast::{to_contrast_ratio, to_luminance};

// distance
pub(crate) use distance::to_distance;

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::{format_hex, parse_hex};
