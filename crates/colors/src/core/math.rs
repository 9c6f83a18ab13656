use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor and rounded. Typically, that factor is a power
    /// of ten, which directly translates into significant digits after the
    /// decimal.
    const ROUNDING_FACTOR: Self;

    /// The largest channel value that still renders as a 24-bit coordinate.
    const MAX_24BIT: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
    const MAX_24BIT: f64 = 255.0;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
    const MAX_24BIT: f32 = 255.0;
}

/// Square the number.
#[inline]
pub(crate) fn square(value: Float) -> Float {
    value * value
}
