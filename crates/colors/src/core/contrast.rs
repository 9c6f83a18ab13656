use crate::Float;

/// The coefficients for computing the relative luminance of linear sRGB
/// channels.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The gamma-encoded channel value below which sRGB is linear. WCAG 2.0 uses
/// this value from the original sRGB draft, not IEC 61966-2-1's 0.04045.
const LINEAR_THRESHOLD: Float = 0.03928;

/// The flare added to both luminance values of a contrast ratio.
const FLARE: Float = 0.05;

/// Convert a gamma-encoded sRGB channel to linear light.
#[inline]
fn linearize(value: Float) -> Float {
    if value > LINEAR_THRESHOLD {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Compute the relative luminance for the given sRGB channels.
///
/// See <https://www.w3.org/TR/WCAG20/#relativeluminancedef>.
pub(crate) fn to_luminance(channels: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *channels;

    // Keep plain products and sums; fused multiply-add changes the last bits.
    c1 * linearize(r) + c2 * linearize(g) + c3 * linearize(b)
}

/// Compute the contrast ratio between the two relative luminance values.
///
/// The arguments are interchangeable; the lighter one always ends up in the
/// numerator. See <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + FLARE) / (darker + FLARE)
}

// ====================================================================================================================

/// The placeholder for contrast ratios too low to be reported.
pub const UNREPORTED: &str = "--";

/// A WCAG conformance tier for contrast ratios.
///
/// Levels are ordered from weakest to strongest. Contrast ratios below 3:1 do
/// not meet any level and hence are not reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContrastLevel {
    /// A ratio of at least 3:1, sufficient for large text only.
    AaPlus,
    /// A ratio of at least 4.5:1.
    Aa,
    /// A ratio of at least 7:1.
    Aaa,
}

impl ContrastLevel {
    /// Classify the contrast ratio.
    ///
    /// ```
    /// # use colors::ContrastLevel;
    /// assert_eq!(ContrastLevel::classify(2.99), None);
    /// assert_eq!(ContrastLevel::classify(3.0), Some(ContrastLevel::AaPlus));
    /// assert_eq!(ContrastLevel::classify(4.5), Some(ContrastLevel::Aa));
    /// assert_eq!(ContrastLevel::classify(7.0), Some(ContrastLevel::Aaa));
    /// ```
    pub fn classify(ratio: Float) -> Option<Self> {
        if ratio >= Self::Aaa.min_ratio() {
            Some(Self::Aaa)
        } else if ratio >= Self::Aa.min_ratio() {
            Some(Self::Aa)
        } else if ratio >= Self::AaPlus.min_ratio() {
            Some(Self::AaPlus)
        } else {
            None
        }
    }

    /// Get the label for the contrast ratio, which is [`UNREPORTED`] if the
    /// ratio does not meet any level.
    pub fn label(ratio: Float) -> &'static str {
        Self::classify(ratio).map_or(UNREPORTED, |level| level.name())
    }

    /// Get the smallest contrast ratio meeting this level.
    pub const fn min_ratio(&self) -> Float {
        match *self {
            Self::AaPlus => 3.0,
            Self::Aa => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Get this level's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::AaPlus => "AA+",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{linearize, to_contrast_ratio, to_luminance, ContrastLevel, UNREPORTED};
    use crate::assert_close_enough;

    #[test]
    fn test_linearize() {
        assert_eq!(linearize(0.0), 0.0);
        assert_eq!(linearize(1.0), 1.0);
        assert_close_enough!(linearize(0.03928), 0.03928 / 12.92);
        assert_close_enough!(linearize(0.5), 0.21404114048223255);
    }

    #[test]
    fn test_luminance() {
        assert_eq!(to_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(to_luminance(&[1.0, 1.0, 1.0]), 1.0);
        assert_close_enough!(to_luminance(&[1.0, 0.0, 0.0]), 0.2126);
        assert_close_enough!(to_luminance(&[0.0, 1.0, 0.0]), 0.7152);
        assert_close_enough!(to_luminance(&[0.0, 0.0, 1.0]), 0.0722);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_eq!(to_contrast_ratio(1.0, 0.0), 21.0);
        assert_eq!(to_contrast_ratio(0.0, 1.0), 21.0);
        assert_eq!(to_contrast_ratio(0.4, 0.4), 1.0);
        assert_close_enough!(to_contrast_ratio(0.2, 0.7), 0.75 / 0.25);
    }

    #[test]
    fn test_classify() {
        for (ratio, level) in [
            (1.0, None),
            (2.99, None),
            (3.0, Some(ContrastLevel::AaPlus)),
            (4.49, Some(ContrastLevel::AaPlus)),
            (4.5, Some(ContrastLevel::Aa)),
            (6.99, Some(ContrastLevel::Aa)),
            (7.0, Some(ContrastLevel::Aaa)),
            (21.0, Some(ContrastLevel::Aaa)),
        ] {
            assert_eq!(ContrastLevel::classify(ratio), level, "ratio {}", ratio);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(ContrastLevel::label(2.99), UNREPORTED);
        assert_eq!(ContrastLevel::label(3.0), "AA+");
        assert_eq!(ContrastLevel::label(4.49), "AA+");
        assert_eq!(ContrastLevel::label(4.5), "AA");
        assert_eq!(ContrastLevel::label(6.99), "AA");
        assert_eq!(ContrastLevel::label(7.0), "AAA");
        assert_eq!(format!("{}", ContrastLevel::AaPlus), "AA+");
        assert!(ContrastLevel::AaPlus < ContrastLevel::Aa);
        assert!(ContrastLevel::Aa < ContrastLevel::Aaa);
    }
}
