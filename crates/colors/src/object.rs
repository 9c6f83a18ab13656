use crate::core::{
    format_hex, parse_hex, to_contrast_ratio, to_distance, to_eq_channels, to_luminance,
    ContrastLevel, FloatExt,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A named sRGB color.
///
/// Every color object has a name and three channels, red, green, and blue.
/// The name is a display label only and need not be unique. Channels are
/// 24-bit coordinates scaled to unit range, i.e., divided by 255.
///
/// Color objects are immutable. All derived quantities, including the
/// [hexadecimal form](Color::hex) and the [relative
/// luminance](Color::luminance), are computed on demand.
///
/// ## Equality Testing and Hashing
///
/// Two colors are equal if their names are equal and their channels agree
/// after zeroing out not-a-numbers, rounding to 12 digits past the decimal
/// (4 for `f32`), and dropping the sign of negative zeros.
#[derive(Clone)]
pub struct Color {
    name: String,
    channels: [Float; 3],
}

impl Color {
    /// Instantiate a new color from 24-bit integer channels.
    ///
    /// This constructor divides each channel by 255. It does not check bounds,
    /// so channels outside `0..=255` result in channel values outside unit
    /// range.
    ///
    /// ```
    /// # use colors::Color;
    /// let orange = Color::from_rgb("orange", 255, 128, 0);
    /// assert_eq!(orange.hex(), "#ff8000");
    /// assert_eq!(orange.red(), 1.0);
    /// ```
    pub fn from_rgb(name: &str, red: i32, green: i32, blue: i32) -> Self {
        let max = <Float as FloatExt>::MAX_24BIT;
        Self {
            name: name.to_string(),
            channels: [
                red as Float / max,
                green as Float / max,
                blue as Float / max,
            ],
        }
    }

    /// Instantiate a new color from six hexadecimal digits.
    ///
    /// The string must have exactly two hexadecimal digits per channel and no
    /// leading `#`. Digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// This method returns [`ColorFormatError::UnexpectedLength`] if the string
    /// does not have six characters and [`ColorFormatError::MalformedHex`] if
    /// the two digits for a channel are not hexadecimal.
    ///
    /// ```
    /// # use colors::Color;
    /// # use colors::error::ColorFormatError;
    /// let teal = Color::from_hex("teal", "008080")?;
    /// assert_eq!(teal.hex(), "#008080");
    ///
    /// assert!(Color::from_hex("bad", "#008080").is_err());
    /// assert!(Color::from_hex("bad", "zz0000").is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn from_hex(name: &str, hex: &str) -> Result<Self, ColorFormatError> {
        let channels = parse_hex(hex)?;
        Ok(Self {
            name: name.to_string(),
            channels,
        })
    }

    /// Access the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the red channel.
    #[inline]
    pub fn red(&self) -> Float {
        self.channels[0]
    }

    /// Access the green channel.
    #[inline]
    pub fn green(&self) -> Float {
        self.channels[1]
    }

    /// Access the blue channel.
    #[inline]
    pub fn blue(&self) -> Float {
        self.channels[2]
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// This method scales each channel by 255 and truncates the result. It
    /// does not round. Hence, for every color created from six lowercase
    /// hexadecimal digits, the result is those same digits prefixed with `#`.
    /// Channels outside unit range saturate at `00` and `ff`.
    #[must_use = "method returns owned string and does not mutate original value"]
    pub fn hex(&self) -> String {
        format_hex(&self.channels)
    }

    /// Determine this color's relative luminance.
    ///
    /// This method linearizes each channel with the sRGB transfer function as
    /// defined by [WCAG
    /// 2.0](https://www.w3.org/TR/WCAG20/#relativeluminancedef) and returns
    /// their weighted sum `0.2126 R + 0.7152 G + 0.0722 B`. For channels in
    /// unit range, the result also is in unit range.
    ///
    /// ```
    /// # use colors::Color;
    /// assert_eq!(Color::from_rgb("black", 0, 0, 0).luminance(), 0.0);
    /// assert_eq!(Color::from_rgb("red", 255, 0, 0).luminance(), 0.2126);
    /// ```
    pub fn luminance(&self) -> Float {
        to_luminance(&self.channels)
    }

    /// Determine the contrast ratio between this and the other color.
    ///
    /// The ratio is `(L1 + 0.05) / (L2 + 0.05)`, where L1 is the relative
    /// luminance of the lighter and L2 the relative luminance of the darker
    /// color. It is symmetric and, for channels in unit range, falls between 1
    /// and 21. Use [`ContrastLevel::classify`] to classify the result.
    ///
    /// ```
    /// # use colors::Color;
    /// # use colors::error::ColorFormatError;
    /// let white = Color::from_hex("white", "ffffff")?;
    /// let black = Color::from_hex("black", "000000")?;
    /// assert_eq!(white.contrast_ratio(&black), 21.0);
    /// assert_eq!(black.contrast_ratio(&white), 21.0);
    /// assert_eq!(white.contrast_ratio(&white), 1.0);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn contrast_ratio(&self, other: &Self) -> Float {
        to_contrast_ratio(self.luminance(), other.luminance())
    }

    /// Determine the contrast level between this and the other color.
    ///
    /// This method returns `None` if the contrast ratio is less than 3.
    pub fn contrast_level(&self, other: &Self) -> Option<ContrastLevel> {
        ContrastLevel::classify(self.contrast_ratio(other))
    }

    /// Determine the distance between this and the other color.
    ///
    /// This method treats the red, green, and blue channels as the axes of a
    /// three-dimensional space and computes the Euclidean distance. The metric
    /// is naive: It is zero only if all three channels are equal, but equal
    /// distances do not imply equal perceived differences.
    ///
    /// ```
    /// # use colors::Color;
    /// # use colors::error::ColorFormatError;
    /// let red = Color::from_hex("red", "ff0000")?;
    /// let green = Color::from_hex("green", "00ff00")?;
    /// assert_eq!(red.distance_to(&green), (2.0 as colors::Float).sqrt());
    /// assert_eq!(red.distance_to(&red), 0.0);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn distance_to(&self, other: &Self) -> Float {
        to_distance(&self.channels, &other.channels)
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.channels
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        to_eq_channels(&self.channels).hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name {
            return false;
        } else if self.channels == other.channels {
            return true;
        }

        to_eq_channels(&self.channels) == to_eq_channels(&other.channels)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.channels;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.name, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color as its name followed by its hexadecimal notation in
    /// parentheses, e.g., `teal (#008080)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} ({})", self.name, self.hex()))
    }
}

// ====================================================================================================================
