//! Utility module with the errors of this crate.

/// One of the three channels of an RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel, first in hexadecimal notation.
    Red,
    /// The green channel, second in hexadecimal notation.
    Green,
    /// The blue channel, third in hexadecimal notation.
    Blue,
}

impl Channel {
    /// Get the channel's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Get the channel for the given index `0..=2`.
    pub(crate) const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Red,
            1 => Self::Green,
            _ => Self::Blue,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// An erroneous hexadecimal color format.
///
/// A color in hexadecimal format has exactly six digits, two per channel, and
/// no leading `#`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with the wrong number of characters. For example, `abc`
    /// has three characters and `1234567` has seven.
    UnexpectedLength(usize),

    /// A color format whose two digits for a channel are not hexadecimal. For
    /// example, the red channel of `zz0000` is malformed.
    MalformedHex { channel: Channel, digits: String },
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedLength(length) => f.write_fmt(format_args!(
                "color format should have 6 hexadecimal digits but has {} characters",
                length
            )),
            MalformedHex {
                channel,
                ref digits,
            } => f.write_fmt(format_args!(
                "color format should have 2 hexadecimal digits for {} but has `{}`",
                channel, digits
            )),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// The kinds of errors while parsing a palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteErrorKind {
    /// A line that does not consist of exactly a name and a color.
    Syntax(String),
    /// A line with a malformed color.
    Format(ColorFormatError),
}

/// An error while parsing a palette.
///
/// The error records the 1-based number of the offending line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteError {
    line: usize,
    kind: PaletteErrorKind,
}

impl PaletteError {
    /// Create a new palette error.
    pub fn new(line: usize, kind: PaletteErrorKind) -> Self {
        Self { line, kind }
    }

    /// Get the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PaletteErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PaletteErrorKind::Syntax(ref text) => f.write_fmt(format_args!(
                "syntax error on line {}: `{}` should have the format `name hex`",
                self.line, text
            )),
            PaletteErrorKind::Format(_) => {
                f.write_fmt(format_args!("could not parse color on line {}", self.line))
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let PaletteErrorKind::Format(ref error) = self.kind {
            Some(error)
        } else {
            None
        }
    }
}
