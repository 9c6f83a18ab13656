//! Parsing of line-oriented color lists.
//!
//! A palette has one color per line, a name followed by six hexadecimal
//! digits, separated by white space:
//!
//! ```text
//! paper fff6dd
//! ink   a95f09
//! ```
//!
//! Leading and trailing white space is ignored, as are blank lines. The first
//! malformed line aborts parsing.

use crate::error::{PaletteError, PaletteErrorKind};
use crate::Color;

/// Parse a single, already trimmed, non-blank line.
fn parse_line(line: &str, number: usize) -> Result<Color, PaletteError> {
    let mut fields = line.split_whitespace();
    let (Some(name), Some(hex), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(PaletteError::new(
            number,
            PaletteErrorKind::Syntax(line.to_string()),
        ));
    };

    Color::from_hex(name, hex)
        .map_err(|error| PaletteError::new(number, PaletteErrorKind::Format(error)))
}

/// Parse the palette.
///
/// # Errors
///
/// This function returns a [`PaletteError`] with the 1-based line number for
/// the first line that does not have exactly two fields or whose second field
/// is not a valid hexadecimal color.
///
/// ```
/// # use colors::palette;
/// # use colors::error::PaletteError;
/// let colors = palette::parse("paper fff6dd\n\n  ink a95f09  \n")?;
/// assert_eq!(colors.len(), 2);
/// assert_eq!(colors[1].to_string(), "ink (#a95f09)");
///
/// let error = palette::parse("paper fff6dd\nink a95f0").unwrap_err();
/// assert_eq!(error.line(), 2);
/// # Ok::<(), PaletteError>(())
/// ```
pub fn parse(text: &str) -> Result<Vec<Color>, PaletteError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|&(_, line)| !line.is_empty())
        .map(|(number, line)| parse_line(line, number))
        .collect()
}
