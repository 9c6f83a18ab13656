use crate::core::to_contrast_ratio;
use crate::{Color, ContrastLevel, Float, UNREPORTED};

/// A matrix of pairwise contrast labels.
///
/// The matrix covers the given colors bracketed by white as first and black
/// as last color. Its header starts with an empty corner cell followed by the
/// display of every color, e.g., `ink (#a95f09)`. Each row starts
/// with the same label for its color followed by one cell per column. A cell
/// holds the contrast ratio between row and column color, with two digits
/// past the decimal, and its [`ContrastLevel`], e.g., `4.50 AA`. Cells for
/// ratios that meet no level hold [`UNREPORTED`] instead.
///
/// The matrix is symmetric and its diagonal is unreported.
///
/// ```
/// # use colors::{Color, ContrastMatrix};
/// # use colors::error::ColorFormatError;
/// let matrix = ContrastMatrix::new(&[Color::from_hex("ink", "a95f09")?]);
/// assert_eq!(
///     matrix.header(),
///     ["", "white (#ffffff)", "ink (#a95f09)", "black (#000000)"]
/// );
/// assert_eq!(matrix.rows()[1][1..], ["4.85 AA", "--", "4.33 AA+"]);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContrastMatrix {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ContrastMatrix {
    /// Create a new contrast matrix for the given colors.
    pub fn new(colors: &[Color]) -> Self {
        let mut all = Vec::with_capacity(colors.len() + 2);
        all.push(Color::from_rgb("white", 255, 255, 255));
        all.extend_from_slice(colors);
        all.push(Color::from_rgb("black", 0, 0, 0));

        let labels: Vec<String> = all.iter().map(Color::to_string).collect();

        let luminances: Vec<Float> = all.iter().map(Color::luminance).collect();

        let mut header = Vec::with_capacity(labels.len() + 1);
        header.push(String::new());
        header.extend(labels.iter().cloned());

        let rows = labels
            .into_iter()
            .zip(luminances.iter())
            .map(|(label, l1)| {
                let mut row = Vec::with_capacity(luminances.len() + 1);
                row.push(label);
                row.extend(
                    luminances
                        .iter()
                        .map(|l2| Self::cell(to_contrast_ratio(*l1, *l2))),
                );
                row
            })
            .collect();

        Self { header, rows }
    }

    /// Format the contrast ratio as a matrix cell.
    ///
    /// ```
    /// # use colors::ContrastMatrix;
    /// assert_eq!(ContrastMatrix::cell(2.999), "--");
    /// assert_eq!(ContrastMatrix::cell(4.5007294383), "4.50 AA");
    /// assert_eq!(ContrastMatrix::cell(21.0), "21.00 AAA");
    /// ```
    pub fn cell(ratio: Float) -> String {
        match ContrastLevel::classify(ratio) {
            Some(level) => format!("{:.2} {}", ratio, level),
            None => UNREPORTED.to_string(),
        }
    }

    /// Access the header.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Access the rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get the number of columns, including the label column.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Iterate over the header and all rows.
    pub fn lines(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}
