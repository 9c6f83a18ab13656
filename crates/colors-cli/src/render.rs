//! Rendering of contrast matrices as CSV or aligned tables.

use std::io::{Result, Write};

use colors::ContrastMatrix;

use crate::opt::{Layout, Options};

/// Quote the CSV field if it contains the separator, a quote, or a line break.
fn quote(field: &str, separator: char) -> String {
    if field.contains([separator, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_csv<W: Write>(matrix: &ContrastMatrix, separator: char, out: &mut W) -> Result<()> {
    let mut delimiter = [0; 4];
    let delimiter: &str = separator.encode_utf8(&mut delimiter);

    for line in matrix.lines() {
        let fields: Vec<String> = line.iter().map(|f| quote(f, separator)).collect();
        writeln!(out, "{}", fields.join(delimiter))?;
    }
    Ok(())
}

fn render_table<W: Write>(matrix: &ContrastMatrix, out: &mut W) -> Result<()> {
    let mut widths = vec![0; matrix.width()];
    for line in matrix.lines() {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut write_line = |cells: &[String]| -> Result<()> {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        writeln!(out, "{}", padded.join(" | ").trim_end())
    };

    write_line(matrix.header())?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_line(&[rule.join("-+-")])?;
    for row in matrix.rows() {
        write_line(row.as_slice())?;
    }
    Ok(())
}

/// Render the contrast matrix with the given options.
pub fn render<W: Write>(matrix: &ContrastMatrix, options: &Options, out: &mut W) -> Result<()> {
    match options.layout() {
        Layout::Csv => render_csv(matrix, options.separator(), out),
        Layout::Table => render_table(matrix, out),
    }
}
