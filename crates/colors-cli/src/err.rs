//! Helper module for reporting errors.

use std::io::{IsTerminal, Write};

/// Report the error, including any sources.
///
/// The first line starts with `ERROR:`, which is bold and red if `styled`.
/// Every source follows on its own, indented line.
pub fn report<W: Write>(
    error: &(dyn std::error::Error + 'static),
    styled: bool,
    out: &mut W,
) -> std::io::Result<()> {
    let (on, off) = if styled { ("\x1b[1;31m", "\x1b[m") } else { ("", "") };
    writeln!(out, "{}ERROR:{} {}", on, off, error)?;

    let mut error = error;
    while let Some(inner) = error.source() {
        writeln!(out, "    {}", inner)?;
        error = inner;
    }
    Ok(())
}

/// Report the error on standard error.
pub fn report_to_stderr(error: &anyhow::Error) {
    let stderr = std::io::stderr();
    let styled = stderr.is_terminal();
    // Nothing left to do if standard error is gone.
    let _ = report(error.as_ref(), styled, &mut stderr.lock());
}
