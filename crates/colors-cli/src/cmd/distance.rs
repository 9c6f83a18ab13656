use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use colors::{Color, ContrastLevel};

/// The long help for the `distance` subcommand.
pub const DISTANCE_LONG_ABOUT: &str = "\
Compute the color distance between given colors.

This interpretation is very naive, and assumes color is represented in a
3-dimensional space with axes red, green and blue. This command computes the
distance between two points in this space using the formula
    sqrt(R^2 + G^2 + B^2)
where R is the difference between the two colors' red values, etc.

It also prints the WCAG contrast ratio between the two colors.";

/// The arguments for the `distance` subcommand.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// The first color as six hexadecimal digits, e.g., fff6dd
    #[arg(value_name = "A")]
    a: String,

    /// The second color as six hexadecimal digits, e.g., a95f09
    #[arg(value_name = "B")]
    b: String,
}

impl DistanceArgs {
    /// Run the subcommand, writing a summary to the given output.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let a = Color::from_hex("a", &self.a)
            .with_context(|| format!("invalid color A `{}`", self.a))?;
        let b = Color::from_hex("b", &self.b)
            .with_context(|| format!("invalid color B `{}`", self.b))?;
        debug!("luminance of {} = {:.6}", a, a.luminance());
        debug!("luminance of {} = {:.6}", b, b.luminance());

        let ratio = a.contrast_ratio(&b);
        writeln!(out, "A is {}", a.hex())?;
        writeln!(out, "B is {}", b.hex())?;
        writeln!(out, "Distance between A and B: {:.2}", a.distance_to(&b))?;
        writeln!(
            out,
            "Contrast ratio between A and B: {:.2} ({})",
            ratio,
            ContrastLevel::label(ratio)
        )?;
        out.flush()?;
        Ok(())
    }
}
