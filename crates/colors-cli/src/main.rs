//! # Colors
//!
//! A tool for playing with colors. It has two subcommands:
//!
//!   * `colors contrast-ratio --in FILE` tabulates the WCAG contrast ratios
//!     between all colors in a palette file, plus white and black.
//!   * `colors distance A B` prints the naive RGB distance and the contrast
//!     ratio between two colors.

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod err;
mod opt;
mod render;

use cmd::{ContrastRatioArgs, DistanceArgs, DISTANCE_LONG_ABOUT};
use opt::Volume;

#[derive(Parser, Debug)]
#[command(name = "colors", version, about = "A tool for playing with colors", long_about = None)]
struct Cli {
    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tabulate the contrast ratios between all colors in a palette file
    #[command(visible_alias = "cr")]
    ContrastRatio(ContrastRatioArgs),

    /// Compute the color distance between given colors
    #[command(visible_alias = "d", long_about = DISTANCE_LONG_ABOUT)]
    Distance(DistanceArgs),
}

impl Command {
    fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();

        match *self {
            Self::ContrastRatio(ref args) => args.run(&mut stdout),
            Self::Distance(ref args) => args.run(&mut stdout),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    Volume::from_count(cli.verbosity).init_logger();

    match cli.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            err::report_to_stderr(&error);
            ExitCode::FAILURE
        }
    }
}
