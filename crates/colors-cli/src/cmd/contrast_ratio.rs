use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};

use colors::{palette, Color, ContrastMatrix};

use crate::opt::{Layout, Options};
use crate::render::render;

/// The arguments for the `contrast-ratio` subcommand.
#[derive(Args, Debug)]
pub struct ContrastRatioArgs {
    /// The name of the file with all the colors in it, one `name hex` per line
    #[arg(long = "in", value_name = "INFILE")]
    input: PathBuf,

    /// The name of the file to use for output. If absent, use stdout
    #[arg(long = "out", value_name = "OUTFILE")]
    output: Option<PathBuf>,

    /// The layout of the output
    #[arg(long, value_enum, default_value_t = Layout::Csv)]
    format: Layout,

    /// The field separator for CSV output
    #[arg(long, default_value_t = ',')]
    separator: char,
}

impl ContrastRatioArgs {
    /// Get the requested layout.
    pub fn format(&self) -> Layout {
        self.format
    }

    fn options(&self) -> Options {
        Options::builder()
            .layout(self.format())
            .separator(self.separator)
            .build()
    }

    /// Run the subcommand, writing to the given output unless the arguments
    /// name an output file.
    pub fn run<W: Write>(&self, stdout: &mut W) -> Result<()> {
        let colors = read_palette(&self.input)?;
        for color in &colors {
            debug!("luminance of {} = {:.6}", color, color.luminance());
        }

        let matrix = ContrastMatrix::new(&colors);
        let options = self.options();

        if let Some(ref path) = self.output {
            let file = File::create(path)
                .with_context(|| format!("could not create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render(&matrix, &options, &mut writer)
                .and_then(|()| writer.flush())
                .with_context(|| format!("could not write output file {}", path.display()))?;
            info!("Output is in file {}", path.display());
        } else {
            render(&matrix, &options, stdout).context("could not write output")?;
            stdout.flush().context("could not write output")?;
        }
        Ok(())
    }
}

/// Read the palette file.
fn read_palette(path: &Path) -> Result<Vec<Color>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read palette {}", path.display()))?;
    let colors = palette::parse(&text)
        .with_context(|| format!("invalid palette {}", path.display()))?;
    debug!("read {} colors from {}", colors.len(), path.display());
    Ok(colors)
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use std::path::PathBuf;

    use anyhow::Result;
    use tempfile::NamedTempFile;

    use super::ContrastRatioArgs;
    use crate::opt::Layout;

    fn palette_file(text: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn args(input: PathBuf, output: Option<PathBuf>, format: Layout) -> ContrastRatioArgs {
        ContrastRatioArgs {
            input,
            output,
            format,
            separator: ',',
        }
    }

    #[test]
    fn test_stdout() -> Result<()> {
        let file = palette_file("paper fff6dd\n\nink a95f09\n")?;
        let mut stdout = Vec::<u8>::new();
        args(file.path().to_path_buf(), None, Layout::Csv).run(&mut stdout)?;

        let output = String::from_utf8(stdout)?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            ",white (#ffffff),paper (#fff6dd),ink (#a95f09),black (#000000)"
        );
        assert_eq!(
            lines[2],
            "paper (#fff6dd),--,--,4.50 AA,19.48 AAA"
        );
        Ok(())
    }

    #[test]
    fn test_output_file() -> Result<()> {
        let file = palette_file("ink a95f09")?;
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("contrast.txt");

        let mut stdout = Vec::<u8>::new();
        args(file.path().to_path_buf(), Some(out.clone()), Layout::Table).run(&mut stdout)?;
        assert!(stdout.is_empty());

        let written = std::fs::read_to_string(&out)?;
        assert_eq!(written.lines().count(), 5);
        assert!(written.lines().nth(1).is_some_and(|l| l.starts_with("----")));
        Ok(())
    }

    #[test]
    fn test_errors() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing.txt");
        let error = args(missing, None, Layout::Csv)
            .run(&mut Vec::<u8>::new())
            .unwrap_err();
        assert!(error.to_string().starts_with("could not read palette"));

        let file = palette_file("ink a95f09\nsmudge 12345g\n")?;
        let error = args(file.path().to_path_buf(), None, Layout::Csv)
            .run(&mut Vec::<u8>::new())
            .unwrap_err();
        let chain: Vec<String> = error.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain.len(), 3);
        assert!(chain[0].starts_with("invalid palette"));
        assert_eq!(chain[1], "could not parse color on line 2");
        assert_eq!(
            chain[2],
            "color format should have 2 hexadecimal digits for blue but has `5g`"
        );
        Ok(())
    }
}
