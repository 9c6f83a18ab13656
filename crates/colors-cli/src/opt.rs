//! Helper module with the options for logging and rendering.
//!
//! The logging [`Volume`] follows the number of `-v` flags. Rendering
//! [`Options`] are assembled with an [`OptionBuilder`].

use log::LevelFilter;

/// The diagnostic logging volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Volume {
    Regular,
    Informative,
    Detailed,
    Exhaustive,
}

impl Volume {
    /// Determine the volume for the number of `-v` flags.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Regular,
            1 => Self::Informative,
            2 => Self::Detailed,
            _ => Self::Exhaustive,
        }
    }

    /// Get the corresponding log level filter.
    pub fn level_filter(&self) -> LevelFilter {
        match *self {
            Self::Regular => LevelFilter::Warn,
            Self::Informative => LevelFilter::Info,
            Self::Detailed => LevelFilter::Debug,
            Self::Exhaustive => LevelFilter::Trace,
        }
    }

    /// Initialize the logger with this volume.
    ///
    /// The `RUST_LOG` environment variable, if set, takes precedence. Log
    /// records go to standard error.
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.level_filter())
            .parse_default_env()
            .format_timestamp(None)
            .init();
    }
}

/// The layout of rendered tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// Comma-separated values without padding.
    #[default]
    Csv,
    /// Left-aligned columns padded to equal width, for reading in a terminal.
    Table,
}

#[derive(Clone, Debug)]
struct OptionData {
    layout: Layout,
    separator: char,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            layout: Layout::Csv,
            separator: ',',
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the layout.
    pub fn layout(&mut self, layout: Layout) -> &mut Self {
        self.0.layout = layout;
        self
    }

    /// Set the field separator for CSV.
    pub fn separator(&mut self, separator: char) -> &mut Self {
        self.0.separator = separator;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the layout.
    pub fn layout(&self) -> Layout {
        self.0.layout
    }

    /// Get the CSV field separator.
    pub fn separator(&self) -> char {
        self.0.separator
    }
}

#[cfg(test)]
mod test {
    use super::{Layout, Options, Volume};
    use log::LevelFilter;

    #[test]
    fn test_builder() {
        let options = Options::default();
        assert_eq!(options.layout(), Layout::Csv);
        assert_eq!(options.separator(), ',');

        let options = Options::builder()
            .layout(Layout::Table)
            .separator(';')
            .build();
        assert_eq!(options.layout(), Layout::Table);
        assert_eq!(options.separator(), ';');
    }

    #[test]
    fn test_volume() {
        assert_eq!(Volume::from_count(0).level_filter(), LevelFilter::Warn);
        assert_eq!(Volume::from_count(1).level_filter(), LevelFilter::Info);
        assert_eq!(Volume::from_count(2).level_filter(), LevelFilter::Debug);
        assert_eq!(Volume::from_count(9).level_filter(), LevelFilter::Trace);
    }
}
