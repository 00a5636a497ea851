pub mod apply;
pub mod choices;
pub mod colormaps;
pub mod defaults;

use clap::ValueEnum;

/// How a snapshot is printed.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled human-readable summary
    #[default]
    Summary,
    /// TOML document
    Toml,
}
