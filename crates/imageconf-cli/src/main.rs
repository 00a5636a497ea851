mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imageconf", about = "Inspect and patch image rendering configurations")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration snapshot
    Defaults(commands::defaults::DefaultsArgs),
    /// Apply a TOML patch file to the default configuration
    Apply(commands::apply::ApplyArgs),
    /// List registered colormaps
    Colormaps(commands::colormaps::ColormapsArgs),
    /// List the accepted interpolation, contrast and projection choices
    Choices,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Defaults(args) => commands::defaults::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Colormaps(args) => commands::colormaps::run(args),
        Commands::Choices => commands::choices::run(),
    }
}
