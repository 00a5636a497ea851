use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use imageconf_core::colormap::ColormapRegistry;
use imageconf_core::config::{ConfigPatch, ImageRenderConfig};
use tracing::info;

use super::OutputFormat;
use crate::summary::print_snapshot;

#[derive(Args)]
pub struct ApplyArgs {
    /// TOML file holding the options to change
    pub patch: PathBuf,

    /// Extra colormap names to register before applying the patch
    #[arg(long = "custom", value_name = "NAME")]
    pub custom_colormaps: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

/// Apply a patch file to a fresh config and print the resulting snapshot.
pub fn run(args: &ApplyArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.patch)
        .with_context(|| format!("Failed to read patch {}", args.patch.display()))?;
    let patch: ConfigPatch = toml::from_str(&text)
        .with_context(|| format!("Failed to parse patch {}", args.patch.display()))?;

    let registry = Arc::new(ColormapRegistry::with_custom(&args.custom_colormaps));
    let mut config = ImageRenderConfig::new(registry);
    config.update(&patch);
    info!(patch = %args.patch.display(), "Patch applied");

    print_snapshot(&config.snapshot(), args.format)
}
