use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use imageconf_core::colormap::ColormapRegistry;
use imageconf_core::config::ImageRenderConfig;

use super::OutputFormat;
use crate::summary::print_snapshot;

#[derive(Args)]
pub struct DefaultsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

pub fn run(args: &DefaultsArgs) -> Result<()> {
    let config = ImageRenderConfig::new(Arc::new(ColormapRegistry::builtin()));
    print_snapshot(&config.snapshot(), args.format)
}
