use anyhow::Result;
use clap::Args;
use imageconf_core::colormap::ColormapRegistry;

#[derive(Args)]
pub struct ColormapsArgs {
    /// Extra colormap names to register
    #[arg(long = "custom", value_name = "NAME")]
    pub custom_colormaps: Vec<String>,
}

pub fn run(args: &ColormapsArgs) -> Result<()> {
    let registry = ColormapRegistry::with_custom(&args.custom_colormaps);
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
