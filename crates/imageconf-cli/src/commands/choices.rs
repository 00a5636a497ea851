use anyhow::Result;
use imageconf_core::config::{
    DisplayStyle, Interpolation, ProjectionAxis, TricolorBackground, TricolorMode,
};
use imageconf_core::consts::CONTRAST_LABELS;

pub fn run() -> Result<()> {
    print_list("Interpolation", Interpolation::ALL.iter().map(|v| v.name()));
    print_list("Contrast (%)", CONTRAST_LABELS.iter().copied());
    print_list("Display style", DisplayStyle::ALL.iter().map(|v| v.name()));
    print_list("Background", TricolorBackground::ALL.iter().map(|v| v.name()));
    print_list("Tricolor mode", TricolorMode::ALL.iter().map(|v| v.name()));
    print_list("Projection", ProjectionAxis::ALL.iter().map(|v| v.name()));
    Ok(())
}

fn print_list<'a>(label: &str, values: impl Iterator<Item = &'a str>) {
    let values: Vec<&str> = values.collect();
    println!("{:<16}{}", label, values.join(", "));
}
