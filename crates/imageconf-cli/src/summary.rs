use anyhow::Result;
use console::Style;
use imageconf_core::config::ConfigSnapshot;

use crate::commands::OutputFormat;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    enabled: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            enabled: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_snapshot(snapshot: &ConfigSnapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(snapshot)?),
        OutputFormat::Summary => print_summary(snapshot),
    }
    Ok(())
}

fn print_summary(snap: &ConfigSnapshot) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(&snap.title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(snap.title.chars().count().max(8))));
    println!();

    let colormap = if snap.colormap_reversed {
        format!("{} (reversed)", snap.colormap)
    } else {
        snap.colormap.clone()
    };
    let contrast = if snap.contrast_level > 0.0 {
        format!("{}%", snap.contrast_level)
    } else {
        "None".to_string()
    };

    let values = [
        ("Style", snap.display_style.clone()),
        ("Colormap", colormap),
        ("Interpolation", snap.interpolation.clone()),
        ("Contrast", contrast),
        ("Contours", snap.contour_level_count.to_string()),
        ("Tricolor", format!("{} on {}", snap.tricolor_mode, snap.tricolor_background)),
        ("Cursor", snap.cursor_mode.clone()),
    ];
    for (label, value) in values {
        println!("  {:<16}{}", s.label.apply_to(label), s.value.apply_to(value));
    }

    let flags = [
        ("Flip vertical", snap.flip_vertical),
        ("Flip horizontal", snap.flip_horizontal),
        ("Rotate 90", snap.rotate_90),
        ("Log scale", snap.log_scale),
        ("Show axis", snap.show_axis),
        ("Contour labels", snap.show_contour_labels),
    ];
    for (label, on) in flags {
        let value = if on {
            s.enabled.apply_to("on")
        } else {
            s.disabled.apply_to("off")
        };
        println!("  {:<16}{}", s.label.apply_to(label), value);
    }
    println!();
}
