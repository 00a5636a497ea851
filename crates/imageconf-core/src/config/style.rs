use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM_BRUSH_COLOR, DEFAULT_ZOOM_PEN_COLOR, DEFAULT_ZOOM_PEN_WIDTH};

use super::types::{FillPattern, LineStyle};

/// Outline description handed to the renderer, which builds the actual pen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenStyle {
    /// `#rrggbb`
    pub color: String,
    pub width: f32,
    pub line: LineStyle,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_ZOOM_PEN_COLOR.to_string(),
            width: DEFAULT_ZOOM_PEN_WIDTH,
            line: LineStyle::Solid,
        }
    }
}

/// Fill description handed to the renderer, which builds the actual brush.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushStyle {
    /// `#rrggbb`
    pub color: String,
    pub fill: FillPattern,
}

impl Default for BrushStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_ZOOM_BRUSH_COLOR.to_string(),
            fill: FillPattern::Solid,
        }
    }
}

/// Axis bounds of one zoom step, kept so the user can zoom back out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// A caller-defined marked region of the image. Not interpreted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightRegion {
    pub label: String,
    /// `#rrggbb`
    pub color: String,
    /// Contour level at which the region outline is drawn.
    pub level: f64,
}

/// Normalize a `#rrggbb` colour string to lowercase, or `None` if malformed.
pub fn normalize_hex_color(color: &str) -> Option<String> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", hex.to_ascii_lowercase()))
    } else {
        None
    }
}
