use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A loosely typed option value as it arrives from a UI control or a
/// patch file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// Numbers are true when non-zero; strings must spell a boolean.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            Self::Float(f) if f.is_nan() => None,
            Self::Float(f) => Some(*f != 0.0),
            Self::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Floats are truncated toward zero; non-finite floats are rejected.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Float(_) => None,
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// A partial configuration update. Absent fields leave the config alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub interpolation: Option<OptionValue>,
    pub colormap: Option<OptionValue>,
    pub colormap_reversed: Option<OptionValue>,
    pub contrast_level: Option<OptionValue>,
    pub flip_vertical: Option<OptionValue>,
    pub flip_horizontal: Option<OptionValue>,
    pub rotate_90: Option<OptionValue>,
    pub tricolor_background: Option<OptionValue>,
    pub contour_level_count: Option<OptionValue>,
    pub display_style: Option<OptionValue>,
    pub title: Option<OptionValue>,
    pub tricolor_mode: Option<OptionValue>,
    pub show_axis: Option<OptionValue>,
    pub log_scale: Option<OptionValue>,
    pub show_contour_labels: Option<OptionValue>,
    pub cursor_mode: Option<OptionValue>,
}

impl ConfigPatch {
    pub fn interpolation(mut self, v: impl Into<OptionValue>) -> Self {
        self.interpolation = Some(v.into());
        self
    }

    pub fn colormap(mut self, v: impl Into<OptionValue>) -> Self {
        self.colormap = Some(v.into());
        self
    }

    pub fn colormap_reversed(mut self, v: impl Into<OptionValue>) -> Self {
        self.colormap_reversed = Some(v.into());
        self
    }

    pub fn contrast_level(mut self, v: impl Into<OptionValue>) -> Self {
        self.contrast_level = Some(v.into());
        self
    }

    pub fn flip_vertical(mut self, v: impl Into<OptionValue>) -> Self {
        self.flip_vertical = Some(v.into());
        self
    }

    pub fn flip_horizontal(mut self, v: impl Into<OptionValue>) -> Self {
        self.flip_horizontal = Some(v.into());
        self
    }

    pub fn rotate_90(mut self, v: impl Into<OptionValue>) -> Self {
        self.rotate_90 = Some(v.into());
        self
    }

    pub fn tricolor_background(mut self, v: impl Into<OptionValue>) -> Self {
        self.tricolor_background = Some(v.into());
        self
    }

    pub fn contour_level_count(mut self, v: impl Into<OptionValue>) -> Self {
        self.contour_level_count = Some(v.into());
        self
    }

    pub fn display_style(mut self, v: impl Into<OptionValue>) -> Self {
        self.display_style = Some(v.into());
        self
    }

    pub fn title(mut self, v: impl Into<OptionValue>) -> Self {
        self.title = Some(v.into());
        self
    }

    pub fn tricolor_mode(mut self, v: impl Into<OptionValue>) -> Self {
        self.tricolor_mode = Some(v.into());
        self
    }

    pub fn show_axis(mut self, v: impl Into<OptionValue>) -> Self {
        self.show_axis = Some(v.into());
        self
    }

    pub fn log_scale(mut self, v: impl Into<OptionValue>) -> Self {
        self.log_scale = Some(v.into());
        self
    }

    pub fn show_contour_labels(mut self, v: impl Into<OptionValue>) -> Self {
        self.show_contour_labels = Some(v.into());
        self
    }

    pub fn cursor_mode(mut self, v: impl Into<OptionValue>) -> Self {
        self.cursor_mode = Some(v.into());
        self
    }
}

/// Current value of every option [`ConfigPatch`] recognizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub interpolation: String,
    pub colormap: String,
    pub colormap_reversed: bool,
    pub contrast_level: f64,
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
    pub rotate_90: bool,
    pub tricolor_background: String,
    pub contour_level_count: i64,
    pub display_style: String,
    pub title: String,
    pub tricolor_mode: String,
    pub show_axis: bool,
    pub log_scale: bool,
    pub show_contour_labels: bool,
    pub cursor_mode: String,
}

impl ConfigSnapshot {
    /// The snapshot as an option-name to value mapping.
    pub fn to_map(&self) -> BTreeMap<String, OptionValue> {
        let entries: [(&str, OptionValue); 16] = [
            ("interpolation", self.interpolation.as_str().into()),
            ("colormap", self.colormap.as_str().into()),
            ("colormap_reversed", self.colormap_reversed.into()),
            ("contrast_level", self.contrast_level.into()),
            ("flip_vertical", self.flip_vertical.into()),
            ("flip_horizontal", self.flip_horizontal.into()),
            ("rotate_90", self.rotate_90.into()),
            ("tricolor_background", self.tricolor_background.as_str().into()),
            ("contour_level_count", self.contour_level_count.into()),
            ("display_style", self.display_style.as_str().into()),
            ("title", self.title.as_str().into()),
            ("tricolor_mode", self.tricolor_mode.as_str().into()),
            ("show_axis", self.show_axis.into()),
            ("log_scale", self.log_scale.into()),
            ("show_contour_labels", self.show_contour_labels.into()),
            ("cursor_mode", self.cursor_mode.as_str().into()),
        ];
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}
