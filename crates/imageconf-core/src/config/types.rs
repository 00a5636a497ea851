use std::fmt;

use serde::{Deserialize, Serialize};

/// Resampling filter used when the image is drawn at a different size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Nearest,
    Bicubic,
    Quadric,
    Gaussian,
    Kaiser,
    Bessel,
    Mitchell,
    Catrom,
    Spline16,
    Spline36,
    Bilinear,
    Hanning,
    Hamming,
    Hermite,
    Sinc,
    Lanczos,
}

impl Interpolation {
    pub const ALL: &[Self] = &[
        Self::Nearest,
        Self::Bicubic,
        Self::Quadric,
        Self::Gaussian,
        Self::Kaiser,
        Self::Bessel,
        Self::Mitchell,
        Self::Catrom,
        Self::Spline16,
        Self::Spline36,
        Self::Bilinear,
        Self::Hanning,
        Self::Hamming,
        Self::Hermite,
        Self::Sinc,
        Self::Lanczos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bicubic => "bicubic",
            Self::Quadric => "quadric",
            Self::Gaussian => "gaussian",
            Self::Kaiser => "kaiser",
            Self::Bessel => "bessel",
            Self::Mitchell => "mitchell",
            Self::Catrom => "catrom",
            Self::Spline16 => "spline16",
            Self::Spline36 => "spline36",
            Self::Bilinear => "bilinear",
            Self::Hanning => "hanning",
            Self::Hamming => "hamming",
            Self::Hermite => "hermite",
            Self::Sinc => "sinc",
            Self::Lanczos => "lanczos",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        find_by_name(Self::ALL, name, |v| v.name())
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background a tri-color composite is displayed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TricolorBackground {
    #[default]
    Black,
    White,
}

impl TricolorBackground {
    pub const ALL: &[Self] = &[Self::Black, Self::White];

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        find_by_name(Self::ALL, name, |v| v.name())
    }
}

impl fmt::Display for TricolorBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Channel convention of a tri-color composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TricolorMode {
    #[default]
    Rgb,
    Cmy,
}

impl TricolorMode {
    pub const ALL: &[Self] = &[Self::Rgb, Self::Cmy];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Cmy => "cmy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        find_by_name(Self::ALL, name, |v| v.name())
    }
}

impl fmt::Display for TricolorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether data is drawn as a raster or as contour lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    #[default]
    Image,
    Contour,
}

impl DisplayStyle {
    pub const ALL: &[Self] = &[Self::Image, Self::Contour];

    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Contour => "contour",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        find_by_name(Self::ALL, name, |v| v.name())
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis along which a line projection of the image is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ProjectionAxis {
    #[default]
    None,
    X,
    Y,
}

impl ProjectionAxis {
    pub const ALL: &[Self] = &[Self::None, Self::X, Self::Y];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        find_by_name(Self::ALL, name, |v| v.name())
    }
}

impl fmt::Display for ProjectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stroke pattern for outlines drawn by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
            Self::Dotted => write!(f, "dotted"),
            Self::DashDot => write!(f, "dash-dot"),
        }
    }
}

/// Fill pattern for areas drawn by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillPattern {
    #[default]
    Solid,
    Transparent,
    CrossHatch,
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Transparent => write!(f, "transparent"),
            Self::CrossHatch => write!(f, "cross-hatch"),
        }
    }
}

fn find_by_name<T: Copy>(all: &[T], name: &str, name_of: impl Fn(T) -> &'static str) -> Option<T> {
    let name = name.trim();
    all.iter().copied().find(|v| name_of(*v).eq_ignore_ascii_case(name))
}
