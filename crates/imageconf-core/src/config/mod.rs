pub mod patch;
pub mod store;
pub mod style;
pub mod types;

pub use patch::{ConfigPatch, ConfigSnapshot, OptionValue};
pub use store::ImageRenderConfig;
pub use style::{BrushStyle, HighlightRegion, PenStyle, ZoomLimits};
pub use types::{
    DisplayStyle, FillPattern, Interpolation, LineStyle, ProjectionAxis, TricolorBackground,
    TricolorMode,
};
