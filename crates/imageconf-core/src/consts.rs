/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a tri-color composite (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Upper end of the integer per-channel clip range.
pub const DEFAULT_CHANNEL_RANGE: i32 = 1000;

/// Suffix on a colormap name requesting the reversed variant.
pub const REVERSED_COLORMAP_SUFFIX: &str = "_r";

/// Colormap used for every channel of a fresh config.
pub const DEFAULT_COLORMAP: &str = "gray";

/// Contrast-stretch choices offered to the user, in percent clipped at
/// each end of the histogram. The first entry (-1.0) means "no stretch".
pub const CONTRAST_LEVELS: [f64; 10] = [-1.0, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0];

/// Display labels matching [`CONTRAST_LEVELS`].
pub const CONTRAST_LABELS: [&str; 10] = [
    "None", "0.01", "0.02", "0.05", "0.1", "0.2", "0.5", "1.0", "2.0", "5.0",
];

/// Default number of contour levels.
pub const DEFAULT_CONTOUR_LEVELS: i64 = 10;

/// Default title of a new image view.
pub const DEFAULT_TITLE: &str = "image";

/// Default cursor mode handed to the renderer.
pub const DEFAULT_CURSOR_MODE: &str = "zoom";

/// Default zoom rectangle outline colour.
pub const DEFAULT_ZOOM_PEN_COLOR: &str = "#101090";

/// Default zoom rectangle outline width, in pixels.
pub const DEFAULT_ZOOM_PEN_WIDTH: f32 = 3.0;

/// Default zoom rectangle fill colour.
pub const DEFAULT_ZOOM_BRUSH_COLOR: &str = "#040410";
