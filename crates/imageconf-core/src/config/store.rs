use std::sync::Arc;

use ndarray::{Array3, ArrayBase, ArrayViewD, Data, Ix3};
use tracing::debug;

use crate::colormap::{parse_colormap_name, ColormapRegistry};
use crate::consts::{
    COLOR_CHANNEL_COUNT, CONTRAST_LEVELS, DEFAULT_CHANNEL_RANGE, DEFAULT_COLORMAP,
    DEFAULT_CONTOUR_LEVELS, DEFAULT_CURSOR_MODE, DEFAULT_TITLE,
};
use crate::error::{ImageConfError, Result};
use crate::stretch::contrast_limits;
use crate::tricolor::apply_tricolor;

use super::patch::{ConfigPatch, ConfigSnapshot, OptionValue};
use super::style::{normalize_hex_color, BrushStyle, HighlightRegion, PenStyle, ZoomLimits};
use super::types::{
    DisplayStyle, FillPattern, Interpolation, LineStyle, ProjectionAxis, TricolorBackground,
    TricolorMode,
};

/// Rendering parameters of one image view.
///
/// Created with defaults, mutated through [`update`](Self::update) and the
/// typed setters, read through [`snapshot`](Self::snapshot). Fields are
/// public for the renderer's convenience; writing them directly bypasses
/// validation.
///
/// `channel_lo <= channel_hi` and `intensity_lo <= intensity_hi` are not
/// enforced here. Call [`check_clip_bounds`](Self::check_clip_bounds)
/// before relying on them.
#[derive(Clone, Debug)]
pub struct ImageRenderConfig<'a> {
    registry: Arc<ColormapRegistry>,

    pub colormap_per_channel: [String; COLOR_CHANNEL_COUNT],
    pub colormap_reversed: bool,
    pub interpolation: Interpolation,
    pub show_axis: bool,
    pub log_scale: bool,
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
    pub rotate_90: bool,
    pub contrast_level: f64,
    /// (xmin, xmax, ymin, ymax)
    pub data_limits: [Option<f64>; 4],

    // Tri-color clipping
    pub channel_lo: [i32; COLOR_CHANNEL_COUNT],
    pub channel_hi: [i32; COLOR_CHANNEL_COUNT],
    pub channel_range: i32,
    pub intensity_lo: [f32; COLOR_CHANNEL_COUNT],
    pub intensity_hi: [f32; COLOR_CHANNEL_COUNT],
    pub tricolor_background: TricolorBackground,
    pub tricolor_mode: TricolorMode,

    pub image_data: Option<ArrayViewD<'a, f32>>,
    pub title: String,
    pub display_style: DisplayStyle,
    pub highlight_regions: Vec<HighlightRegion>,

    // Contours
    pub contour_level_count: i64,
    pub explicit_contour_levels: Option<Vec<f64>>,
    pub show_contour_labels: bool,

    // Interaction
    pub cursor_mode: String,
    pub zoom_pen: PenStyle,
    pub zoom_brush: BrushStyle,
    pub zoom_history: Vec<ZoomLimits>,

    // Line projections
    pub projection_axis: ProjectionAxis,
    pub projection_anchor: (f64, f64),
    pub projection_width: f64,
}

impl<'a> ImageRenderConfig<'a> {
    pub fn new(registry: Arc<ColormapRegistry>) -> Self {
        let default_cmap = registry
            .resolve(DEFAULT_COLORMAP)
            .unwrap_or(DEFAULT_COLORMAP)
            .to_string();

        Self {
            registry,
            colormap_per_channel: [default_cmap.clone(), default_cmap.clone(), default_cmap],
            colormap_reversed: false,
            interpolation: Interpolation::Nearest,
            show_axis: false,
            log_scale: false,
            flip_vertical: false,
            flip_horizontal: false,
            rotate_90: false,
            contrast_level: 0.0,
            data_limits: [None; 4],
            channel_lo: [0; COLOR_CHANNEL_COUNT],
            channel_hi: [DEFAULT_CHANNEL_RANGE; COLOR_CHANNEL_COUNT],
            channel_range: DEFAULT_CHANNEL_RANGE,
            intensity_lo: [0.0; COLOR_CHANNEL_COUNT],
            intensity_hi: [1.0; COLOR_CHANNEL_COUNT],
            tricolor_background: TricolorBackground::Black,
            tricolor_mode: TricolorMode::Rgb,
            image_data: None,
            title: DEFAULT_TITLE.to_string(),
            display_style: DisplayStyle::Image,
            highlight_regions: Vec::new(),
            contour_level_count: DEFAULT_CONTOUR_LEVELS,
            explicit_contour_levels: None,
            show_contour_labels: true,
            cursor_mode: DEFAULT_CURSOR_MODE.to_string(),
            zoom_pen: PenStyle::default(),
            zoom_brush: BrushStyle::default(),
            zoom_history: Vec::new(),
            projection_axis: ProjectionAxis::None,
            projection_anchor: (-1.0, -1.0),
            projection_width: 1.0,
        }
    }

    pub fn registry(&self) -> &ColormapRegistry {
        &self.registry
    }

    /// Colormap of the first channel, used for single-channel images.
    pub fn colormap(&self) -> &str {
        &self.colormap_per_channel[0]
    }

    /// Apply every present, valid option of `patch`.
    ///
    /// Invalid values are dropped and the field keeps its previous value.
    /// An explicit `colormap_reversed` takes precedence over a `_r` suffix
    /// on `colormap`.
    pub fn update(&mut self, patch: &ConfigPatch) {
        if let Some(v) = &patch.interpolation {
            match v.as_str().and_then(Interpolation::from_name) {
                Some(interp) => self.interpolation = interp,
                None => ignored("interpolation", v),
            }
        }

        if let Some(v) = &patch.colormap {
            match v.as_str().and_then(|name| self.resolve_colormap(name)) {
                Some((name, reversed)) => {
                    self.colormap_per_channel[0] = name;
                    if reversed {
                        self.colormap_reversed = true;
                    }
                }
                None => ignored("colormap", v),
            }
        }
        set_bool(&mut self.colormap_reversed, &patch.colormap_reversed, "colormap_reversed");

        if let Some(v) = &patch.contrast_level {
            match v.to_f64() {
                Some(level) => self.contrast_level = level,
                None => ignored("contrast_level", v),
            }
        }

        set_bool(&mut self.flip_vertical, &patch.flip_vertical, "flip_vertical");
        set_bool(&mut self.flip_horizontal, &patch.flip_horizontal, "flip_horizontal");
        set_bool(&mut self.rotate_90, &patch.rotate_90, "rotate_90");

        if let Some(v) = &patch.tricolor_background {
            match v.as_str().and_then(TricolorBackground::from_name) {
                Some(bg) => self.tricolor_background = bg,
                None => ignored("tricolor_background", v),
            }
        }

        if let Some(v) = &patch.tricolor_mode {
            match v.as_str().and_then(TricolorMode::from_name) {
                Some(mode) => self.tricolor_mode = mode,
                None => ignored("tricolor_mode", v),
            }
        }

        if let Some(v) = &patch.contour_level_count {
            match v.to_i64() {
                Some(n) => self.contour_level_count = n,
                None => ignored("contour_level_count", v),
            }
        }

        if let Some(v) = &patch.display_style {
            match v.as_str().and_then(DisplayStyle::from_name) {
                Some(style) => self.display_style = style,
                None => ignored("display_style", v),
            }
        }

        if let Some(v) = &patch.title {
            self.title = v.to_string();
        }

        set_bool(&mut self.show_axis, &patch.show_axis, "show_axis");
        set_bool(&mut self.log_scale, &patch.log_scale, "log_scale");
        set_bool(
            &mut self.show_contour_labels,
            &patch.show_contour_labels,
            "show_contour_labels",
        );

        if let Some(v) = &patch.cursor_mode {
            match v.as_str().map(str::trim).filter(|s| !s.is_empty()) {
                Some(mode) => self.cursor_mode = mode.to_string(),
                None => ignored("cursor_mode", v),
            }
        }
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            interpolation: self.interpolation.to_string(),
            colormap: self.colormap().to_string(),
            colormap_reversed: self.colormap_reversed,
            contrast_level: self.contrast_level,
            flip_vertical: self.flip_vertical,
            flip_horizontal: self.flip_horizontal,
            rotate_90: self.rotate_90,
            tricolor_background: self.tricolor_background.to_string(),
            contour_level_count: self.contour_level_count,
            display_style: self.display_style.to_string(),
            title: self.title.clone(),
            tricolor_mode: self.tricolor_mode.to_string(),
            show_axis: self.show_axis,
            log_scale: self.log_scale,
            show_contour_labels: self.show_contour_labels,
            cursor_mode: self.cursor_mode.clone(),
        }
    }

    /// Set the colormap of one tri-color channel. Returns `false` and
    /// changes nothing if the channel or name is invalid.
    ///
    /// A `_r` suffix is stripped before lookup but does not touch the
    /// shared reversal flag.
    pub fn set_channel_colormap(&mut self, channel: usize, name: &str) -> bool {
        let Some((name, _)) = self.resolve_colormap(name) else {
            debug!(channel, name, "Ignoring unknown colormap");
            return false;
        };
        match self.colormap_per_channel.get_mut(channel) {
            Some(slot) => {
                *slot = name;
                true
            }
            None => {
                debug!(channel, "Ignoring colormap for out-of-range channel");
                false
            }
        }
    }

    /// Canonical base name and reversal request, if the base is registered.
    ///
    /// A name whose stripped base is unknown is retried as a whole, so a
    /// custom colormap registered with an `_r` ending stays selectable.
    fn resolve_colormap(&self, name: &str) -> Option<(String, bool)> {
        let request = parse_colormap_name(name);
        if let Some(canonical) = self.registry.resolve(request.base) {
            return Some((canonical.to_string(), request.reversed));
        }
        self.registry
            .resolve(name)
            .map(|canonical| (canonical.to_string(), false))
    }

    pub fn set_zoom_pen(&mut self, color: &str, line: LineStyle) {
        match normalize_hex_color(color) {
            Some(color) => {
                self.zoom_pen.color = color;
                self.zoom_pen.line = line;
            }
            None => debug!(color, "Ignoring invalid zoom pen colour"),
        }
    }

    pub fn set_zoom_brush(&mut self, color: &str, fill: FillPattern) {
        match normalize_hex_color(color) {
            Some(color) => {
                self.zoom_brush.color = color;
                self.zoom_brush.fill = fill;
            }
            None => debug!(color, "Ignoring invalid zoom brush colour"),
        }
    }

    pub fn push_zoom(&mut self, limits: ZoomLimits) {
        self.zoom_history.push(limits);
    }

    /// Remove and return the most recent zoom step.
    pub fn pop_zoom(&mut self) -> Option<ZoomLimits> {
        self.zoom_history.pop()
    }

    pub fn clear_zoom(&mut self) {
        self.zoom_history.clear();
    }

    /// Set the line projection. A non-positive or non-finite `width` keeps
    /// the previous width.
    pub fn set_projection(&mut self, axis: ProjectionAxis, anchor: (f64, f64), width: f64) {
        self.projection_axis = axis;
        self.projection_anchor = anchor;
        if width.is_finite() && width > 0.0 {
            self.projection_width = width;
        } else {
            debug!(width, "Ignoring invalid projection width");
        }
    }

    pub fn set_data_limits(&mut self, limits: [Option<f64>; 4]) {
        self.data_limits = limits;
    }

    /// Explicit contour levels override `contour_level_count` when set.
    pub fn set_contour_levels(&mut self, levels: Option<Vec<f64>>) {
        self.explicit_contour_levels = levels;
    }

    pub fn set_image_data(&mut self, data: ArrayViewD<'a, f32>) {
        self.image_data = Some(data);
    }

    pub fn clear_image_data(&mut self) {
        self.image_data = None;
    }

    /// Percent clipped at each end of the histogram, or `None` for no stretch.
    pub fn contrast_clip(&self) -> Option<f64> {
        (self.contrast_level > 0.0).then_some(self.contrast_level)
    }

    /// Index of the current level in [`CONTRAST_LEVELS`], for choice widgets.
    /// Any level <= 0 maps to the "None" entry.
    pub fn contrast_choice(&self) -> Option<usize> {
        if self.contrast_level <= 0.0 {
            return Some(0);
        }
        CONTRAST_LEVELS
            .iter()
            .position(|&level| (level - self.contrast_level).abs() < 1e-9)
    }

    /// Value limits for drawing the attached image with the current
    /// contrast stretch.
    pub fn display_limits(&self) -> Result<(f32, f32)> {
        let data = self.image_data.as_ref().ok_or(ImageConfError::NoImageData)?;
        contrast_limits(data, self.contrast_clip().unwrap_or(0.0))
    }

    /// Recolor a tri-color composite for the configured mode and background.
    pub fn tricolor<S>(&self, image: &ArrayBase<S, Ix3>) -> Result<Array3<f32>>
    where
        S: Data<Elem = f32>,
    {
        apply_tricolor(image, self.tricolor_mode, self.tricolor_background)
    }

    /// Report the first channel whose clip bounds are inverted.
    pub fn check_clip_bounds(&self) -> Result<()> {
        for channel in 0..COLOR_CHANNEL_COUNT {
            let (lo, hi) = (self.channel_lo[channel], self.channel_hi[channel]);
            if lo > hi {
                return Err(ImageConfError::ClipBoundsInverted {
                    kind: "channel",
                    channel,
                    lo: lo as f64,
                    hi: hi as f64,
                });
            }
        }
        for channel in 0..COLOR_CHANNEL_COUNT {
            let (lo, hi) = (self.intensity_lo[channel], self.intensity_hi[channel]);
            if lo > hi {
                return Err(ImageConfError::ClipBoundsInverted {
                    kind: "intensity",
                    channel,
                    lo: lo as f64,
                    hi: hi as f64,
                });
            }
        }
        Ok(())
    }
}

fn set_bool(field: &mut bool, value: &Option<OptionValue>, option: &'static str) {
    if let Some(v) = value {
        match v.to_bool() {
            Some(b) => *field = b,
            None => ignored(option, v),
        }
    }
}

fn ignored(option: &'static str, value: &OptionValue) {
    debug!(option, value = %value, "Ignoring invalid option value");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ImageRenderConfig<'static> {
        ImageRenderConfig::new(Arc::new(ColormapRegistry::builtin()))
    }

    #[test]
    fn suffix_on_unknown_colormap_keeps_flag() {
        let mut cfg = config();
        cfg.update(&ConfigPatch::default().colormap("nosuchmap_r"));
        assert_eq!(cfg.colormap(), "gray");
        assert!(!cfg.colormap_reversed);
    }

    #[test]
    fn plain_colormap_does_not_clear_reversal() {
        let mut cfg = config();
        cfg.update(&ConfigPatch::default().colormap("jet_r"));
        cfg.update(&ConfigPatch::default().colormap("hot"));
        assert_eq!(cfg.colormap(), "hot");
        assert!(cfg.colormap_reversed);
    }

    #[test]
    fn invalid_projection_width_is_ignored() {
        let mut cfg = config();
        cfg.set_projection(ProjectionAxis::X, (4.0, 5.0), 0.0);
        assert_eq!(cfg.projection_axis, ProjectionAxis::X);
        assert_eq!(cfg.projection_anchor, (4.0, 5.0));
        assert_eq!(cfg.projection_width, 1.0);
    }
}
