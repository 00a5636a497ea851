//! Recoloring of tri-color composites for alternate display conventions.
//!
//! Images are `(height, width, 3)` arrays of `f32` intensities in any range.
//! Every transform allocates a new array and leaves its input untouched.

use ndarray::{Array3, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, Ix3, Zip};

use crate::config::types::{TricolorBackground, TricolorMode};
use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{ImageConfError, Result};

/// Remap a composite shown on black so it reads correctly on white.
///
/// Intensities are first normalized against the global min/max of the
/// whole image and inverted into [0, 0.5]; each output channel is then the
/// sum of the two other normalized channels:
///
/// ```text
///   input                  output
///   (0, 0, 0) black   ->   (1, 1, 1) white
///   (1, 1, 1) white   ->   (0, 0, 0) black
///   (1, 0, 0) red     ->   (1, 0.5, 0.5)
///   (0, 1, 0) green   ->   (0.5, 1, 0.5)
///   (0, 0, 1) blue    ->   (0.5, 0.5, 1)
/// ```
///
/// Fails with [`ImageConfError::DegenerateImageRange`] on a flat image.
pub fn black_to_white_background<S>(image: &ArrayBase<S, Ix3>) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    check_shape(image)?;
    let (min, range) = global_range(image)?;

    Ok(mix_pixels(
        image,
        |v| (0.5 * (1.0 - (f64::from(v) - min) / range)) as f32,
        1.0,
    ))
}

/// Convert a composite from RGB to CMY.
///
/// With `white_background == false` the image is used as-is; otherwise it
/// is first normalized against its global min/max and inverted. Each output
/// channel is the mean of the two other channels.
pub fn rgb_to_cmy<S>(image: &ArrayBase<S, Ix3>, white_background: bool) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    check_shape(image)?;

    if white_background {
        let (min, range) = global_range(image)?;
        Ok(mix_pixels(image, |v| (1.0 - (f64::from(v) - min) / range) as f32, 0.5))
    } else {
        Ok(mix_pixels(image, |v| v, 0.5))
    }
}

/// Apply the transform selected by a tri-color mode and background.
pub fn apply_tricolor<S>(
    image: &ArrayBase<S, Ix3>,
    mode: TricolorMode,
    background: TricolorBackground,
) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    match (mode, background) {
        (TricolorMode::Rgb, TricolorBackground::Black) => {
            check_shape(image)?;
            Ok(image.to_owned())
        }
        (TricolorMode::Rgb, TricolorBackground::White) => black_to_white_background(image),
        (TricolorMode::Cmy, bg) => rgb_to_cmy(image, bg == TricolorBackground::White),
    }
}

fn check_shape<S>(image: &ArrayBase<S, Ix3>) -> Result<()>
where
    S: Data<Elem = f32>,
{
    let (h, w, c) = image.dim();
    if c != COLOR_CHANNEL_COUNT {
        return Err(ImageConfError::InvalidShape {
            shape: image.shape().to_vec(),
        });
    }
    if h * w == 0 {
        return Err(ImageConfError::EmptyImage);
    }
    Ok(())
}

/// Global `(min, max - min)` over all channels, skipping NaN pixels.
///
/// The range is taken in `f64` so finite images spanning most of the `f32`
/// domain do not overflow.
fn global_range<S>(image: &ArrayBase<S, Ix3>) -> Result<(f64, f64)>
where
    S: Data<Elem = f32>,
{
    let (min, max) = image
        .iter()
        .filter(|v| !v.is_nan())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return Err(ImageConfError::EmptyImage);
    }

    let range = f64::from(max) - f64::from(min);
    if !range.is_finite() || range <= 0.0 {
        return Err(ImageConfError::DegenerateImageRange { min, max });
    }
    Ok((f64::from(min), range))
}

/// For every pixel, normalize each channel with `normalize` and set each
/// output channel to `scale` times the sum of the two other channels.
fn mix_pixels<S, F>(image: &ArrayBase<S, Ix3>, normalize: F, scale: f32) -> Array3<f32>
where
    S: Data<Elem = f32>,
    F: Fn(f32) -> f32 + Sync + Send,
{
    let (h, w, _) = image.dim();
    let mut out = Array3::<f32>::zeros((h, w, COLOR_CHANNEL_COUNT));

    let mix = |mut dst: ArrayViewMut1<f32>, src: ArrayView1<f32>| {
        let t0 = normalize(src[0]);
        let t1 = normalize(src[1]);
        let t2 = normalize(src[2]);
        dst[0] = scale * (t1 + t2);
        dst[1] = scale * (t0 + t2);
        dst[2] = scale * (t0 + t1);
    };

    let zip = Zip::from(out.lanes_mut(Axis(2))).and(image.lanes(Axis(2)));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_for_each(mix);
    } else {
        zip.for_each(mix);
    }

    out
}
