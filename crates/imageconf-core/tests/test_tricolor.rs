use approx::assert_abs_diff_eq;
use ndarray::{s, Array3};

use imageconf_core::config::{TricolorBackground, TricolorMode};
use imageconf_core::error::ImageConfError;
use imageconf_core::tricolor::{apply_tricolor, black_to_white_background, rgb_to_cmy};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_uniform(h: usize, w: usize, rgb: [f32; 3]) -> Array3<f32> {
    Array3::from_shape_fn((h, w, 3), |(_, _, c)| rgb[c])
}

/// A 1 x n image with the given pixels in order.
fn make_row(pixels: &[[f32; 3]]) -> Array3<f32> {
    Array3::from_shape_fn((1, pixels.len(), 3), |(_, col, c)| pixels[col][c])
}

fn pixel(img: &Array3<f32>, row: usize, col: usize) -> [f32; 3] {
    [img[[row, col, 0]], img[[row, col, 1]], img[[row, col, 2]]]
}

fn assert_pixel(actual: [f32; 3], expected: [f32; 3]) {
    for c in 0..3 {
        assert_abs_diff_eq!(actual[c], expected[c], epsilon = 1e-6);
    }
}

// ---------------------------------------------------------------------------
// black_to_white_background
// ---------------------------------------------------------------------------

#[test]
fn test_white_bg_flat_image_is_degenerate() {
    let img = Array3::<f32>::zeros((4, 4, 3));
    let err = black_to_white_background(&img).unwrap_err();
    assert!(
        matches!(err, ImageConfError::DegenerateImageRange { min, max } if min == 0.0 && max == 0.0),
        "got: {err:?}"
    );
}

#[test]
fn test_white_bg_primary_colors() {
    let img = make_row(&[
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);
    let out = black_to_white_background(&img).unwrap();

    assert_pixel(pixel(&out, 0, 0), [1.0, 1.0, 1.0]);
    assert_pixel(pixel(&out, 0, 1), [0.0, 0.0, 0.0]);
    assert_pixel(pixel(&out, 0, 2), [1.0, 0.5, 0.5]);
    assert_pixel(pixel(&out, 0, 3), [0.5, 1.0, 0.5]);
    assert_pixel(pixel(&out, 0, 4), [0.5, 0.5, 1.0]);
}

#[test]
fn test_white_bg_red_padded_with_black() {
    let mut img = make_uniform(3, 3, [1.0, 0.0, 0.0]);
    img.slice_mut(s![2, 2, ..]).fill(0.0);
    let out = black_to_white_background(&img).unwrap();

    for row in 0..3 {
        for col in 0..3 {
            if (row, col) == (2, 2) {
                assert_pixel(pixel(&out, row, col), [1.0, 1.0, 1.0]);
            } else {
                assert_pixel(pixel(&out, row, col), [1.0, 0.5, 0.5]);
            }
        }
    }
}

#[test]
fn test_white_bg_normalizes_over_global_range() {
    // Range [10, 30]: 10 -> t = 0.5, 20 -> t = 0.25, 30 -> t = 0.0
    let img = make_row(&[[10.0, 20.0, 30.0], [30.0, 10.0, 10.0]]);
    let out = black_to_white_background(&img).unwrap();

    assert_pixel(pixel(&out, 0, 0), [0.25, 0.5, 0.75]);
    assert_pixel(pixel(&out, 0, 1), [1.0, 0.5, 0.5]);
}

#[test]
fn test_white_bg_leaves_input_untouched() {
    let img = make_row(&[[0.2, 0.4, 0.6], [0.9, 0.1, 0.0]]);
    let before = img.clone();
    let out = black_to_white_background(&img).unwrap();
    assert_eq!(img, before);
    assert_eq!(out.dim(), img.dim());
}

#[test]
fn test_white_bg_accepts_views() {
    let img = make_row(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    let out = black_to_white_background(&img.view()).unwrap();
    assert_pixel(pixel(&out, 0, 1), [1.0, 0.5, 0.5]);
}

#[test]
fn test_white_bg_rejects_wrong_channel_count() {
    let img = Array3::<f32>::zeros((2, 2, 4));
    let err = black_to_white_background(&img).unwrap_err();
    assert!(
        matches!(err, ImageConfError::InvalidShape { ref shape } if shape == &vec![2, 2, 4]),
        "got: {err:?}"
    );
}

#[test]
fn test_white_bg_rejects_empty_image() {
    let img = Array3::<f32>::zeros((0, 5, 3));
    assert!(matches!(
        black_to_white_background(&img),
        Err(ImageConfError::EmptyImage)
    ));
}

#[test]
fn test_white_bg_accepts_range_wider_than_f32() {
    // max - min = 6e38 overflows f32 but is a valid, non-flat range.
    let img = make_row(&[[-3.0e38, 0.0, 0.0], [3.0e38, 0.0, 0.0]]);
    let out = black_to_white_background(&img).unwrap();

    // -3e38 -> t = 0.5, 0 -> t = 0.25, 3e38 -> t = 0.0
    assert_pixel(pixel(&out, 0, 0), [0.5, 0.75, 0.75]);
    assert_pixel(pixel(&out, 0, 1), [0.5, 0.25, 0.25]);
}

#[test]
fn test_cmy_white_bg_accepts_range_wider_than_f32() {
    let img = make_row(&[[-3.0e38, 0.0, 3.0e38], [0.0, 0.0, 0.0]]);
    let out = rgb_to_cmy(&img, true).unwrap();

    // -3e38 -> 1, 0 -> 0.5, 3e38 -> 0
    assert_pixel(pixel(&out, 0, 0), [0.25, 0.5, 0.75]);
    assert_pixel(pixel(&out, 0, 1), [0.5, 0.5, 0.5]);
}

#[test]
fn test_white_bg_large_image_matches_formula() {
    // Large enough to take the parallel path.
    let (h, w) = (300, 300);
    let img = Array3::from_shape_fn((h, w, 3), |(r, c, ch)| {
        ((r * w + c) * 3 + ch) as f32 / (h * w * 3 - 1) as f32
    });
    let out = black_to_white_background(&img).unwrap();

    for &(r, c) in &[(0, 0), (150, 17), (299, 299)] {
        let t = pixel(&img, r, c).map(|v| 0.5 * (1.0 - v));
        assert_pixel(pixel(&out, r, c), [t[1] + t[2], t[0] + t[2], t[0] + t[1]]);
    }
}

// ---------------------------------------------------------------------------
// rgb_to_cmy
// ---------------------------------------------------------------------------

#[test]
fn test_cmy_averages_other_channels() {
    let img = make_row(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.2, 0.4, 0.8]]);
    let out = rgb_to_cmy(&img, false).unwrap();

    assert_pixel(pixel(&out, 0, 0), [0.0, 0.5, 0.5]);
    assert_pixel(pixel(&out, 0, 1), [0.5, 0.0, 0.5]);
    assert_pixel(pixel(&out, 0, 2), [0.6, 0.5, 0.3]);
}

#[test]
fn test_cmy_twice_is_not_identity() {
    let img = make_row(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let once = rgb_to_cmy(&img, false).unwrap();
    let twice = rgb_to_cmy(&once, false).unwrap();

    // (1,0,0) -> (0, .5, .5) -> (.5, .25, .25)
    assert_pixel(pixel(&twice, 0, 0), [0.5, 0.25, 0.25]);
    assert_ne!(twice, img);
    assert_ne!(twice, once);
}

#[test]
fn test_cmy_black_bg_allows_flat_image() {
    let img = make_uniform(2, 2, [0.3, 0.3, 0.3]);
    let out = rgb_to_cmy(&img, false).unwrap();
    for v in out.iter() {
        assert_abs_diff_eq!(*v, 0.3, epsilon = 1e-6);
    }
}

#[test]
fn test_cmy_white_bg_normalizes_and_inverts() {
    // Range [0, 2]: 0 -> 1, 1 -> 0.5, 2 -> 0
    let img = make_row(&[[0.0, 1.0, 2.0], [2.0, 2.0, 2.0]]);
    let out = rgb_to_cmy(&img, true).unwrap();

    assert_pixel(pixel(&out, 0, 0), [0.25, 0.5, 0.75]);
    assert_pixel(pixel(&out, 0, 1), [0.0, 0.0, 0.0]);
}

#[test]
fn test_cmy_white_bg_flat_image_is_degenerate() {
    let img = make_uniform(3, 2, [5.0, 5.0, 5.0]);
    assert!(matches!(
        rgb_to_cmy(&img, true),
        Err(ImageConfError::DegenerateImageRange { .. })
    ));
}

// ---------------------------------------------------------------------------
// apply_tricolor
// ---------------------------------------------------------------------------

#[test]
fn test_apply_rgb_black_is_copy() {
    let img = make_row(&[[0.1, 0.2, 0.3]]);
    let out = apply_tricolor(&img, TricolorMode::Rgb, TricolorBackground::Black).unwrap();
    assert_eq!(out, img);
}

#[test]
fn test_apply_rgb_white_uses_white_bg_transform() {
    let img = make_row(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    let out = apply_tricolor(&img, TricolorMode::Rgb, TricolorBackground::White).unwrap();
    assert_eq!(out, black_to_white_background(&img).unwrap());
}

#[test]
fn test_apply_cmy_follows_background() {
    let img = make_row(&[[0.0, 0.5, 1.0], [1.0, 0.0, 0.0]]);
    let black = apply_tricolor(&img, TricolorMode::Cmy, TricolorBackground::Black).unwrap();
    let white = apply_tricolor(&img, TricolorMode::Cmy, TricolorBackground::White).unwrap();
    assert_eq!(black, rgb_to_cmy(&img, false).unwrap());
    assert_eq!(white, rgb_to_cmy(&img, true).unwrap());
}
