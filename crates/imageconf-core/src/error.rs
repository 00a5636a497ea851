use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageConfError {
    #[error("Image has zero dynamic range (min = {min}, max = {max})")]
    DegenerateImageRange { min: f32, max: f32 },

    #[error("Invalid image shape {shape:?}: expected (height, width, 3)")]
    InvalidShape { shape: Vec<usize> },

    #[error("Image contains no finite pixels")]
    EmptyImage,

    #[error("No image data attached")]
    NoImageData,

    #[error("{kind} clip bounds inverted on channel {channel}: lo = {lo}, hi = {hi}")]
    ClipBoundsInverted {
        kind: &'static str,
        channel: usize,
        lo: f64,
        hi: f64,
    },
}

pub type Result<T> = std::result::Result<T, ImageConfError>;
