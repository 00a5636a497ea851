pub mod colormap;
pub mod config;
pub mod consts;
pub mod error;
pub mod stretch;
pub mod tricolor;
