//! CPU rasterization of fractal scenes.
//!
//! A [`Canvas`] maps normalized device coordinates onto an RGBA8 pixel grid
//! the way a GPU viewport would: (-1, -1) is the bottom-left corner, (1, 1) the
//! top-right. Triangles are filled with barycentric color interpolation and
//! lines are stepped one pixel at a time with linear color interpolation.

mod canvas;
mod encode;
mod error;

pub use canvas::{Canvas, ColorSpace, FrameCanvas};
pub use encode::{save_png, write_png};
pub use error::Error;
