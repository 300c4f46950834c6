//! Fractal geometry generation.
//!
//! Every generator is a pure function of its seed points and depth, returning
//! freshly owned vertex data. Coloring that involves randomness is a separate
//! pass so that the geometry itself stays deterministic.
//!
//! ## Kinds
//!
//! - Sierpinski triangle (triangle list)
//! - Square-diamond (line strip)
//! - Koch snowflake (three line strips, one per seed edge)
//! - Circle (line loop, depth is the segment count)

pub mod buffer;
pub mod circle;
pub mod color;
pub mod koch;
pub mod request;
pub mod scene;
pub mod sierpinski;
pub mod square_diamond;

mod error;

pub use buffer::{GeometryBuffer, Primitive};
pub use color::{Color, Coloring};
pub use error::Error;
pub use geometry::NdcPoint as Point;
pub use request::{FractalKind, FractalRequest};
pub use scene::{Batch, Regenerator, Scene};
