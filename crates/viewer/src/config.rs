use std::path::PathBuf;

use fractals::{Color, Coloring, FractalRequest};
use geometry::{Extent, ScreenPx};
use rand::{rngs::StdRng, SeedableRng};
use raster::ColorSpace;

#[derive(Clone, Debug)]
pub struct Config {
    /// The window title. The current kind and depth are appended to it.
    ///
    /// Defaults to "Fractals".
    pub title: String,

    /// The initial size of the window, or the size of the image in snapshot
    /// mode.
    ///
    /// Defaults to 800x800.
    pub size: Extent<u32, ScreenPx>,

    /// The fractal shown on startup.
    ///
    /// Defaults to a Sierpinski triangle at depth 0.
    pub request: FractalRequest,

    /// How vertices are colored where the fractal has no fixed palette.
    ///
    /// Defaults to `Coloring::Random`.
    pub coloring: Coloring,

    /// Seed for the random colors. Defaults to `None`, which seeds from the
    /// operating system so that every run looks different.
    pub seed: Option<u64>,

    /// Defaults to black.
    pub background: Color,

    /// Defaults to `ColorSpace::Srgb`.
    pub color_space: ColorSpace,

    /// Where the `S` key writes its snapshot.
    ///
    /// Defaults to `fractal.png` in the working directory.
    pub snapshot_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Fractals".to_owned(),
            size: Extent::new(800, 800),
            request: FractalRequest::default(),
            coloring: Coloring::Random,
            seed: None,
            background: Color::BLACK,
            color_space: ColorSpace::Srgb,
            snapshot_path: PathBuf::from("fractal.png"),
        }
    }
}

impl Config {
    /// The random number generator for coloring, seeded from `seed` if set.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
