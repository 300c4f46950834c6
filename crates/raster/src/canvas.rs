use std::ops::{Deref, DerefMut};

use fractals::{Batch, Color, GeometryBuffer, Primitive, Scene};
use geometry::{Extent, NdcPoint, Point, Rect, ScreenPx};

use crate::Error;

const BYTES_PER_PIXEL: usize = 4;

type ScreenPoint = Point<f32, ScreenPx>;

/// Describes how color values are encoded when written to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpace {
    /// Channels are written as-is.
    Linear,
    /// Channels are treated as linear and encoded with the sRGB transfer
    /// function on write, like a GPU sRGB framebuffer.
    Srgb,
}

impl ColorSpace {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn encode(self, color: Color) -> [u8; BYTES_PER_PIXEL] {
        let encode = |c: f32| {
            let c = c.clamp(0.0, 1.0);
            let c = match self {
                Self::Linear => c,
                Self::Srgb => {
                    if c <= 0.003_130_8 {
                        c * 12.92
                    } else {
                        1.055 * c.powf(1.0 / 2.4) - 0.055
                    }
                }
            };
            (c * 255.0).round() as u8
        };

        [encode(color.r), encode(color.g), encode(color.b), 255]
    }
}

/// An RGBA8 render target, generic over its storage.
///
/// The default storage is an owned buffer; [`FrameCanvas`] draws straight into
/// a borrowed frame such as a window's pixel surface.
pub struct Canvas<T = Vec<u8>>
where
    T: Deref<Target = [u8]> + DerefMut,
{
    width: u32,
    height: u32,
    color_space: ColorSpace,
    bytes: T,
}

/// A canvas over a borrowed frame.
pub type FrameCanvas<'a> = Canvas<&'a mut [u8]>;

impl Canvas {
    /// Creates a black canvas.
    #[must_use]
    pub fn new(size: Extent<u32, ScreenPx>, color_space: ColorSpace) -> Self {
        let len = size.width as usize * size.height as usize * BYTES_PER_PIXEL;
        let mut canvas = Self {
            width: size.width,
            height: size.height,
            color_space,
            bytes: vec![0; len],
        };
        canvas.clear(Color::BLACK);
        canvas
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl<'a> Canvas<&'a mut [u8]> {
    /// Wraps an existing RGBA8 frame of the given size.
    pub fn from_frame(
        frame: &'a mut [u8],
        size: Extent<u32, ScreenPx>,
        color_space: ColorSpace,
    ) -> Result<Self, Error> {
        let expected = size.width as usize * size.height as usize * BYTES_PER_PIXEL;
        if frame.len() != expected {
            return Err(Error::FrameSize {
                expected,
                actual: frame.len(),
            });
        }

        Ok(Self {
            width: size.width,
            height: size.height,
            color_space,
            bytes: frame,
        })
    }
}

impl<T> Canvas<T>
where
    T: Deref<Target = [u8]> + DerefMut,
{
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the RGBA bytes of one pixel, or `None` if out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; BYTES_PER_PIXEL]> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.bytes[offset..offset + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    pub fn clear(&mut self, color: Color) {
        let rgba = self.color_space.encode(color);
        for pixel in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    pub fn draw_scene(&mut self, scene: &Scene) {
        for batch in scene.batches() {
            self.draw_batch(batch);
        }
    }

    pub fn draw_batch(&mut self, batch: &Batch) {
        self.draw(batch.primitive, &batch.buffer);
    }

    /// Draws `buffer`, interpreting its vertices with `primitive`. Trailing
    /// vertices that do not make up a whole primitive are ignored.
    pub fn draw(&mut self, primitive: Primitive, buffer: &GeometryBuffer) {
        let vertices: Vec<(ScreenPoint, Color)> = buffer
            .iter()
            .map(|(p, c)| (self.to_screen(p), c))
            .collect();

        match primitive {
            Primitive::Triangles => {
                for t in vertices.chunks_exact(3) {
                    self.fill_triangle(t[0], t[1], t[2]);
                }
            }
            Primitive::Lines => {
                for l in vertices.chunks_exact(2) {
                    self.line(l[0], l[1]);
                }
            }
            Primitive::LineStrip => {
                for l in vertices.windows(2) {
                    self.line(l[0], l[1]);
                }
            }
            Primitive::LineLoop => {
                for l in vertices.windows(2) {
                    self.line(l[0], l[1]);
                }
                if let (Some(last), Some(first)) = (vertices.last(), vertices.first()) {
                    if vertices.len() > 2 {
                        self.line(*last, *first);
                    }
                }
            }
        }
    }

    /// Maps a point from normalized device coordinates to pixel coordinates.
    #[must_use]
    pub fn to_screen(&self, p: NdcPoint) -> ScreenPoint {
        ScreenPoint::new(
            (p.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - p.y) * 0.5 * self.height as f32,
        )
    }

    fn bounds(&self) -> Rect<f32, ScreenPx> {
        Rect::new(
            ScreenPoint::new(0.0, 0.0),
            Extent::new(self.width as f32, self.height as f32),
        )
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
        } else {
            None
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };

        if let Some(offset) = self.offset(x, y) {
            let rgba = self.color_space.encode(color);
            self.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        }
    }

    /// Fills every pixel whose center lies inside the triangle, regardless of
    /// winding.
    #[allow(clippy::cast_possible_truncation)]
    fn fill_triangle(
        &mut self,
        (a, ca): (ScreenPoint, Color),
        (b, cb): (ScreenPoint, Color),
        (c, cc): (ScreenPoint, Color),
    ) {
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }

        let Some(clip) = Rect::from_points([a, b, c]).intersection(&self.bounds()) else {
            return;
        };

        let (x0, y0) = (clip.min().x.floor() as i64, clip.min().y.floor() as i64);
        let (x1, y1) = (clip.max().x.ceil() as i64, clip.max().y.ceil() as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = ScreenPoint::new(x as f32 + 0.5, y as f32 + 0.5);

                let wa = edge(b, c, p) / area;
                let wb = edge(c, a, p) / area;
                let wc = edge(a, b, p) / area;

                if wa >= 0.0 && wb >= 0.0 && wc >= 0.0 {
                    let color = Color::new(
                        ca.r * wa + cb.r * wb + cc.r * wc,
                        ca.g * wa + cb.g * wb + cc.g * wc,
                        ca.b * wa + cb.b * wb + cc.b * wc,
                    );
                    self.plot(x, y, color);
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn line(&mut self, (from, c0): (ScreenPoint, Color), (to, c1): (ScreenPoint, Color)) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);

        for i in 0..=steps as u32 {
            let t = i as f32 / steps;
            let p = from + delta * t;
            self.plot(p.x.floor() as i64, p.y.floor() as i64, c0.lerp(c1, t));
        }
    }
}

/// Twice the signed area of the triangle `(a, b, p)`.
fn edge(a: ScreenPoint, b: ScreenPoint, p: ScreenPoint) -> f32 {
    (b - a).cross(p - a)
}
