use rand::Rng;

/// An RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Draws each channel independently and uniformly from `[0, 1)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Linear interpolation between two colors, channel by channel.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// How per-vertex colors are assigned to generators that have no intrinsic
/// palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coloring {
    /// Every vertex gets an independently drawn random color.
    Random,
    /// Every vertex gets the same color.
    Solid(Color),
}

impl Coloring {
    /// Produces `count` colors according to this scheme.
    pub fn colors(&self, count: usize, rng: &mut impl Rng) -> Vec<Color> {
        match self {
            Self::Random => (0..count).map(|_| Color::random(rng)).collect(),
            Self::Solid(color) => vec![*color; count],
        }
    }
}

impl Default for Coloring {
    fn default() -> Self {
        Self::Random
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn random_colors_in_range() {
        let mut rng = StdRng::seed_from_u64(453);
        let colors = Coloring::Random.colors(300, &mut rng);

        assert_eq!(colors.len(), 300);
        for c in colors {
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn seeded_colors_repeat() {
        let a = Coloring::Random.colors(9, &mut StdRng::seed_from_u64(7));
        let b = Coloring::Random.colors(9, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn solid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Coloring::Solid(Color::RED).colors(3, &mut rng),
            vec![Color::RED; 3]
        );
    }

    #[test]
    fn lerp() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.5), Color::new(0.5, 0.0, 0.5));
    }
}
