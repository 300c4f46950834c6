//! Nested squares and diamonds by repeated halving of a seed outline.

use geometry::scale;

use crate::{Color, GeometryBuffer, Point};

/// A square closed back onto its first corner, followed by the inscribed
/// diamond closed back onto its first corner.
pub const DEFAULT_SEEDS: [[f32; 2]; 10] = [
    [0.5, 0.5],
    [-0.5, 0.5],
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [0.0, 0.5],
    [-0.5, 0.0],
    [0.0, -0.5],
    [0.5, 0.0],
    [0.0, 0.5],
];

/// Color of the first half of every block.
pub const FIRST_HALF: Color = Color::BLUE;

/// Color of the second half of every block.
pub const SECOND_HALF: Color = Color::RED;

/// Emits the seed outline followed by `iterations` copies of it, each half the
/// size of the one before.
///
/// Block `i` of the output is the seed list scaled by `0.5^i`. Within each
/// block the first half of the seeds is colored [`FIRST_HALF`] and the rest
/// [`SECOND_HALF`].
#[must_use]
pub fn generate(seeds: &[Point], iterations: u32) -> GeometryBuffer {
    let half = seeds.len() / 2;
    let mut buffer = GeometryBuffer::with_capacity(seeds.len() * (iterations as usize + 1));

    let mut factor = 1.0;
    for _ in 0..=iterations {
        for (i, seed) in seeds.iter().enumerate() {
            let color = if i < half { FIRST_HALF } else { SECOND_HALF };
            buffer.push(scale(*seed, factor), color);
        }
        factor *= 0.5;
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<Point> {
        DEFAULT_SEEDS.iter().map(|[x, y]| Point::new(*x, *y)).collect()
    }

    #[test]
    fn no_iterations() {
        let seeds = seeds();
        let buffer = generate(&seeds, 0);
        assert_eq!(buffer.vertices(), seeds.as_slice());
    }

    #[test]
    fn blocks_halve() {
        let seeds = seeds();

        for iterations in 0..=10 {
            let buffer = generate(&seeds, iterations);
            assert_eq!(buffer.len(), seeds.len() * (iterations as usize + 1));

            for (i, block) in buffer.vertices().chunks_exact(seeds.len()).enumerate() {
                let factor = 0.5f32.powi(i as i32);
                let expected: Vec<Point> = seeds.iter().map(|p| scale(*p, factor)).collect();
                assert_eq!(block, expected.as_slice());
            }
        }
    }

    #[test]
    fn deterministic() {
        let seeds = seeds();
        assert_eq!(generate(&seeds, 7), generate(&seeds, 7));
    }

    #[test]
    fn color_bands() {
        let seeds = seeds();
        let buffer = generate(&seeds, 2);

        for block in buffer.colors().chunks_exact(seeds.len()) {
            assert_eq!(&block[..5], &[FIRST_HALF; 5]);
            assert_eq!(&block[5..], &[SECOND_HALF; 5]);
        }
    }
}
