//! Koch curve and snowflake.
//!
//! Each edge is replaced by four edges one third as long, with the middle
//! third pushed out into an equilateral bump. The bump is found by rotating
//! the one-third point 60 degrees counter-clockwise about the two-thirds
//! point, so a seed triangle wound counter-clockwise grows its bumps outward.

use geometry::{lerp, rotate_about, Angle};

use crate::{Color, GeometryBuffer, Point};

/// Segment colors by position within the final subdivision step.
pub const MOTIF_COLORS: [Color; 4] = [Color::BLUE, Color::GREEN, Color::RED, Color::YELLOW];

/// Number of segments emitted for one edge at a given depth.
#[must_use]
pub fn segment_count(depth: u32) -> usize {
    4usize.pow(depth)
}

/// Subdivides the edge from `start` to `end` `depth` times.
///
/// The result is a list of segment endpoint pairs, `2 * 4^depth` vertices in
/// all, ordered along the edge. Consecutive segments share endpoints, the first
/// vertex is `start` and the last is `end`.
#[must_use]
pub fn generate(start: Point, end: Point, depth: u32) -> Vec<Point> {
    if depth == 0 {
        return vec![start, end];
    }

    let p1 = lerp(start, end, 1.0 / 3.0);
    let p2 = lerp(start, end, 2.0 / 3.0);
    let peak = rotate_about(p1, p2, Angle::degrees(60.0));

    let mut vertices = generate(start, p1, depth - 1);
    vertices.extend(generate(p1, peak, depth - 1));
    vertices.extend(generate(peak, p2, depth - 1));
    vertices.extend(generate(p2, end, depth - 1));
    vertices
}

/// Per-vertex colors for an edge generated at `depth`.
///
/// An unsubdivided edge is blue; otherwise each segment is colored by which of
/// the four sub-edges of its parent it is.
#[must_use]
pub fn motif_colors(depth: u32) -> Vec<Color> {
    if depth == 0 {
        return vec![Color::BLUE; 2];
    }

    (0..segment_count(depth))
        .flat_map(|segment| {
            let color = MOTIF_COLORS[segment % MOTIF_COLORS.len()];
            [color, color]
        })
        .collect()
}

/// Generates one colored edge.
#[must_use]
pub fn edge(start: Point, end: Point, depth: u32) -> GeometryBuffer {
    GeometryBuffer::from_parts(generate(start, end, depth), motif_colors(depth))
}

/// Generates the three edges `a -> b`, `b -> c`, `c -> a` of a snowflake.
#[must_use]
pub fn snowflake(a: Point, b: Point, c: Point, depth: u32) -> [GeometryBuffer; 3] {
    [edge(a, b, depth), edge(b, c, depth), edge(c, a, depth)]
}
