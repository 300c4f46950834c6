//! Sierpinski triangle by midpoint subdivision.

use geometry::midpoint;

use crate::Point;

/// Number of triangles emitted for a given depth.
#[must_use]
pub fn triangle_count(depth: u32) -> usize {
    3usize.pow(depth)
}

/// Subdivides the triangle `(a, b, c)` `depth` times.
///
/// The result is a flat triangle list: every three consecutive vertices form
/// one of the `3^depth` corner triangles, in the order (a-corner, b-corner,
/// c-corner) at every level.
#[must_use]
pub fn generate(a: Point, b: Point, c: Point, depth: u32) -> Vec<Point> {
    if depth == 0 {
        return vec![a, b, c];
    }

    let d = midpoint(a, b);
    let e = midpoint(a, c);
    let f = midpoint(b, c);

    let mut vertices = generate(a, d, e, depth - 1);
    vertices.extend(generate(d, b, f, depth - 1));
    vertices.extend(generate(e, f, c, depth - 1));
    vertices
}
