//! Regular polygon approximation of a circle.

use std::f32::consts::TAU;

use crate::Point;

/// Places `segments` points evenly around the circle, starting at angle zero
/// and proceeding counter-clockwise. Draw the result as a line loop.
#[must_use]
pub fn generate(center: Point, radius: f32, segments: u32) -> Vec<Point> {
    let step = TAU / segments as f32;

    (0..segments)
        .map(|i| {
            let (sin, cos) = (i as f32 * step).sin_cos();
            Point::new(center.x + radius * cos, center.y + radius * sin)
        })
        .collect()
}
