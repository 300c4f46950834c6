//! Strongly typed 2D geometry shared by the generators and the rasterizer.
//!
//! All fractal geometry lives in normalized device coordinates ([`Ndc`]),
//! where both axes run from -1 to 1 and y points up. Pixel-space values use
//! [`ScreenPx`].

use std::ops::{Add, Sub};

pub use euclid::{Angle, Point2D as Point, Size2D as Extent, Vector2D as Offset};

/// Normalized device coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ndc;

/// Physical pixels on a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPx;

/// A point in normalized device coordinates.
pub type NdcPoint = Point<f32, Ndc>;

/// Returns the point a fraction `alpha` of the way from `p` to `q`.
///
/// `alpha == 0` yields `p` and `alpha == 1` yields `q` exactly.
#[must_use]
pub fn lerp<U>(p: Point<f32, U>, q: Point<f32, U>, alpha: f32) -> Point<f32, U> {
    Point::new(
        (1.0 - alpha) * p.x + alpha * q.x,
        (1.0 - alpha) * p.y + alpha * q.y,
    )
}

#[must_use]
pub fn midpoint<U>(p: Point<f32, U>, q: Point<f32, U>) -> Point<f32, U> {
    Point::new(p.x * 0.5 + q.x * 0.5, p.y * 0.5 + q.y * 0.5)
}

/// Rotates `point` counter-clockwise around `pivot` by `angle`.
#[must_use]
pub fn rotate_about<U>(point: Point<f32, U>, pivot: Point<f32, U>, angle: Angle<f32>) -> Point<f32, U> {
    let (sin, cos) = angle.sin_cos();
    let d = point - pivot;

    Point::new(
        pivot.x + d.x * cos - d.y * sin,
        pivot.y + d.x * sin + d.y * cos,
    )
}

/// Scales `point` toward the origin by `factor`.
#[must_use]
pub fn scale<U>(point: Point<f32, U>, factor: f32) -> Point<f32, U> {
    Point::new(point.x * factor, point.y * factor)
}

/// An axis-aligned rectangle stored as its min and max corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<T, U>(euclid::Box2D<T, U>);

impl<T, U> Rect<T, U> {
    pub fn new(origin: Point<T, U>, extent: Extent<T, U>) -> Self
    where
        T: Copy + Add<T, Output = T>,
    {
        Self(euclid::Box2D::from_origin_and_size(origin, extent))
    }

    /// The smallest rectangle containing every point. Empty input produces a
    /// zero-sized rectangle at the origin.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<Point<T, U>>,
        T: Copy + PartialOrd + euclid::num::Zero,
    {
        Self(euclid::Box2D::from_points(points))
    }

    pub fn min(&self) -> Point<T, U>
    where
        T: Copy,
    {
        self.0.min
    }

    pub fn max(&self) -> Point<T, U>
    where
        T: Copy,
    {
        self.0.max
    }

    pub fn extent(&self) -> Extent<T, U>
    where
        T: Copy + Sub<T, Output = T>,
    {
        self.0.size()
    }

    pub fn contains(&self, p: Point<T, U>) -> bool
    where
        T: Copy + PartialOrd,
    {
        self.0.min.x <= p.x && p.x <= self.0.max.x && self.0.min.y <= p.y && p.y <= self.0.max.y
    }

    pub fn intersection(&self, rhs: &Rect<T, U>) -> Option<Rect<T, U>>
    where
        T: Copy + PartialOrd,
    {
        self.0.intersection(&rhs.0).map(Rect)
    }
}
