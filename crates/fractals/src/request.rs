//! What to draw: a fractal kind, its depth, and its seed points.
//!
//! A [`FractalRequest`] is a plain value. Changing the selection means building
//! a new request and comparing it against the last one drawn; nothing is
//! mutated in place.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;

use crate::{square_diamond, Error, Point};

/// Upper depth bound for kinds whose output grows exponentially.
pub const MAX_RECURSIVE_DEPTH: u32 = 10;

/// Upper depth bound for kinds whose depth is a segment count.
pub const MAX_SEGMENTS: u32 = 1024;

pub type Seeds = SmallVec<[Point; 10]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FractalKind {
    Sierpinski,
    SquareDiamond,
    KochSnowflake,
    Circle,
}

impl FractalKind {
    pub const ALL: [Self; 4] = [
        Self::Sierpinski,
        Self::SquareDiamond,
        Self::KochSnowflake,
        Self::Circle,
    ];

    /// The largest depth (or segment count) this kind accepts.
    #[must_use]
    pub fn max_depth(self) -> u32 {
        match self {
            Self::Sierpinski | Self::SquareDiamond | Self::KochSnowflake => MAX_RECURSIVE_DEPTH,
            Self::Circle => MAX_SEGMENTS,
        }
    }

    /// The depth a freshly selected kind starts at.
    #[must_use]
    pub fn initial_depth(self) -> u32 {
        match self {
            Self::Circle => 64,
            _ => 0,
        }
    }

    #[must_use]
    pub fn default_seeds(self) -> Seeds {
        match self {
            Self::Sierpinski | Self::KochSnowflake => SmallVec::from_slice(&[
                Point::new(0.0, 0.5),
                Point::new(-0.5, -0.5),
                Point::new(0.5, -0.5),
            ]),
            Self::SquareDiamond => square_diamond::DEFAULT_SEEDS
                .iter()
                .map(|[x, y]| Point::new(*x, *y))
                .collect(),
            Self::Circle => SmallVec::from_slice(&[Point::new(0.0, 0.0), Point::new(0.5, 0.0)]),
        }
    }

    /// Checks that `seeds` has the shape this kind's generator needs.
    pub fn validate_seeds(self, seeds: &[Point]) -> Result<(), Error> {
        let (ok, expected) = match self {
            Self::Sierpinski | Self::KochSnowflake => (seeds.len() == 3, "exactly 3"),
            Self::SquareDiamond => (
                !seeds.is_empty() && seeds.len() % 2 == 0,
                "a non-empty, even number of",
            ),
            Self::Circle => (seeds.len() == 2, "exactly 2 (center, rim)"),
        };

        if ok {
            Ok(())
        } else {
            Err(Error::MalformedSeed {
                kind: self,
                expected,
                actual: seeds.len(),
            })
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sierpinski => "sierpinski",
            Self::SquareDiamond => "square-diamond",
            Self::KochSnowflake => "koch",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FractalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "sierpinski" => Ok(Self::Sierpinski),
            "2" | "square-diamond" | "square_diamond" | "squarediamond" => Ok(Self::SquareDiamond),
            "3" | "koch" | "koch-snowflake" | "snowflake" => Ok(Self::KochSnowflake),
            "4" | "circle" => Ok(Self::Circle),
            _ => Err(Error::UnknownKind(s.to_owned())),
        }
    }
}

/// A complete description of one frame's geometry.
///
/// Two requests that compare equal always produce the same geometry, up to the
/// random coloring pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalRequest {
    kind: FractalKind,
    depth: u32,
    seeds: Seeds,
}

impl FractalRequest {
    #[must_use]
    pub fn new(kind: FractalKind) -> Self {
        Self {
            kind,
            depth: kind.initial_depth(),
            seeds: kind.default_seeds(),
        }
    }

    /// Sets the depth, clamped to `0..=kind.max_depth()`.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.min(self.kind.max_depth());
        self
    }

    /// Moves the depth by `delta`, stopping at either bound.
    #[must_use]
    pub fn stepped(self, delta: i32) -> Self {
        let depth = self.depth.saturating_add_signed(delta);
        self.with_depth(depth)
    }

    /// Switches to `kind`. The depth carries over between kinds that share a
    /// depth scale and resets to the new kind's initial depth otherwise. Seeds
    /// revert to the new kind's defaults.
    #[must_use]
    pub fn with_kind(self, kind: FractalKind) -> Self {
        if kind == self.kind {
            return self;
        }

        let depth = if kind.max_depth() == self.kind.max_depth() {
            self.depth
        } else {
            kind.initial_depth()
        };

        Self {
            kind,
            depth,
            seeds: kind.default_seeds(),
        }
    }

    /// Replaces the seed points. Fails without modifying anything if the seeds
    /// do not fit the kind.
    pub fn with_seeds(mut self, seeds: &[Point]) -> Result<Self, Error> {
        self.kind.validate_seeds(seeds)?;
        self.seeds = SmallVec::from_slice(seeds);
        Ok(self)
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn seeds(&self) -> &[Point] {
        &self.seeds
    }
}

impl Default for FractalRequest {
    fn default() -> Self {
        Self::new(FractalKind::Sierpinski)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping() {
        let request = FractalRequest::new(FractalKind::Sierpinski);
        assert_eq!(request.depth(), 0);
        assert_eq!(request.clone().stepped(-1).depth(), 0);
        assert_eq!(request.clone().with_depth(11).depth(), 10);
        assert_eq!(request.clone().with_depth(10).stepped(1).depth(), 10);
        assert_eq!(request.with_depth(4).stepped(-2).depth(), 2);

        let circle = FractalRequest::new(FractalKind::Circle);
        assert_eq!(circle.clone().with_depth(5000).depth(), MAX_SEGMENTS);
        assert_eq!(circle.with_depth(3).stepped(-10).depth(), 0);
    }

    #[test]
    fn kind_switch() {
        let request = FractalRequest::new(FractalKind::Circle).with_depth(100);

        let koch = request.clone().with_kind(FractalKind::KochSnowflake);
        assert_eq!(koch.kind(), FractalKind::KochSnowflake);
        assert_eq!(koch.depth(), 0);
        assert_eq!(koch.seeds().len(), 3);

        let same = request.clone().with_kind(FractalKind::Circle);
        assert_eq!(same, request);

        let sierpinski = FractalRequest::new(FractalKind::KochSnowflake)
            .with_depth(3)
            .with_kind(FractalKind::Sierpinski);
        assert_eq!(sierpinski.depth(), 3);
        assert_ne!(sierpinski, FractalRequest::new(FractalKind::KochSnowflake).with_depth(3));

        let circle = sierpinski.with_kind(FractalKind::Circle);
        assert_eq!(circle.depth(), FractalKind::Circle.initial_depth());
        assert_eq!(circle.seeds().len(), 2);
    }

    #[test]
    fn seed_validation() {
        let two = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];

        let err = FractalRequest::new(FractalKind::Sierpinski)
            .with_seeds(&two)
            .unwrap_err();
        assert_eq!(
            err,
            Error::MalformedSeed {
                kind: FractalKind::Sierpinski,
                expected: "exactly 3",
                actual: 2,
            }
        );

        assert!(FractalRequest::new(FractalKind::SquareDiamond)
            .with_seeds(&[])
            .is_err());
        assert!(FractalRequest::new(FractalKind::SquareDiamond)
            .with_seeds(&two[..1])
            .is_err());

        let circle = FractalRequest::new(FractalKind::Circle)
            .with_seeds(&two)
            .unwrap();
        assert_eq!(circle.seeds(), &two);

        for kind in FractalKind::ALL {
            assert!(kind.validate_seeds(&kind.default_seeds()).is_ok());
        }
    }

    #[test]
    fn parsing() {
        assert_eq!("Koch".parse::<FractalKind>(), Ok(FractalKind::KochSnowflake));
        assert_eq!("2".parse::<FractalKind>(), Ok(FractalKind::SquareDiamond));
        assert_eq!(
            "mandelbrot".parse::<FractalKind>(),
            Err(Error::UnknownKind("mandelbrot".into()))
        );

        for kind in FractalKind::ALL {
            assert_eq!(kind.to_string().parse::<FractalKind>(), Ok(kind));
        }
    }
}
