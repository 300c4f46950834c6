use log::debug;
use rand::Rng;

use crate::{
    circle, koch, sierpinski, square_diamond, Coloring, FractalKind, FractalRequest,
    GeometryBuffer, Primitive,
};

/// One draw call's worth of geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub primitive: Primitive,
    pub buffer: GeometryBuffer,
}

/// All the geometry for a single request, in draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    batches: Vec<Batch>,
}

impl Scene {
    /// Generates the geometry described by `request`.
    ///
    /// `coloring` applies to kinds without a palette of their own (Sierpinski
    /// and circle); `rng` is only consulted for [`Coloring::Random`].
    pub fn build(request: &FractalRequest, coloring: &Coloring, rng: &mut impl Rng) -> Self {
        let seeds = request.seeds();
        let depth = request.depth();

        let batches = match request.kind() {
            FractalKind::Sierpinski => {
                let vertices = sierpinski::generate(seeds[0], seeds[1], seeds[2], depth);
                let colors = coloring.colors(vertices.len(), rng);
                vec![Batch {
                    primitive: Primitive::Triangles,
                    buffer: GeometryBuffer::from_parts(vertices, colors),
                }]
            }
            FractalKind::SquareDiamond => vec![Batch {
                primitive: Primitive::LineStrip,
                buffer: square_diamond::generate(seeds, depth),
            }],
            FractalKind::KochSnowflake => koch::snowflake(seeds[0], seeds[1], seeds[2], depth)
                .into_iter()
                .map(|buffer| Batch {
                    primitive: Primitive::LineStrip,
                    buffer,
                })
                .collect(),
            FractalKind::Circle => {
                let radius = (seeds[1] - seeds[0]).length();
                let vertices = circle::generate(seeds[0], radius, depth);
                let colors = coloring.colors(vertices.len(), rng);
                vec![Batch {
                    primitive: Primitive::LineLoop,
                    buffer: GeometryBuffer::from_parts(vertices, colors),
                }]
            }
        };

        Self { batches }
    }

    #[must_use]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.buffer.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Caches the scene for the last request it was asked to draw.
///
/// The redraw loop calls [`Regenerator::update`] every frame; geometry is only
/// rebuilt when the request differs by value from the one already built.
#[derive(Debug, Default)]
pub struct Regenerator {
    built: Option<FractalRequest>,
    scene: Scene,
}

impl Regenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the scene if `request` is new. Returns true if it did.
    pub fn update(
        &mut self,
        request: &FractalRequest,
        coloring: &Coloring,
        rng: &mut impl Rng,
    ) -> bool {
        if self.built.as_ref() == Some(request) {
            return false;
        }

        self.scene = Scene::build(request, coloring, rng);
        self.built = Some(request.clone());

        debug!(
            "regenerated {} at depth {}: {} batches, {} vertices",
            request.kind(),
            request.depth(),
            self.scene.batches().len(),
            self.scene.vertex_count()
        );

        true
    }

    /// Forces the next [`Regenerator::update`] to rebuild.
    pub fn invalidate(&mut self) {
        self.built = None;
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn request(&self) -> Option<&FractalRequest> {
        self.built.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{Color, Point};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(453)
    }

    #[test]
    fn sierpinski() {
        let request = FractalRequest::new(FractalKind::Sierpinski).with_depth(2);
        let scene = Scene::build(&request, &Coloring::Random, &mut rng());

        assert_eq!(scene.batches().len(), 1);
        let batch = &scene.batches()[0];
        assert_eq!(batch.primitive, Primitive::Triangles);
        assert_eq!(batch.buffer.len(), 27);
        assert_eq!(batch.buffer.colors().len(), 27);
    }

    #[test]
    fn koch() {
        let request = FractalRequest::new(FractalKind::KochSnowflake).with_depth(3);
        let scene = Scene::build(&request, &Coloring::Random, &mut rng());

        assert_eq!(scene.batches().len(), 3);
        assert_eq!(scene.vertex_count(), 3 * 2 * 64);
        assert!(scene
            .batches()
            .iter()
            .all(|b| b.primitive == Primitive::LineStrip));

        // The three edges close up into one loop.
        let batches = scene.batches();
        for (i, batch) in batches.iter().enumerate() {
            let next = &batches[(i + 1) % 3];
            assert_eq!(
                batch.buffer.vertices().last(),
                next.buffer.vertices().first()
            );
        }
    }

    #[test]
    fn square_diamond() {
        let request = FractalRequest::new(FractalKind::SquareDiamond).with_depth(3);
        let scene = Scene::build(&request, &Coloring::Random, &mut rng());

        assert_eq!(scene.batches()[0].primitive, Primitive::LineStrip);
        assert_eq!(scene.vertex_count(), 40);
    }

    #[test]
    fn circle() {
        let request = FractalRequest::new(FractalKind::Circle).with_depth(12);
        let scene = Scene::build(&request, &Coloring::Solid(Color::WHITE), &mut rng());

        let batch = &scene.batches()[0];
        assert_eq!(batch.primitive, Primitive::LineLoop);
        assert_eq!(batch.buffer.len(), 12);
        assert_eq!(batch.buffer.vertices()[0], Point::new(0.5, 0.0));
        assert!(batch.buffer.colors().iter().all(|c| *c == Color::WHITE));

        let empty = FractalRequest::new(FractalKind::Circle).with_depth(0);
        assert!(Scene::build(&empty, &Coloring::Random, &mut rng()).is_empty());
    }

    #[test]
    fn geometry_ignores_coloring() {
        let request = FractalRequest::new(FractalKind::Sierpinski).with_depth(4);
        let a = Scene::build(&request, &Coloring::Random, &mut StdRng::seed_from_u64(1));
        let b = Scene::build(&request, &Coloring::Random, &mut StdRng::seed_from_u64(2));

        assert_eq!(
            a.batches()[0].buffer.vertices(),
            b.batches()[0].buffer.vertices()
        );
        assert_ne!(a.batches()[0].buffer.colors(), b.batches()[0].buffer.colors());
    }

    #[test]
    fn regenerates_on_change_only() {
        let mut rng = rng();
        let mut regenerator = Regenerator::new();
        let coloring = Coloring::Random;

        let request = FractalRequest::new(FractalKind::Sierpinski).with_depth(1);
        assert!(regenerator.update(&request, &coloring, &mut rng));
        let first = regenerator.scene().clone();

        // Same request, no rebuild, colors stay put.
        assert!(!regenerator.update(&request.clone(), &coloring, &mut rng));
        assert_eq!(regenerator.scene(), &first);

        // Kind change with an unchanged depth still rebuilds.
        let koch = request.clone().with_kind(FractalKind::KochSnowflake);
        assert_eq!(koch.depth(), request.depth());
        assert!(regenerator.update(&koch, &coloring, &mut rng));
        assert_eq!(regenerator.scene().batches().len(), 3);
        assert_eq!(regenerator.request(), Some(&koch));

        regenerator.invalidate();
        assert!(regenerator.update(&koch, &coloring, &mut rng));
    }
}
