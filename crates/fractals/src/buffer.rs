use crate::{Color, Point};

/// The draw topology used to interpret a vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Every three vertices form one filled triangle.
    Triangles,
    /// Every two vertices form one independent segment.
    Lines,
    /// Each vertex is connected to the next.
    LineStrip,
    /// As `LineStrip`, with the last vertex connected back to the first.
    LineLoop,
}

/// Vertices and their colors, kept in lockstep.
///
/// There is no way to add a vertex without its color, so
/// `vertices().len() == colors().len()` always holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    vertices: Vec<Point>,
    colors: Vec<Color>,
}

impl GeometryBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Builds a buffer from parallel vertex and color lists.
    ///
    /// Panics if the lists differ in length.
    #[must_use]
    pub fn from_parts(vertices: Vec<Point>, colors: Vec<Color>) -> Self {
        assert_eq!(vertices.len(), colors.len());
        Self { vertices, colors }
    }

    /// Builds a buffer in which every vertex has the same color.
    #[must_use]
    pub fn solid(vertices: Vec<Point>, color: Color) -> Self {
        let colors = vec![color; vertices.len()];
        Self { vertices, colors }
    }

    pub fn push(&mut self, vertex: Point, color: Color) {
        self.vertices.push(vertex);
        self.colors.push(color);
    }

    pub fn extend(&mut self, other: GeometryBuffer) {
        self.vertices.extend(other.vertices);
        self.colors.extend(other.colors);
    }

    /// Replaces every color at once.
    ///
    /// Panics if `colors` does not have one entry per vertex.
    pub fn recolor(&mut self, colors: Vec<Color>) {
        assert_eq!(self.vertices.len(), colors.len());
        self.colors = colors;
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.vertices.iter().copied().zip(self.colors.iter().copied())
    }
}
