use fractals::{Coloring, FractalRequest, Regenerator, Scene};
use rand::rngs::StdRng;

/// What the viewer shows, independent of the surface it is shown on.
///
/// Holds the one request that describes the picture. Key presses replace it;
/// [`View::refresh`] hands it to the regenerator, which only rebuilds the
/// geometry if the request actually changed.
pub struct View {
    request: FractalRequest,
    coloring: Coloring,
    regenerator: Regenerator,
    rng: StdRng,
    /// The presented frame no longer matches the scene.
    dirty: bool,
}

impl View {
    #[must_use]
    pub fn new(request: FractalRequest, coloring: Coloring, rng: StdRng) -> Self {
        Self {
            request,
            coloring,
            regenerator: Regenerator::new(),
            rng,
            dirty: true,
        }
    }

    #[must_use]
    pub fn request(&self) -> &FractalRequest {
        &self.request
    }

    /// Replaces the request. Returns true if it differs from the current one.
    pub fn set_request(&mut self, request: FractalRequest) -> bool {
        if request == self.request {
            return false;
        }
        self.request = request;
        true
    }

    /// Draws fresh colors on the next refresh.
    pub fn recolor(&mut self) {
        self.regenerator.invalidate();
    }

    /// The frame must be repainted even if the scene stays the same, e.g.
    /// after a resize.
    pub fn invalidate_frame(&mut self) {
        self.dirty = true;
    }

    /// Brings the scene up to date with the request. Returns true if the frame
    /// needs repainting, either because the scene was rebuilt now or because
    /// an earlier change has not been painted yet.
    pub fn refresh(&mut self) -> bool {
        self.dirty |= self
            .regenerator
            .update(&self.request, &self.coloring, &mut self.rng);
        self.dirty
    }

    /// Records that the current scene is on screen.
    pub fn painted(&mut self) {
        self.dirty = false;
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.regenerator.scene()
    }
}
