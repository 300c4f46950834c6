use std::ops::{Deref, DerefMut};

use fractals::{Color, Scene};
use geometry::{Extent, ScreenPx};
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use raster::{Canvas, FrameCanvas};
use shell::{ButtonState, VirtualKeyCode, Window, WindowControl, WindowHandler};

use crate::{
    config::Config,
    input::{self, Command},
    view::View,
    Error,
};

/// Clears the canvas to `background` and draws every batch of the scene.
pub fn paint<T>(canvas: &mut Canvas<T>, background: Color, scene: &Scene)
where
    T: Deref<Target = [u8]> + DerefMut,
{
    canvas.clear(background);
    canvas.draw_scene(scene);
}

/// The windowed viewer: a [`View`] presented on a `pixels` surface.
pub struct App {
    pixels: Pixels,
    size: Extent<u32, ScreenPx>,
    view: View,
    config: Config,
}

impl App {
    pub fn new(window: &Window, config: Config) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface)?;

        info!(
            "showing {} at depth {}",
            config.request.kind(),
            config.request.depth()
        );

        let app = Self {
            pixels,
            size,
            view: View::new(config.request.clone(), config.coloring, config.rng()),
            config,
        };

        window.set_title(&app.title());
        Ok(app)
    }

    fn title(&self) -> String {
        let request = self.view.request();
        format!(
            "{} | {} | depth {}",
            self.config.title,
            request.kind(),
            request.depth()
        )
    }

    fn repaint(&mut self) -> Result<(), Error> {
        let mut canvas =
            FrameCanvas::from_frame(self.pixels.frame_mut(), self.size, self.config.color_space)?;
        paint(&mut canvas, self.config.background, self.view.scene());
        Ok(())
    }

    fn save_snapshot(&mut self) -> Result<(), Error> {
        // Leaves the view dirty if this rebuilt the scene, so the window
        // catches up on its next redraw.
        self.view.refresh();

        let mut canvas = Canvas::new(self.size, self.config.color_space);
        paint(&mut canvas, self.config.background, self.view.scene());
        raster::save_png(&canvas, &self.config.snapshot_path)?;
        Ok(())
    }
}

impl WindowHandler for App {
    fn on_key(&mut self, control: &mut dyn WindowControl, key: VirtualKeyCode, state: ButtonState) {
        let Some(command) = input::translate(key, state) else {
            return;
        };

        if let Some(request) = command.apply(self.view.request()) {
            if self.view.set_request(request) {
                control.window().set_title(&self.title());
                control.request_redraw();
            }
            return;
        }

        match command {
            Command::Recolor => {
                self.view.recolor();
                control.request_redraw();
            }
            Command::SaveSnapshot => {
                if let Err(e) = self.save_snapshot() {
                    error!("failed to save snapshot: {e}");
                }
            }
            Command::Quit => control.close(),
            Command::StepDepth(_) | Command::SetDepth(_) | Command::SelectKind(_) => {}
        }
    }

    fn on_resize(&mut self, control: &mut dyn WindowControl, inner_size: Extent<u32, ScreenPx>) {
        // Minimized.
        if inner_size.width == 0 || inner_size.height == 0 {
            return;
        }

        if let Err(e) = self
            .pixels
            .resize_surface(inner_size.width, inner_size.height)
            .and_then(|()| {
                self.pixels
                    .resize_buffer(inner_size.width, inner_size.height)
            })
        {
            warn!("failed to resize surface to {inner_size:?}: {e}");
            return;
        }

        self.size = inner_size;
        self.view.invalidate_frame();
        control.request_redraw();
    }

    fn on_redraw(&mut self, control: &mut dyn WindowControl) {
        if self.view.refresh() {
            if let Err(e) = self.repaint() {
                error!("failed to paint frame: {e}");
                control.close();
                return;
            }
            self.view.painted();
        }

        if let Err(e) = self.pixels.render() {
            error!("failed to present frame: {e}");
            control.close();
        }
    }
}
