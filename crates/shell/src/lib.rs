//! A single-window shell over `winit`.
//!
//! The shell owns the OS event loop and forwards the handful of events a
//! fractal viewer cares about (keys, resizes, redraws, close requests) to a
//! [`WindowHandler`]. Drawing is the handler's business; the shell only hands
//! out a [`Window`] that implements the raw window handle traits so a surface
//! can be created for it.

use geometry::{Extent, ScreenPx};
use log::debug;
use raw_window_handle::{
    HasRawDisplayHandle, HasRawWindowHandle, RawDisplayHandle, RawWindowHandle,
};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
};

mod keys;

pub use keys::VirtualKeyCode;

/// The state of a button or key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
    /// The number of 'repeat' cycles a key has been held for. The frequency of
    /// these cycles is operating system dependent and may be changed by the
    /// user.
    Repeated(u16),
}

bitflags::bitflags! {
    pub struct WindowFlags: u32 {
        const VISIBLE = 1 << 0;
        const RESIZABLE = 1 << 1;
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::RESIZABLE
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Os(#[from] winit::error::OsError),
    #[error("window handler failed to initialize: {0}")]
    Handler(#[source] Box<dyn std::error::Error>),
}

/// A description of the window to open.
#[derive(Clone, Debug)]
pub struct WindowDesc<'a> {
    pub title: &'a str,
    pub size: Extent<u32, ScreenPx>,
    pub flags: WindowFlags,
}

impl<'a> WindowDesc<'a> {
    fn builder(&self) -> winit::window::WindowBuilder {
        winit::window::WindowBuilder::new()
            .with_title(self.title)
            .with_inner_size(as_logical_size(self.size))
            .with_resizable(self.flags.contains(WindowFlags::RESIZABLE))
            .with_visible(self.flags.contains(WindowFlags::VISIBLE))
    }
}

/// The window opened by [`run`].
pub struct Window {
    inner: winit::window::Window,
}

impl Window {
    /// The size of the drawable area in physical pixels.
    #[must_use]
    pub fn inner_size(&self) -> Extent<u32, ScreenPx> {
        as_extent(self.inner.inner_size())
    }

    pub fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

unsafe impl HasRawWindowHandle for Window {
    fn raw_window_handle(&self) -> RawWindowHandle {
        self.inner.raw_window_handle()
    }
}

unsafe impl HasRawDisplayHandle for Window {
    fn raw_display_handle(&self) -> RawDisplayHandle {
        self.inner.raw_display_handle()
    }
}

/// Trait for handling window events.
pub trait WindowHandler {
    /// Called when the event loop shuts down. This is the last event the
    /// handler receives.
    fn on_destroy(&mut self) {}

    /// Called when the user has requested that the window be closed, either by
    /// clicking the X, by pressing Alt-F4, etc. Returning true closes it.
    fn on_close_request(&mut self, _control: &mut dyn WindowControl) -> bool {
        true
    }

    /// Called when a key is pressed, repeated, or released.
    fn on_key(&mut self, control: &mut dyn WindowControl, key: VirtualKeyCode, state: ButtonState);

    /// Called when the window is resized.
    fn on_resize(&mut self, control: &mut dyn WindowControl, inner_size: Extent<u32, ScreenPx>);

    /// Called when window DPI scaling changes. This may change if the user
    /// changes OS DPI or resolution settings, or if the window moves between
    /// two monitors with different DPI.
    fn on_rescale(
        &mut self,
        control: &mut dyn WindowControl,
        _scale_factor: f64,
        new_inner_size: Extent<u32, ScreenPx>,
    ) {
        self.on_resize(control, new_inner_size);
    }

    /// Called when the OS requests that the window be redrawn.
    fn on_redraw(&mut self, control: &mut dyn WindowControl);
}

/// Trait for feeding back window control to the shell.
pub trait WindowControl {
    fn window(&self) -> &Window;

    /// Ends the event loop after the current event.
    fn close(&mut self);

    fn request_redraw(&mut self) {
        self.window().request_redraw();
    }
}

struct Control<'a> {
    window: &'a Window,
    close: bool,
}

impl<'a> WindowControl for Control<'a> {
    fn window(&self) -> &Window {
        self.window
    }

    fn close(&mut self) {
        self.close = true;
    }
}

/// Turns raw press/release events into [`ButtonState`]s, counting repeats of
/// the most recently pressed key.
#[derive(Debug, Default)]
struct KeyRepeat {
    held: Option<(u32, u16)>,
}

impl KeyRepeat {
    fn track(&mut self, scancode: u32, pressed: bool) -> ButtonState {
        if !pressed {
            if matches!(self.held, Some((held, _)) if held == scancode) {
                self.held = None;
            }
            return ButtonState::Released;
        }

        match self.held {
            Some((held, count)) if held == scancode => {
                let count = count.saturating_add(1);
                self.held = Some((scancode, count));
                ButtonState::Repeated(count)
            }
            _ => {
                self.held = Some((scancode, 0));
                ButtonState::Pressed
            }
        }
    }
}

/// Creates the described window, builds its handler, and runs the OS event
/// loop until the handler closes the window.
///
/// Only returns on failure to set up; once the loop starts, the process exits
/// when it ends.
pub fn run<H, F, E>(desc: &WindowDesc, make_handler: F) -> Result<(), Error>
where
    H: WindowHandler + 'static,
    F: FnOnce(&Window) -> Result<H, E>,
    E: std::error::Error + 'static,
{
    let event_loop = EventLoop::new();
    let window = Window {
        inner: desc.builder().build(&event_loop)?,
    };

    let mut handler = make_handler(&window).map_err(|e| Error::Handler(Box::new(e)))?;
    let mut repeat = KeyRepeat::default();

    debug!("opened window '{}' at {:?}", desc.title, window.inner_size());

    event_loop.run(move |event, _target, control_flow| {
        control_flow.set_wait();

        let mut control = Control {
            window: &window,
            close: false,
        };

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.inner.id() => {
                match event {
                    WindowEvent::Resized(size) => {
                        handler.on_resize(&mut control, as_extent(size));
                    }
                    WindowEvent::CloseRequested => {
                        if handler.on_close_request(&mut control) {
                            control.close();
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        let Some(key) = input.virtual_keycode else { return; };
                        let state =
                            repeat.track(input.scancode, input.state == ElementState::Pressed);
                        handler.on_key(&mut control, keys::map(key), state);
                    }
                    WindowEvent::ScaleFactorChanged {
                        scale_factor,
                        new_inner_size,
                    } => {
                        handler.on_rescale(&mut control, scale_factor, as_extent(*new_inner_size));
                    }
                    _ => {}
                }
            }
            Event::RedrawRequested(window_id) if window_id == window.inner.id() => {
                handler.on_redraw(&mut control);
            }
            Event::LoopDestroyed => {
                handler.on_destroy();
            }
            _ => {}
        }

        if control.close {
            *control_flow = ControlFlow::Exit;
        }
    })
}

fn as_logical_size(size: Extent<u32, ScreenPx>) -> LogicalSize<u32> {
    LogicalSize::new(size.width, size.height)
}

fn as_extent(size: PhysicalSize<u32>) -> Extent<u32, ScreenPx> {
    Extent::new(size.width, size.height)
}
