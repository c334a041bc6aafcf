//! Window management
//!
//! winit windows as viewer canvases

use crate::batch::ShapeBatch;
use crate::context::Color;
use crate::viewport::CanvasSurface;
use std::sync::Arc;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    error::EventLoopError,
    event_loop::EventLoop,
    window::Window,
};

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Evo Viewer".to_string(),
            width: 800,
            height: 800,
        }
    }
}

/// Create window attributes from config
pub fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false)
}

pub fn create_event_loop() -> Result<EventLoop<()>, EventLoopError> {
    EventLoop::new()
}

/// A window used as the viewer canvas. The context is a [`ShapeBatch`] that the
/// GPU presenter uploads after every cycle.
pub struct WindowCanvas {
    window: Arc<Window>,
    backing_size: PhysicalSize<u32>,
    context: Option<ShapeBatch>,
}

impl WindowCanvas {
    pub fn new(window: Arc<Window>, background: Color) -> Self {
        let backing_size = window.inner_size();
        Self {
            window,
            backing_size,
            context: Some(ShapeBatch::new(background)),
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Backing store size in device pixels, as set by the viewport.
    pub fn backing_size(&self) -> PhysicalSize<u32> {
        self.backing_size
    }
}

impl CanvasSurface for WindowCanvas {
    type Context = ShapeBatch;

    fn logical_size(&self) -> (f32, f32) {
        let size: LogicalSize<f32> = self.window.inner_size().to_logical(self.window.scale_factor());
        (size.width, size.height)
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        Some(self.window.scale_factor() as f32)
    }

    fn resize_backing_store(&mut self, width: u32, height: u32) {
        self.backing_size = PhysicalSize::new(width, height);
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        // The returned size is only Some when the platform applied it synchronously.
        let _ = self.window.request_inner_size(LogicalSize::new(width, height));
    }

    fn take_context(&mut self) -> Option<ShapeBatch> {
        self.context.take()
    }
}
