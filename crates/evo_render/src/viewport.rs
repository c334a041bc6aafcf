//! Viewport manager
//!
//! Runs once at startup: reads the canvas' laid-out logical size, grows the backing
//! store by the device pixel ratio, pins the displayed size back to the logical size
//! and scales the drawing context so callers keep working in logical pixels.
//!
//! Not re-run on resize. A canvas gives its context away once, so a second
//! initialization of the same canvas is rejected before anything is touched.

use crate::context::DrawingContext;
use evo_core::CoordinateMapper;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("viewport already initialized for this canvas")]
    AlreadyInitialized,

    #[error("canvas has no drawable area ({width}x{height} logical pixels)")]
    EmptyCanvas { width: f32, height: f32 },
}

/// Host surface the viewer draws into (a window, an offscreen buffer, ...).
pub trait CanvasSurface {
    type Context: DrawingContext;

    /// Size as laid out by the host, in logical pixels.
    fn logical_size(&self) -> (f32, f32);

    /// `None` when the host cannot tell.
    fn device_pixel_ratio(&self) -> Option<f32>;

    fn resize_backing_store(&mut self, width: u32, height: u32);

    /// Size the surface is displayed at, in logical pixels.
    fn set_display_size(&mut self, width: f32, height: f32);

    /// Hand out the drawing context. Returns `None` once it has been taken.
    fn take_context(&mut self) -> Option<Self::Context>;
}

/// Initialized viewport. Owns the drawing context.
pub struct Viewport<C> {
    logical_width: f32,
    logical_height: f32,
    device_pixel_ratio: f32,
    context: C,
}

impl<C: DrawingContext> Viewport<C> {
    pub fn initialize<S>(canvas: &mut S) -> Result<Self, ViewportError>
    where
        S: CanvasSurface<Context = C>,
    {
        let (logical_width, logical_height) = canvas.logical_size();
        if !(logical_width > 0.0 && logical_height > 0.0) {
            return Err(ViewportError::EmptyCanvas {
                width: logical_width,
                height: logical_height,
            });
        }

        let mut context = canvas
            .take_context()
            .ok_or(ViewportError::AlreadyInitialized)?;

        let device_pixel_ratio = canvas
            .device_pixel_ratio()
            .filter(|ratio| ratio.is_finite() && *ratio >= 1.0)
            .unwrap_or(1.0);

        canvas.resize_backing_store(
            (logical_width * device_pixel_ratio).round() as u32,
            (logical_height * device_pixel_ratio).round() as u32,
        );
        canvas.set_display_size(logical_width, logical_height);
        context.set_scale(device_pixel_ratio);

        tracing::debug!(
            logical_width,
            logical_height,
            device_pixel_ratio,
            "viewport initialized"
        );

        Ok(Self {
            logical_width,
            logical_height,
            device_pixel_ratio,
            context,
        })
    }
}

impl<C> Viewport<C> {
    pub fn logical_width(&self) -> f32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f32 {
        self.logical_height
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.logical_width, self.logical_height)
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }
}

/// Headless canvas backed by any drawing context.
pub struct OffscreenCanvas<C> {
    logical_size: (f32, f32),
    device_pixel_ratio: Option<f32>,
    backing_size: (u32, u32),
    display_size: (f32, f32),
    context: Option<C>,
}

impl<C> OffscreenCanvas<C> {
    pub fn new(width: f32, height: f32, device_pixel_ratio: Option<f32>, context: C) -> Self {
        Self {
            logical_size: (width, height),
            device_pixel_ratio,
            backing_size: (width as u32, height as u32),
            display_size: (width, height),
            context: Some(context),
        }
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.backing_size
    }

    pub fn display_size(&self) -> (f32, f32) {
        self.display_size
    }
}

impl<C: DrawingContext> CanvasSurface for OffscreenCanvas<C> {
    type Context = C;

    fn logical_size(&self) -> (f32, f32) {
        self.logical_size
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        self.device_pixel_ratio
    }

    fn resize_backing_store(&mut self, width: u32, height: u32) {
        self.backing_size = (width, height);
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display_size = (width, height);
    }

    fn take_context(&mut self) -> Option<C> {
        self.context.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::ShapeBatch;
    use crate::context::Color;

    fn canvas(ratio: Option<f32>) -> OffscreenCanvas<ShapeBatch> {
        OffscreenCanvas::new(800.0, 600.0, ratio, ShapeBatch::new(Color::rgb(0.0, 0.0, 0.0)))
    }

    #[test]
    fn backing_store_follows_ratio() {
        let mut canvas = canvas(Some(2.0));
        let viewport = Viewport::initialize(&mut canvas).unwrap();

        assert_eq!(canvas.backing_size(), (1600, 1200));
        assert_eq!(canvas.display_size(), (800.0, 600.0));
        assert_eq!(viewport.logical_width(), 800.0);
        assert_eq!(viewport.logical_height(), 600.0);
        assert_eq!(viewport.context().scale(), 2.0);
    }

    #[test]
    fn missing_ratio_defaults_to_one() {
        let mut canvas = canvas(None);
        let viewport = Viewport::initialize(&mut canvas).unwrap();
        assert_eq!(viewport.device_pixel_ratio(), 1.0);
        assert_eq!(canvas.backing_size(), (800, 600));
    }

    #[test]
    fn invalid_ratio_defaults_to_one() {
        for ratio in [0.0, -2.0, f32::NAN] {
            let mut canvas = canvas(Some(ratio));
            let viewport = Viewport::initialize(&mut canvas).unwrap();
            assert_eq!(viewport.device_pixel_ratio(), 1.0);
        }
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut canvas = canvas(Some(2.0));
        let _viewport = Viewport::initialize(&mut canvas).unwrap();

        // Pretend the page changed the canvas; a rejected call must not touch it.
        canvas.resize_backing_store(1, 1);
        let again = Viewport::initialize(&mut canvas);
        assert!(matches!(again, Err(ViewportError::AlreadyInitialized)));
        assert_eq!(canvas.backing_size(), (1, 1));
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let mut canvas =
            OffscreenCanvas::new(0.0, 600.0, None, ShapeBatch::new(Color::rgb(0.0, 0.0, 0.0)));
        assert!(matches!(
            Viewport::initialize(&mut canvas),
            Err(ViewportError::EmptyCanvas { .. })
        ));
    }

    #[test]
    fn mapper_uses_logical_size() {
        let mut canvas = canvas(Some(3.0));
        let viewport = Viewport::initialize(&mut canvas).unwrap();
        let mapper = viewport.mapper();
        assert_eq!(mapper.logical_width(), 800.0);
        assert_eq!(mapper.logical_height(), 600.0);
    }
}
