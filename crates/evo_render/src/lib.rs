//! Evo Render System
//!
//! Drawing for the viewer: a small 2D context abstraction, the agent/resource shapes,
//! the viewport manager, and a winit + wgpu backend that presents the shapes.

pub mod backend;
pub mod batch;
pub mod context;
pub mod shapes;
pub mod viewport;
pub mod window;

pub use wgpu;
pub use winit;

pub use batch::{ShapeBatch, Vertex};
pub use context::{Color, DrawingContext};
pub use shapes::{draw_agent, draw_resource, RenderStyle};
pub use viewport::{CanvasSurface, OffscreenCanvas, Viewport, ViewportError};
