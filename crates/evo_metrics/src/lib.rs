//! Evo Metrics - frame timing and rolling windows for the viewer
//!
//! Everything here compiles down to no-op stubs unless the `metrics` feature is
//! enabled, so the render loop can be instrumented unconditionally.
//!
//! # Usage
//!
//! ```ignore
//! use evo_metrics::{FrameTimer, RingBuffer};
//!
//! let mut timer = FrameTimer::new(120);
//! timer.begin();
//! // ... run one cycle ...
//! timer.end();
//!
//! let mut fitness = RingBuffer::<f32>::new(10);
//! fitness.push(3.5);
//! println!("FPS: {:.1}, fitness trend: {:.2}", timer.fps(), fitness.average());
//! ```

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod ring_buffer;

#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(_capacity: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn frames(&self) -> u64 { 0 }
    pub fn fps(&self) -> f64 { 0.0 }
    pub fn frame_time_ms(&self) -> f64 { 0.0 }
}

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _value: T) {}
    pub fn len(&self) -> usize { 0 }
    pub fn is_empty(&self) -> bool { true }
    pub fn average(&self) -> T where T: Default { T::default() }
}
