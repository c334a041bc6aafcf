//! Evo Runtime
//!
//! The render/evaluation loop and the native host that drives it.
//!
//! [`controller::LoopController`] owns the cycle: one snapshot per frame, generation
//! reports at boundaries, then step, draw and reschedule. The host only has to call
//! [`controller::LoopController::run_cycle`] whenever the scheduled frame arrives.

pub mod app;
pub mod controller;
pub mod report;
pub mod scheduler;

pub use controller::{CycleOutcome, LoopController, LoopError, LoopState};
pub use report::{GenerationReport, ReportSink, TracingSink};
pub use scheduler::{FrameScheduler, ManualScheduler, WindowScheduler};
