//! Frame scheduling
//!
//! The controller never loops by itself; it asks the host for another frame and
//! returns. In a window that means a redraw request, in tests a counter.

use std::sync::Arc;
use winit::window::Window;

pub trait FrameScheduler {
    /// Ask the host to run one more cycle later. Must not block.
    fn schedule_next(&mut self);
}

/// Schedules cycles through winit redraw requests.
pub struct WindowScheduler {
    window: Arc<Window>,
}

impl WindowScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl FrameScheduler for WindowScheduler {
    fn schedule_next(&mut self) {
        self.window.request_redraw();
    }
}

/// Records requests so a driver can run cycles synchronously.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Total requests seen.
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_next(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_requests_are_consumed_once() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.take_pending());

        scheduler.schedule_next();
        scheduler.schedule_next();
        assert!(scheduler.take_pending());
        assert!(!scheduler.take_pending());
        assert_eq!(scheduler.requests(), 2);
    }
}
