//! Render/evaluation loop controller
//!
//! One cycle, strictly in this order:
//!
//! 1. clear the drawing surface
//! 2. fetch one world snapshot
//! 3. on the last step of a generation, summarize that snapshot and emit a report
//! 4. advance the engine
//! 5. draw the foods, then the animals, of the snapshot from step 2
//! 6. schedule the next cycle
//!
//! The frame therefore always shows the world as it was *before* the step of the
//! same cycle. Statistics and drawing share the one snapshot.
//!
//! Engine faults are fatal: the controller halts and never reschedules.

use crate::report::{GenerationReport, ReportSink};
use crate::scheduler::FrameScheduler;
use evo_core::{stats, EngineError, SimulationEngine, WorldSnapshot};
use evo_render::{
    draw_agent, draw_resource, CanvasSurface, DrawingContext, RenderStyle, Viewport,
    ViewportError,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, no frame run yet.
    Idle,
    Cycling,
    /// Stopped after an engine fault.
    Halted,
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("render loop already started")]
    AlreadyStarted,

    #[error("render loop has not been started")]
    NotStarted,

    #[error("render loop halted after an engine fault")]
    Halted,

    #[error("viewport setup failed: {0}")]
    Viewport(#[from] ViewportError),

    #[error("simulation engine fault: {0}")]
    Engine(#[from] EngineError),
}

/// What one cycle did. `snapshot` is the world that was both summarized (when
/// `report` is set) and drawn.
#[derive(Debug)]
pub struct CycleOutcome {
    pub frame: u64,
    pub snapshot: WorldSnapshot,
    pub report: Option<GenerationReport>,
}

pub struct LoopController<E, C, S, R> {
    engine: E,
    scheduler: S,
    sink: R,
    style: RenderStyle,
    viewport: Option<Viewport<C>>,
    state: LoopState,
    frames: u64,
}

impl<E, C, S, R> LoopController<E, C, S, R>
where
    E: SimulationEngine,
    C: DrawingContext,
    S: FrameScheduler,
    R: ReportSink,
{
    pub fn new(engine: E, scheduler: S, sink: R, style: RenderStyle) -> Self {
        Self {
            engine,
            scheduler,
            sink,
            style,
            viewport: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Set up the viewport on `canvas` and schedule the first cycle.
    pub fn start<K>(&mut self, canvas: &mut K) -> Result<(), LoopError>
    where
        K: CanvasSurface<Context = C>,
    {
        if self.state != LoopState::Idle {
            return Err(LoopError::AlreadyStarted);
        }

        let viewport = Viewport::initialize(canvas)?;
        tracing::info!(
            width = viewport.logical_width(),
            height = viewport.logical_height(),
            ratio = viewport.device_pixel_ratio(),
            "render loop started"
        );

        self.viewport = Some(viewport);
        self.state = LoopState::Cycling;
        self.scheduler.schedule_next();
        Ok(())
    }

    /// Run one cycle. Call once per scheduled frame.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, LoopError> {
        match self.state {
            LoopState::Idle => return Err(LoopError::NotStarted),
            LoopState::Halted => return Err(LoopError::Halted),
            LoopState::Cycling => {}
        }

        let result = self.cycle();
        if let Err(LoopError::Engine(err)) = &result {
            tracing::error!(frame = self.frames, "engine fault, halting render loop: {err}");
            self.state = LoopState::Halted;
        }
        result
    }

    fn cycle(&mut self) -> Result<CycleOutcome, LoopError> {
        let viewport = self.viewport.as_mut().ok_or(LoopError::NotStarted)?;
        viewport.context_mut().clear();

        let world = self.engine.world()?;

        let report = if self.engine.is_last_step_of_generation() {
            let summary = stats::summarize(&world);
            let generation = self.engine.generation_index();
            let report = GenerationReport {
                generation,
                summary,
            };
            self.sink.emit(&report);
            Some(report)
        } else {
            None
        };

        self.engine.step()?;

        let mapper = viewport.mapper();
        let food_radius = self.style.food_radius_px(mapper.logical_width());
        let agent_size = self.style.agent_size_px(mapper.logical_width());
        let ctx = viewport.context_mut();

        for food in world.foods() {
            let p = mapper.to_pixels(food.position());
            draw_resource(ctx, p.x, p.y, food_radius);
        }

        for animal in world.animals() {
            let p = mapper.to_pixels(animal.position());
            draw_agent(ctx, p.x, p.y, agent_size, animal.rotation);
        }

        self.scheduler.schedule_next();

        let frame = self.frames;
        self.frames += 1;
        tracing::trace!(frame, animals = world.animals().len(), "cycle complete");

        Ok(CycleOutcome {
            frame,
            snapshot: world,
            report,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Cycles completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// `None` until started.
    pub fn viewport(&self) -> Option<&Viewport<C>> {
        self.viewport.as_ref()
    }
}
