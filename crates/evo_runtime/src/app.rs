//! Native host
//!
//! winit application that owns the window, the GPU presenter and the loop
//! controller. Every `RedrawRequested` runs exactly one cycle; the controller asks
//! for the next redraw itself.

use crate::controller::{LoopController, LoopError};
use crate::report::TracingSink;
use crate::scheduler::WindowScheduler;
use evo_core::SimulationEngine;
use evo_metrics::{FrameTimer, RingBuffer};
use evo_render::backend::{GpuPresenter, RenderError};
use evo_render::window::{window_attributes, WindowCanvas, WindowConfig};
use evo_render::{Color, RenderStyle, ShapeBatch};
use evo_services::settings::{RenderSettings, Settings};
use std::sync::Arc;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

/// Frames averaged for the FPS readout.
const FRAME_WINDOW: usize = 120;
/// Generations averaged for the fitness trend.
const TREND_WINDOW: usize = 10;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("renderer failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Loop(#[from] LoopError),
}

type WindowController<E> = LoopController<E, ShapeBatch, WindowScheduler, TracingSink>;

pub struct ViewerApp<E> {
    settings: Settings,
    engine: Option<E>,
    window: Option<Arc<Window>>,
    controller: Option<WindowController<E>>,
    presenter: Option<GpuPresenter>,
    frame_timer: FrameTimer,
    fitness_trend: RingBuffer<f32>,
    failure: Option<HostError>,
}

impl<E: SimulationEngine> ViewerApp<E> {
    pub fn new(settings: Settings, engine: E) -> Self {
        Self {
            settings,
            engine: Some(engine),
            window: None,
            controller: None,
            presenter: None,
            frame_timer: FrameTimer::new(FRAME_WINDOW),
            fitness_trend: RingBuffer::new(TREND_WINDOW),
            failure: None,
        }
    }

    /// Outcome once the event loop has returned.
    pub fn finish(self) -> Result<(), HostError> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn launch(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HostError> {
        let Some(engine) = self.engine.take() else {
            return Ok(());
        };

        let config = WindowConfig {
            title: self.settings.window.title.clone(),
            width: self.settings.window.width,
            height: self.settings.window.height,
        };
        let window = Arc::new(event_loop.create_window(window_attributes(&config))?);
        self.window = Some(Arc::clone(&window));

        let [r, g, b] = self.settings.render.background;
        let mut canvas = WindowCanvas::new(Arc::clone(&window), Color::rgb(r, g, b));

        let mut controller = LoopController::new(
            engine,
            WindowScheduler::new(Arc::clone(&window)),
            TracingSink,
            render_style(&self.settings.render),
        );
        controller.start(&mut canvas)?;

        let backing = canvas.backing_size();
        tracing::info!("Initializing renderer ({}x{})...", backing.width, backing.height);
        let presenter = pollster::block_on(GpuPresenter::new(
            Arc::clone(&window),
            backing.width,
            backing.height,
        ))?;

        self.controller = Some(controller);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), HostError> {
        let (Some(controller), Some(presenter)) = (self.controller.as_mut(), self.presenter.as_mut())
        else {
            return Ok(());
        };

        self.frame_timer.begin();
        let outcome = controller.run_cycle()?;
        if let Some(viewport) = controller.viewport() {
            presenter.present(viewport.context())?;
        }
        self.frame_timer.end();

        if let Some(report) = &outcome.report {
            if let Ok(summary) = &report.summary {
                self.fitness_trend.push(summary.average);
            }
            tracing::info!(
                generation = report.generation,
                fps = self.frame_timer.fps(),
                frame_ms = self.frame_timer.frame_time_ms(),
                fitness_trend = self.fitness_trend.average(),
                "frame stats"
            );
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: HostError) {
        tracing::error!("viewer stopped: {err}");
        self.failure = Some(err);
        event_loop.exit();
    }
}

impl<E: SimulationEngine> ApplicationHandler for ViewerApp<E> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.launch(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, shutting down...");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }
}

pub fn render_style(settings: &RenderSettings) -> RenderStyle {
    RenderStyle {
        agent_size: settings.agent_size,
        food_radius: settings.food_radius,
    }
}
