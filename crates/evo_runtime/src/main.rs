//! Evo Viewer
//!
//! Boots the simulation and opens the viewer window

use anyhow::{Context, Result};
use evo_runtime::app::ViewerApp;
use evo_services::settings::SimulationSettings;
use evo_sim::{Simulation, SimulationConfig};
use std::path::PathBuf;
use winit::event_loop::ControlFlow;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Evo Viewer v{}", evo_core::VERSION);
    tracing::info!("Initializing services...");
    let settings = evo_services::init_services(std::env::args_os().nth(1).map(PathBuf::from))
        .context("failed to load settings")?;

    let engine = Simulation::random(
        simulation_config(&settings.simulation),
        settings.simulation.seed,
    );

    let event_loop =
        evo_render::window::create_event_loop().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ViewerApp::new(settings, engine);
    event_loop.run_app(&mut app).context("event loop failed")?;
    app.finish().context("viewer stopped with an error")?;

    tracing::info!("Viewer closed");
    Ok(())
}

fn simulation_config(settings: &SimulationSettings) -> SimulationConfig {
    SimulationConfig {
        animals: settings.animals,
        foods: settings.foods,
        steps_per_generation: settings.steps_per_generation,
        mutation_chance: settings.mutation_chance,
        mutation_coeff: settings.mutation_coeff,
    }
}
