//! Simulation handlers.

mod run_simulation;

pub use run_simulation::{
    RunSimulationHandler, RunSimulationResult, SimulationCommand, SimulationOutcome,
    DEFAULT_COST_CURRENCIES,
};
