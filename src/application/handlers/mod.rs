//! Application handlers.
//!
//! Command handlers that orchestrate the analytics engines and ports.

pub mod ranking;
pub mod simulation;

pub use ranking::{RunScorecardCommand, RunScorecardHandler, RunScorecardResult, WeightSpec};
pub use simulation::{
    RunSimulationHandler, RunSimulationResult, SimulationCommand, SimulationOutcome,
    DEFAULT_COST_CURRENCIES,
};
