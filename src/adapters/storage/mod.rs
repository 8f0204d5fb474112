//! Storage Adapters
//!
//! Implementations of the persistence ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryScorecardStore** - `ScorecardWriter` backed by memory
//! - **InMemorySimulationLog** - `SimulationLogWriter` backed by memory

mod in_memory_scorecards;
mod in_memory_simulation_log;

pub use in_memory_scorecards::InMemoryScorecardStore;
pub use in_memory_simulation_log::InMemorySimulationLog;
