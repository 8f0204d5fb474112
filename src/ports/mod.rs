//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the analytics engines and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ScorecardWriter` - Stores ranking runs per reporting period
//! - `SimulationLogWriter` - Stores Monte Carlo run summaries
//!
//! ## Market Data Ports
//!
//! - `FxRateSource` - Spot FX rates anchoring currency simulations

mod fx_rate_source;
mod scorecard_writer;
mod simulation_log;

pub use fx_rate_source::{FxQuote, FxRateSource};
pub use scorecard_writer::{Scorecard, ScorecardWriter};
pub use simulation_log::{ScenarioType, SimulationLogWriter, SimulationRecord};
