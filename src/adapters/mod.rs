//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the analytics engines to external systems:
//! - `storage` - Scorecard and simulation-log persistence (in-memory)
//! - `fx` - FX rate sources (static table, failover chain)
//! - `telemetry` - Tracing subscriber initialization

pub mod fx;
pub mod storage;
pub mod telemetry;

pub use fx::{FailoverFxRates, StaticFxRates};
pub use storage::{InMemoryScorecardStore, InMemorySimulationLog};
pub use telemetry::init_tracing;
