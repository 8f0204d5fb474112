//! Simulation Module - Monte Carlo propagation of procurement risk.
//!
//! # Components
//!
//! - `simulate_gbm` / `simulate_gbm_parallel` - Zero-drift GBM for FX rates
//! - `simulate_lead_time` - Log-normal fit to historical delivery times
//! - `simulate_shock` - Multiplicative normal and FX shocks on a baseline
//! - `simulate_disruption` / `simulate_cost_scenario` - Named scenario wrappers
//! - `DistributionSummary` - Mean, spread, percentiles, VaR and CVaR
//! - `MonteCarloEngine` - Seeds, path/horizon limits, dispatch
//!
//! Every simulator takes an explicit generator; there is no global RNG.

mod cost_scenario;
mod disruption;
mod engine;
mod gbm;
mod lead_time;
mod result;
mod shock;
mod summary;

pub use cost_scenario::{
    simulate_cost_scenario, CostScenarioParams, CurrencyExposure, COMMODITY_SHOCK,
    DEFAULT_COST_HORIZON_STEPS,
};
pub use disruption::{simulate_disruption, DisruptionContext, DisruptionResult, DisruptionScenario};
pub use engine::{MonteCarloEngine, SimulationLimits};
pub use gbm::{
    horizon_multiplier, simulate_gbm, simulate_gbm_parallel, GbmParams, GBM_BLOCK_SIZE,
    TRADING_DAYS_PER_YEAR,
};
pub use lead_time::{
    simulate_lead_time, LeadTimeFit, LeadTimeSimulation, LEAD_TIME_FALLBACK_DAYS,
    MIN_HISTORY_SAMPLES,
};
pub use result::{ProcessFamily, SimulationResult};
pub use shock::{simulate_shock, NormalShock, ShockSource};
pub use summary::{percentile, DistributionSummary};
