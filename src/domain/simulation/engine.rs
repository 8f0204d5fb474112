//! Monte Carlo engine - seeds, limits, and dispatch to the process simulators.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::{DataQualityFlag, DomainError};

use super::{
    simulate_cost_scenario, simulate_disruption, simulate_gbm_parallel, simulate_lead_time,
    CostScenarioParams, DisruptionContext, DisruptionResult, DisruptionScenario, GbmParams,
    LeadTimeSimulation, SimulationResult,
};

/// Path and horizon defaults plus the hard caps applied to requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationLimits {
    pub default_paths: usize,
    pub default_horizon: usize,
    pub max_paths: usize,
    pub max_horizon: usize,
}

impl Default for SimulationLimits {
    fn default() -> Self {
        Self {
            default_paths: 10_000,
            default_horizon: 90,
            max_paths: 100_000,
            max_horizon: 365,
        }
    }
}

impl SimulationLimits {
    /// Resolves a requested path count, capping at `max_paths`.
    pub fn paths(&self, requested: Option<usize>) -> (usize, Option<DataQualityFlag>) {
        let requested = requested.unwrap_or(self.default_paths);
        if requested > self.max_paths {
            warn!(requested, cap = self.max_paths, "Path count capped");
            return (
                self.max_paths,
                Some(DataQualityFlag::PathCountCapped {
                    requested,
                    cap: self.max_paths,
                }),
            );
        }
        (requested, None)
    }

    /// Resolves a requested horizon, capping at `max_horizon`.
    pub fn horizon(&self, requested: Option<usize>) -> (usize, Option<DataQualityFlag>) {
        let requested = requested.unwrap_or(self.default_horizon);
        if requested > self.max_horizon {
            warn!(requested, cap = self.max_horizon, "Horizon capped");
            return (
                self.max_horizon,
                Some(DataQualityFlag::HorizonCapped {
                    requested,
                    cap: self.max_horizon,
                }),
            );
        }
        (requested, None)
    }
}

/// Runs simulations under shared limits.
///
/// With a fixed seed every run is reproducible; without one, each call draws
/// a fresh seed and records it in the result so the run can be replayed.
#[derive(Debug, Clone, Default)]
pub struct MonteCarloEngine {
    limits: SimulationLimits,
    seed: Option<u64>,
}

impl MonteCarloEngine {
    pub fn new(limits: SimulationLimits) -> Self {
        Self { limits, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn limits(&self) -> &SimulationLimits {
        &self.limits
    }

    pub fn fixed_seed(&self) -> Option<u64> {
        self.seed
    }

    fn next_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().next_u64())
    }

    /// GBM simulation of an FX rate from `anchor`.
    pub fn fx(
        &self,
        anchor: f64,
        annual_volatility: f64,
        n_paths: Option<usize>,
        horizon_steps: Option<usize>,
    ) -> Result<SimulationResult, DomainError> {
        let (n_paths, path_flag) = self.limits.paths(n_paths);
        let (horizon_steps, horizon_flag) = self.limits.horizon(horizon_steps);
        let seed = self.next_seed();

        let params = GbmParams::new(anchor, annual_volatility, horizon_steps, n_paths);
        let result = simulate_gbm_parallel(&params, seed)?.with_flags(path_flag.into_iter().chain(horizon_flag));

        debug!(anchor, annual_volatility, n_paths, horizon_steps, seed, "FX simulation complete");
        Ok(result)
    }

    /// Log-normal lead-time simulation from historical deliveries.
    pub fn lead_time(
        &self,
        historical: &[f64],
        n_paths: Option<usize>,
    ) -> Result<LeadTimeSimulation, DomainError> {
        let (n_paths, path_flag) = self.limits.paths(n_paths);
        let seed = self.next_seed();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut run = simulate_lead_time(historical, n_paths, &mut rng)?;
        run.result = run.result.with_seed(seed).with_flags(path_flag);

        debug!(
            historical = historical.len(),
            n_paths,
            seed,
            fallback = run.fit.fallback_used,
            "Lead-time simulation complete"
        );
        Ok(run)
    }

    /// Disruption scenario against a baseline spend.
    pub fn disruption(
        &self,
        baseline_spend: f64,
        scenario: DisruptionScenario,
        context: DisruptionContext,
        n_paths: Option<usize>,
    ) -> Result<DisruptionResult, DomainError> {
        let (n_paths, path_flag) = self.limits.paths(n_paths);
        let seed = self.next_seed();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut result = simulate_disruption(baseline_spend, scenario, context, n_paths, &mut rng)?;
        result.seed = Some(seed);
        result.flags.extend(path_flag);
        Ok(result)
    }

    /// Combined FX and commodity cost scenario.
    pub fn cost_scenario(
        &self,
        params: &CostScenarioParams,
        n_paths: Option<usize>,
    ) -> Result<SimulationResult, DomainError> {
        let (n_paths, path_flag) = self.limits.paths(n_paths);
        let (horizon_steps, horizon_flag) = self.limits.horizon(Some(params.horizon_steps));
        let params = params.clone().with_horizon(horizon_steps);
        let seed = self.next_seed();
        let mut rng = StdRng::seed_from_u64(seed);

        let result = simulate_cost_scenario(&params, n_paths, &mut rng)?
            .with_seed(seed)
            .with_flags(path_flag.into_iter().chain(horizon_flag));

        debug!(
            baseline = params.baseline_spend,
            currencies = params.currencies.len(),
            n_paths,
            seed,
            "Cost scenario complete"
        );
        Ok(result)
    }
}
