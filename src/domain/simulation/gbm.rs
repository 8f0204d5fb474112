//! Zero-drift geometric Brownian motion for FX rates and other
//! strictly positive quantities.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

use super::{ProcessFamily, SimulationResult};

/// Trading days per year used to scale annual volatility to one step.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Paths per independently seeded block in the parallel variant.
pub const GBM_BLOCK_SIZE: usize = 4096;

/// Inputs to a GBM run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GbmParams {
    /// Starting value; must be positive.
    pub anchor: f64,
    /// Annualized volatility, e.g. 0.10 for 10%.
    pub annual_volatility: f64,
    pub horizon_steps: usize,
    pub n_paths: usize,
}

impl GbmParams {
    pub fn new(anchor: f64, annual_volatility: f64, horizon_steps: usize, n_paths: usize) -> Self {
        Self {
            anchor,
            annual_volatility,
            horizon_steps,
            n_paths,
        }
    }

    /// Per-step volatility.
    pub fn step_volatility(&self) -> f64 {
        self.annual_volatility / TRADING_DAYS_PER_YEAR.sqrt()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.anchor.is_finite() || self.anchor <= 0.0 {
            return Err(DomainError::invalid_parameter("anchor", self.anchor));
        }
        if !self.annual_volatility.is_finite() || self.annual_volatility < 0.0 {
            return Err(DomainError::invalid_parameter(
                "annual_volatility",
                self.annual_volatility,
            ));
        }
        if self.n_paths == 0 {
            return Err(DomainError::invalid_parameter("n_paths", self.n_paths));
        }
        Ok(())
    }
}

/// Simulates `n_paths` GBM paths on one generator and summarizes the
/// terminal values against the anchor.
pub fn simulate_gbm<R: Rng + ?Sized>(
    params: &GbmParams,
    rng: &mut R,
) -> Result<SimulationResult, DomainError> {
    params.validate()?;
    let sigma = params.step_volatility();
    let terminal = (0..params.n_paths)
        .map(|_| terminal_value(params.anchor, sigma, params.horizon_steps, rng))
        .collect();
    SimulationResult::from_values(
        ProcessFamily::Gbm,
        params.anchor,
        params.horizon_steps,
        terminal,
        Vec::new(),
    )
}

/// Parallel GBM over blocks of `GBM_BLOCK_SIZE` paths.
///
/// Block `b` draws from `StdRng::seed_from_u64(seed + b)`, so output depends
/// only on `seed`, never on thread count. With `n_paths <= GBM_BLOCK_SIZE`
/// it matches [`simulate_gbm`] driven by `StdRng::seed_from_u64(seed)`.
pub fn simulate_gbm_parallel(params: &GbmParams, seed: u64) -> Result<SimulationResult, DomainError> {
    params.validate()?;
    let sigma = params.step_volatility();
    let mut terminal = vec![0.0; params.n_paths];
    terminal
        .par_chunks_mut(GBM_BLOCK_SIZE)
        .enumerate()
        .for_each(|(block, chunk)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(block as u64));
            for value in chunk.iter_mut() {
                *value = terminal_value(params.anchor, sigma, params.horizon_steps, &mut rng);
            }
        });

    Ok(SimulationResult::from_values(
        ProcessFamily::Gbm,
        params.anchor,
        params.horizon_steps,
        terminal,
        Vec::new(),
    )?
    .with_seed(seed))
}

/// One-shot GBM multiplier over `horizon_steps`, drawn from a single normal.
pub fn horizon_multiplier<R: Rng + ?Sized>(sigma_step: f64, horizon_steps: usize, rng: &mut R) -> f64 {
    let h = horizon_steps as f64;
    let z: f64 = rng.sample(StandardNormal);
    (-0.5 * sigma_step * sigma_step * h + sigma_step * h.sqrt() * z).exp()
}

fn terminal_value<R: Rng + ?Sized>(anchor: f64, sigma: f64, steps: usize, rng: &mut R) -> f64 {
    let drift = -0.5 * sigma * sigma;
    let mut log_return = 0.0;
    for _ in 0..steps {
        let z: f64 = rng.sample(StandardNormal);
        log_return += drift + sigma * z;
    }
    (anchor * log_return.exp()).max(f64::MIN_POSITIVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn zero_horizon_returns_anchor() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = simulate_gbm(&GbmParams::new(100.0, 0.2, 0, 500), &mut rng).unwrap();
        assert!(result.terminal_values.iter().all(|v| *v == 100.0));
        assert_eq!(result.summary.std_dev, 0.0);
    }

    #[test]
    fn zero_volatility_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = simulate_gbm(&GbmParams::new(7.25, 0.0, 90, 100), &mut rng).unwrap();
        assert!(result.terminal_values.iter().all(|v| *v == 7.25));
    }

    #[test]
    fn terminal_values_strictly_positive_under_extreme_volatility() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = simulate_gbm(&GbmParams::new(1.0, 25.0, 365, 200), &mut rng).unwrap();
        assert!(result.terminal_values.iter().all(|v| *v > 0.0));
    }

    #[test]
    fn mean_stays_near_anchor() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = simulate_gbm(&GbmParams::new(0.92, 0.08, 90, 20_000), &mut rng).unwrap();
        // Zero drift: E[S_T] = S_0
        assert!((result.summary.mean - 0.92).abs() < 0.01);
        assert!(result.summary.p5 < 0.92 && result.summary.p95 > 0.92);
    }

    #[test]
    fn same_seed_same_paths() {
        let params = GbmParams::new(1580.0, 0.40, 30, 300);
        let a = simulate_gbm(&params, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = simulate_gbm(&params, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.terminal_values, b.terminal_values);
    }

    #[test]
    fn parallel_matches_sequential_within_one_block() {
        let params = GbmParams::new(149.5, 0.12, 20, 1000);
        let sequential = simulate_gbm(&params, &mut StdRng::seed_from_u64(42)).unwrap();
        let parallel = simulate_gbm_parallel(&params, 42).unwrap();
        assert_eq!(sequential.terminal_values, parallel.terminal_values);
        assert_eq!(parallel.seed, Some(42));
    }

    #[test]
    fn parallel_is_reproducible_across_blocks() {
        let params = GbmParams::new(1.0, 0.1, 5, GBM_BLOCK_SIZE * 2 + 17);
        let a = simulate_gbm_parallel(&params, 3).unwrap();
        let b = simulate_gbm_parallel(&params, 3).unwrap();
        assert_eq!(a.terminal_values, b.terminal_values);
        assert_eq!(a.n_paths, GBM_BLOCK_SIZE * 2 + 17);
        // Blocks use distinct streams
        assert_ne!(a.terminal_values[0], a.terminal_values[GBM_BLOCK_SIZE]);
    }

    #[test]
    fn invalid_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for params in [
            GbmParams::new(0.0, 0.1, 10, 10),
            GbmParams::new(-1.0, 0.1, 10, 10),
            GbmParams::new(1.0, -0.1, 10, 10),
            GbmParams::new(1.0, f64::NAN, 10, 10),
            GbmParams::new(1.0, 0.1, 10, 0),
        ] {
            let err = simulate_gbm(&params, &mut rng).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidSimulationParameter);
        }
    }

    #[test]
    fn horizon_multiplier_is_one_without_volatility() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(horizon_multiplier(0.0, 90, &mut rng), 1.0);
    }
}
