//! Multiplicative scenario shocks applied to a baseline value.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{DataQualityFlag, DomainError};

use super::gbm::{horizon_multiplier, TRADING_DAYS_PER_YEAR};
use super::{ProcessFamily, SimulationResult};

/// Normally distributed draw clipped from below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalShock {
    pub mean: f64,
    pub std_dev: f64,
    pub floor: f64,
}

impl NormalShock {
    pub fn new(mean: f64, std_dev: f64, floor: f64) -> Self {
        Self {
            mean,
            std_dev,
            floor,
        }
    }

    pub(crate) fn distribution(&self) -> Result<Normal<f64>, DomainError> {
        if !self.floor.is_finite() {
            return Err(DomainError::invalid_parameter("floor", self.floor));
        }
        if !self.mean.is_finite() {
            return Err(DomainError::invalid_parameter("mean", self.mean));
        }
        // rand_distr only rejects a non-finite std_dev, not a negative one.
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(DomainError::invalid_parameter("std_dev", self.std_dev));
        }
        Normal::new(self.mean, self.std_dev)
            .map_err(|_| DomainError::invalid_parameter("std_dev", self.std_dev))
    }

    /// Draws `n` clipped values; returns them with the number clipped.
    pub(crate) fn draw_n<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<(Vec<f64>, usize), DomainError> {
        let dist = self.distribution()?;
        let mut clipped = 0;
        let draws = (0..n)
            .map(|_| {
                let x = dist.sample(rng);
                if x < self.floor {
                    clipped += 1;
                    self.floor
                } else {
                    x
                }
            })
            .collect();
        Ok((draws, clipped))
    }
}

/// One multiplicative factor in a shock scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShockSource {
    Normal { label: String, shock: NormalShock },
    /// One-shot GBM move of a currency over the horizon.
    Fx {
        label: String,
        annual_volatility: f64,
        horizon_steps: usize,
    },
}

impl ShockSource {
    pub fn label(&self) -> &str {
        match self {
            ShockSource::Normal { label, .. } | ShockSource::Fx { label, .. } => label,
        }
    }
}

/// Multiplies `baseline` by one draw from every source, `n_sims` times.
///
/// Sources combine multiplicatively. VaR and CVaR are against `baseline`.
pub fn simulate_shock<R: Rng + ?Sized>(
    baseline: f64,
    sources: &[ShockSource],
    n_sims: usize,
    rng: &mut R,
) -> Result<SimulationResult, DomainError> {
    if !baseline.is_finite() {
        return Err(DomainError::invalid_parameter("baseline", baseline));
    }
    if n_sims == 0 {
        return Err(DomainError::invalid_parameter("n_sims", n_sims));
    }

    let mut totals = vec![baseline; n_sims];
    let mut flags = Vec::new();
    let mut horizon = 0;

    for source in sources {
        match source {
            ShockSource::Normal { label, shock } => {
                let (draws, clipped) = shock.draw_n(n_sims, rng)?;
                for (total, draw) in totals.iter_mut().zip(draws) {
                    *total *= draw;
                }
                if clipped > 0 {
                    warn!(source = %label, count = clipped, "Shock draws clipped to floor");
                    flags.push(DataQualityFlag::ClippedDraws {
                        source: label.clone(),
                        count: clipped,
                    });
                }
            }
            ShockSource::Fx {
                label,
                annual_volatility,
                horizon_steps,
            } => {
                if !annual_volatility.is_finite() || *annual_volatility < 0.0 {
                    return Err(DomainError::invalid_parameter(
                        format!("{}.annual_volatility", label),
                        annual_volatility,
                    ));
                }
                let sigma = annual_volatility / TRADING_DAYS_PER_YEAR.sqrt();
                for total in totals.iter_mut() {
                    *total *= horizon_multiplier(sigma, *horizon_steps, rng);
                }
                horizon = horizon.max(*horizon_steps);
            }
        }
    }

    SimulationResult::from_values(ProcessFamily::NormalShock, baseline, horizon, totals, flags)
}
