//! Lead-time simulation from a log-normal fit of historical deliveries.

use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::{DataQualityFlag, DomainError, ErrorCode};

use super::{ProcessFamily, SimulationResult};

/// Generic lead times (days) used when history is too thin to fit.
pub const LEAD_TIME_FALLBACK_DAYS: [f64; 10] =
    [30.0, 45.0, 60.0, 35.0, 50.0, 40.0, 55.0, 70.0, 25.0, 65.0];

/// Minimum number of historical samples needed for a fit.
pub const MIN_HISTORY_SAMPLES: usize = 5;

/// Parameters of the fitted log-normal plus the history behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeFit {
    /// Mean of ln(lead time).
    pub mu: f64,
    /// Population std-dev of ln(lead time).
    pub sigma: f64,
    pub historical_count: usize,
    pub historical_mean: f64,
    pub historical_std: f64,
    pub fallback_used: bool,
}

impl LeadTimeFit {
    /// Fits mu and sigma to `samples`, flooring each at one day and
    /// substituting the fallback set when fewer than five remain.
    pub fn fit(samples: &[f64]) -> Result<(Self, Vec<DataQualityFlag>), DomainError> {
        if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
            return Err(DomainError::new(
                ErrorCode::NonFiniteValue,
                "Historical lead times must be finite",
            )
            .with_detail("value", bad.to_string()));
        }

        let mut flags = Vec::new();
        let floored = samples.iter().filter(|v| **v < 1.0).count();
        if floored > 0 {
            warn!(count = floored, "Lead-time samples below one day floored");
            flags.push(DataQualityFlag::FlooredSamples { count: floored });
        }

        let mut history: Vec<f64> = samples.iter().map(|v| v.max(1.0)).collect();
        let fallback_used = history.len() < MIN_HISTORY_SAMPLES;
        if fallback_used {
            warn!(
                observed = history.len(),
                required = MIN_HISTORY_SAMPLES,
                "Insufficient lead-time history; using fallback set"
            );
            flags.push(DataQualityFlag::InsufficientHistory {
                observed: history.len(),
                required: MIN_HISTORY_SAMPLES,
            });
            history = LEAD_TIME_FALLBACK_DAYS.to_vec();
        }

        let logs: Vec<f64> = history.iter().map(|v| v.ln()).collect();
        let (mu, sigma) = mean_and_std(&logs);
        let (historical_mean, historical_std) = mean_and_std(&history);

        Ok((
            Self {
                mu,
                sigma,
                historical_count: history.len(),
                historical_mean,
                historical_std,
                fallback_used,
            },
            flags,
        ))
    }
}

/// A lead-time run: the fit and the simulated distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeSimulation {
    pub fit: LeadTimeFit,
    pub result: SimulationResult,
}

/// Draws `n_sims` lead times from a log-normal fitted to `historical`.
///
/// VaR and CVaR are measured against the historical mean.
pub fn simulate_lead_time<R: Rng + ?Sized>(
    historical: &[f64],
    n_sims: usize,
    rng: &mut R,
) -> Result<LeadTimeSimulation, DomainError> {
    if n_sims == 0 {
        return Err(DomainError::invalid_parameter("n_sims", n_sims));
    }
    let (fit, flags) = LeadTimeFit::fit(historical)?;
    let dist = LogNormal::new(fit.mu, fit.sigma)
        .map_err(|e| DomainError::invalid_parameter("sigma", e))?;
    let draws: Vec<f64> = (0..n_sims).map(|_| dist.sample(rng)).collect();

    let result =
        SimulationResult::from_values(ProcessFamily::LogNormalFit, fit.historical_mean, 0, draws, flags)?;
    Ok(LeadTimeSimulation { fit, result })
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
