//! Distribution statistics over simulated outcomes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Scalar summary of a sample of simulated outcomes.
///
/// Percentiles use linear interpolation between closest ranks. Tail risk is
/// expressed relative to an anchor (spot rate, baseline spend, historical
/// mean): `var_95 = p95 - anchor`, `cvar_95 = mean(x >= p95) - anchor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p25: f64,
    pub p75: f64,
    pub p95: f64,
    pub var_95: f64,
    pub cvar_95: f64,
}

impl DistributionSummary {
    /// Summarizes `samples` against `anchor`.
    ///
    /// # Errors
    /// - `InvalidSimulationParameter` if `samples` is empty
    /// - `NonFiniteValue` if any sample or the anchor is NaN or infinite
    pub fn from_samples(samples: &[f64], anchor: f64) -> Result<Self, DomainError> {
        if samples.is_empty() {
            return Err(DomainError::invalid_parameter("samples", "empty"));
        }
        if !anchor.is_finite() {
            return Err(non_finite("anchor", anchor));
        }
        if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
            return Err(non_finite("sample", *bad));
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let p95 = percentile(&sorted, 95.0);
        let tail: Vec<f64> = sorted.iter().copied().filter(|v| *v >= p95).collect();
        // Float summation can land a hair below p95 when the tail is flat.
        let tail_mean = (tail.iter().sum::<f64>() / tail.len() as f64).max(p95);

        Ok(Self {
            count: sorted.len(),
            mean,
            median: percentile(&sorted, 50.0),
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            p5: percentile(&sorted, 5.0),
            p25: percentile(&sorted, 25.0),
            p75: percentile(&sorted, 75.0),
            p95,
            var_95: p95 - anchor,
            cvar_95: tail_mean - anchor,
        })
    }
}

/// Linear-interpolation percentile of an ascending, non-empty slice.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = (pct / 100.0).clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

fn non_finite(what: &str, value: f64) -> DomainError {
    DomainError::new(
        ErrorCode::NonFiniteValue,
        format!("Simulation produced a non-finite {}", what),
    )
    .with_detail("field", what)
    .with_detail("value", value.to_string())
}
