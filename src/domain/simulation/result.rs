//! Simulation output shared by every process family.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DataQualityFlag, DomainError};

use super::DistributionSummary;

/// Stochastic process that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessFamily {
    Gbm,
    LogNormalFit,
    NormalShock,
}

impl fmt::Display for ProcessFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessFamily::Gbm => "gbm",
            ProcessFamily::LogNormalFit => "log_normal_fit",
            ProcessFamily::NormalShock => "normal_shock",
        };
        f.write_str(s)
    }
}

/// Simulated terminal values plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub process: ProcessFamily,
    pub anchor: f64,
    pub n_paths: usize,
    pub horizon_steps: usize,
    /// Seed that reproduces this run, when it was driven by one.
    pub seed: Option<u64>,
    #[serde(skip)]
    pub terminal_values: Vec<f64>,
    pub summary: DistributionSummary,
    pub flags: Vec<DataQualityFlag>,
}

impl SimulationResult {
    /// Summarizes `terminal_values` against `anchor`.
    pub(crate) fn from_values(
        process: ProcessFamily,
        anchor: f64,
        horizon_steps: usize,
        terminal_values: Vec<f64>,
        flags: Vec<DataQualityFlag>,
    ) -> Result<Self, DomainError> {
        let summary = DistributionSummary::from_samples(&terminal_values, anchor)?;
        Ok(Self {
            process,
            anchor,
            n_paths: terminal_values.len(),
            horizon_steps,
            seed: None,
            terminal_values,
            summary,
            flags,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = DataQualityFlag>) -> Self {
        self.flags.extend(flags);
        self
    }
}
