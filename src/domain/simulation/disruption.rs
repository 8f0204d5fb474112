//! Supply-chain disruption scenarios: cost uplift and added lead time.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::domain::foundation::{DataQualityFlag, DomainError, ErrorCode};

use super::{DistributionSummary, NormalShock};

/// Named disruption archetypes with calibrated impact distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisruptionScenario {
    PortClosure,
    SupplierFailure,
    Sanctions,
    NaturalDisaster,
}

impl DisruptionScenario {
    pub const ALL: [DisruptionScenario; 4] = [
        DisruptionScenario::PortClosure,
        DisruptionScenario::SupplierFailure,
        DisruptionScenario::Sanctions,
        DisruptionScenario::NaturalDisaster,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DisruptionScenario::PortClosure => "port_closure",
            DisruptionScenario::SupplierFailure => "supplier_failure",
            DisruptionScenario::Sanctions => "sanctions",
            DisruptionScenario::NaturalDisaster => "natural_disaster",
        }
    }

    /// Cost multiplier, at least 1x.
    pub fn cost_multiplier(&self) -> NormalShock {
        let (mean, std_dev) = match self {
            DisruptionScenario::PortClosure => (1.25, 0.15),
            DisruptionScenario::SupplierFailure => (1.40, 0.20),
            DisruptionScenario::Sanctions => (1.60, 0.30),
            DisruptionScenario::NaturalDisaster => (1.35, 0.25),
        };
        NormalShock::new(mean, std_dev, 1.0)
    }

    /// Added lead time in days, never negative.
    pub fn lead_time_addition(&self) -> NormalShock {
        let (mean, std_dev) = match self {
            DisruptionScenario::PortClosure => (21.0, 10.0),
            DisruptionScenario::SupplierFailure => (45.0, 20.0),
            DisruptionScenario::Sanctions => (60.0, 25.0),
            DisruptionScenario::NaturalDisaster => (35.0, 15.0),
        };
        NormalShock::new(mean, std_dev, 0.0)
    }
}

impl fmt::Display for DisruptionScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisruptionScenario {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == normalized)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UnknownScenario,
                    format!("Unknown disruption scenario '{}'", s),
                )
                .with_detail("scenario", s)
            })
    }
}

/// Context labels carried through to the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionContext {
    pub affected_entity: String,
    pub duration_days: u32,
}

impl Default for DisruptionContext {
    fn default() -> Self {
        Self {
            affected_entity: "Lagos".to_string(),
            duration_days: 30,
        }
    }
}

/// Outcome of a disruption run.
///
/// Cost impact is `baseline * (multiplier - 1)`, so its VaR and CVaR are
/// measured against zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionResult {
    pub scenario: DisruptionScenario,
    pub context: DisruptionContext,
    pub baseline_spend: f64,
    pub n_sims: usize,
    pub cost_impact: DistributionSummary,
    pub lead_time_addition: DistributionSummary,
    pub seed: Option<u64>,
    pub flags: Vec<DataQualityFlag>,
}

/// Simulates the cost and lead-time impact of `scenario` on `baseline_spend`.
pub fn simulate_disruption<R: Rng + ?Sized>(
    baseline_spend: f64,
    scenario: DisruptionScenario,
    context: DisruptionContext,
    n_sims: usize,
    rng: &mut R,
) -> Result<DisruptionResult, DomainError> {
    if !baseline_spend.is_finite() || baseline_spend < 0.0 {
        return Err(DomainError::invalid_parameter("baseline_spend", baseline_spend));
    }
    if n_sims == 0 {
        return Err(DomainError::invalid_parameter("n_sims", n_sims));
    }

    let (multipliers, cost_clipped) = scenario.cost_multiplier().draw_n(n_sims, rng)?;
    let (additions, lead_clipped) = scenario.lead_time_addition().draw_n(n_sims, rng)?;

    let impacts: Vec<f64> = multipliers.iter().map(|m| baseline_spend * (m - 1.0)).collect();

    let mut flags = Vec::new();
    for (source, count) in [("cost_multiplier", cost_clipped), ("lead_time_addition", lead_clipped)] {
        if count > 0 {
            warn!(scenario = %scenario, source, count, "Disruption draws clipped to floor");
            flags.push(DataQualityFlag::ClippedDraws {
                source: source.to_string(),
                count,
            });
        }
    }

    debug!(
        scenario = %scenario,
        entity = %context.affected_entity,
        n_sims,
        "Disruption simulated"
    );

    Ok(DisruptionResult {
        scenario,
        context,
        baseline_spend,
        n_sims,
        cost_impact: DistributionSummary::from_samples(&impacts, 0.0)?,
        lead_time_addition: DistributionSummary::from_samples(&additions, 0.0)?,
        seed: None,
        flags,
    })
}
