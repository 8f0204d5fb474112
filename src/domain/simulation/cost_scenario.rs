//! Combined procurement-cost scenario: FX exposure times commodity shock.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

use super::{simulate_shock, NormalShock, ShockSource, SimulationResult};

/// Horizon (steps) of each currency move unless overridden.
pub const DEFAULT_COST_HORIZON_STEPS: usize = 90;

/// Commodity price shock: N(1.0, 0.10), never below 0.7x.
pub const COMMODITY_SHOCK: NormalShock = NormalShock {
    mean: 1.0,
    std_dev: 0.10,
    floor: 0.7,
};

/// One currency in the spend basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyExposure {
    pub currency: String,
    pub annual_volatility: f64,
}

impl CurrencyExposure {
    pub fn new(currency: impl Into<String>, annual_volatility: f64) -> Self {
        Self {
            currency: currency.into(),
            annual_volatility,
        }
    }
}

/// Inputs to the combined cost scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostScenarioParams {
    pub baseline_spend: f64,
    pub currencies: Vec<CurrencyExposure>,
    pub horizon_steps: usize,
    pub commodity: NormalShock,
}

impl CostScenarioParams {
    pub fn new(baseline_spend: f64, currencies: Vec<CurrencyExposure>) -> Self {
        Self {
            baseline_spend,
            currencies,
            horizon_steps: DEFAULT_COST_HORIZON_STEPS,
            commodity: COMMODITY_SHOCK,
        }
    }

    pub fn with_horizon(mut self, horizon_steps: usize) -> Self {
        self.horizon_steps = horizon_steps;
        self
    }

    fn sources(&self) -> Vec<ShockSource> {
        self.currencies
            .iter()
            .map(|c| ShockSource::Fx {
                label: c.currency.clone(),
                annual_volatility: c.annual_volatility,
                horizon_steps: self.horizon_steps,
            })
            .chain(std::iter::once(ShockSource::Normal {
                label: "commodity".to_string(),
                shock: self.commodity,
            }))
            .collect()
    }
}

/// Simulates total cost `baseline * prod(FX) * commodity`.
///
/// VaR and CVaR are against the baseline, i.e. savings at risk.
pub fn simulate_cost_scenario<R: Rng + ?Sized>(
    params: &CostScenarioParams,
    n_sims: usize,
    rng: &mut R,
) -> Result<SimulationResult, DomainError> {
    if !params.baseline_spend.is_finite() || params.baseline_spend <= 0.0 {
        return Err(DomainError::invalid_parameter(
            "baseline_spend",
            params.baseline_spend,
        ));
    }
    let mut result = simulate_shock(params.baseline_spend, &params.sources(), n_sims, rng)?;
    result.horizon_steps = params.horizon_steps;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn basket() -> Vec<CurrencyExposure> {
        vec![
            CurrencyExposure::new("NGN", 0.40),
            CurrencyExposure::new("EUR", 0.08),
            CurrencyExposure::new("GBP", 0.10),
            CurrencyExposure::new("CNY", 0.06),
        ]
    }

    #[test]
    fn total_cost_centered_on_baseline() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = CostScenarioParams::new(2_500_000.0, basket());
        let result = simulate_cost_scenario(&params, 20_000, &mut rng).unwrap();

        assert_eq!(result.anchor, 2_500_000.0);
        assert_eq!(result.horizon_steps, DEFAULT_COST_HORIZON_STEPS);
        assert!((result.summary.mean / 2_500_000.0 - 1.0).abs() < 0.02);
        assert!(result.summary.var_95 > 0.0);
        assert!(result.summary.cvar_95 >= result.summary.var_95);
    }

    #[test]
    fn commodity_floor_bounds_downside_without_fx() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = CostScenarioParams::new(1_000.0, Vec::new());
        let result = simulate_cost_scenario(&params, 5_000, &mut rng).unwrap();
        assert!(result.summary.min >= 699.999);
    }

    #[test]
    fn non_positive_baseline_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = simulate_cost_scenario(&CostScenarioParams::new(0.0, basket()), 10, &mut rng)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSimulationParameter);
    }
}
