//! RunSimulationHandler - Command handler for Monte Carlo risk runs.
//!
//! Resolves market inputs (FX anchors from the rate source, volatilities from
//! configuration), runs the engine, and appends a summary to the simulation log.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::domain::foundation::{DataQualityFlag, DomainError, ErrorCode, Timestamp};
use crate::domain::simulation::{
    CostScenarioParams, CurrencyExposure, DisruptionContext, DisruptionResult, DisruptionScenario,
    LeadTimeSimulation, MonteCarloEngine, SimulationResult, DEFAULT_COST_HORIZON_STEPS,
};
use crate::ports::{FxQuote, FxRateSource, ScenarioType, SimulationLogWriter, SimulationRecord};

/// `FxQuote::source` when the anchor came from configuration.
pub const CONFIG_ANCHOR_SOURCE: &str = "config_default";

/// Currencies in the cost scenario when the command names none.
pub const DEFAULT_COST_CURRENCIES: [&str; 4] = ["NGN", "EUR", "GBP", "CNY"];

/// Command selecting one simulation.
#[derive(Debug, Clone)]
pub enum SimulationCommand {
    Fx {
        currency: String,
        n_paths: Option<usize>,
        horizon_steps: Option<usize>,
    },
    LeadTime {
        label: String,
        historical_days: Vec<f64>,
        n_paths: Option<usize>,
    },
    Disruption {
        scenario: String,
        baseline_spend: f64,
        context: DisruptionContext,
        n_paths: Option<usize>,
    },
    CostScenario {
        baseline_spend: f64,
        currencies: Vec<String>,
        horizon_steps: Option<usize>,
        n_paths: Option<usize>,
    },
}

/// Full output of a simulation, by kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationOutcome {
    Fx {
        quote: FxQuote,
        annual_volatility: f64,
        result: SimulationResult,
    },
    LeadTime(LeadTimeSimulation),
    Disruption(DisruptionResult),
    CostScenario(SimulationResult),
}

/// Result of a successful simulation run.
#[derive(Debug, Clone)]
pub struct RunSimulationResult {
    pub record: SimulationRecord,
    pub outcome: SimulationOutcome,
}

/// Handler for simulation runs.
pub struct RunSimulationHandler {
    rate_source: Arc<dyn FxRateSource>,
    log: Arc<dyn SimulationLogWriter>,
    engine: MonteCarloEngine,
    config: SimulationConfig,
}

impl RunSimulationHandler {
    pub fn new(
        rate_source: Arc<dyn FxRateSource>,
        log: Arc<dyn SimulationLogWriter>,
        config: SimulationConfig,
    ) -> Self {
        Self {
            rate_source,
            log,
            engine: config.engine(),
            config,
        }
    }

    /// Replaces the engine, e.g. to pin a seed.
    pub fn with_engine(mut self, engine: MonteCarloEngine) -> Self {
        self.engine = engine;
        self
    }

    pub async fn handle(&self, cmd: SimulationCommand) -> Result<RunSimulationResult, DomainError> {
        let (record, outcome) = match cmd {
            SimulationCommand::Fx {
                currency,
                n_paths,
                horizon_steps,
            } => self.run_fx(&currency, n_paths, horizon_steps).await?,
            SimulationCommand::LeadTime {
                label,
                historical_days,
                n_paths,
            } => self.run_lead_time(label, &historical_days, n_paths)?,
            SimulationCommand::Disruption {
                scenario,
                baseline_spend,
                context,
                n_paths,
            } => self.run_disruption(&scenario, baseline_spend, context, n_paths)?,
            SimulationCommand::CostScenario {
                baseline_spend,
                currencies,
                horizon_steps,
                n_paths,
            } => self.run_cost_scenario(baseline_spend, currencies, horizon_steps, n_paths)?,
        };

        self.log.append(&record).await?;

        info!(
            record_id = %record.id,
            scenario = %record.scenario_label,
            n_paths = record.n_paths,
            seed = ?record.seed,
            "Simulation logged"
        );

        Ok(RunSimulationResult { record, outcome })
    }

    async fn run_fx(
        &self,
        currency: &str,
        n_paths: Option<usize>,
        horizon_steps: Option<usize>,
    ) -> Result<(SimulationRecord, SimulationOutcome), DomainError> {
        let (quote, anchor_flag) = self.resolve_quote(currency).await?;
        let annual_volatility = self.config.volatility_for(&quote.currency);
        let result = self
            .engine
            .fx(quote.rate, annual_volatility, n_paths, horizon_steps)?
            .with_flags(anchor_flag);

        let record = SimulationRecord::new(
            ScenarioType::Fx,
            format!("FX {} {}d", quote.currency, result.horizon_steps),
            result.n_paths,
            result.seed,
            result.summary.clone(),
            json!({
                "currency": quote.currency,
                "anchor": quote.rate,
                "rate_source": quote.source,
                "annual_volatility": annual_volatility,
                "horizon_steps": result.horizon_steps,
            }),
        );
        Ok((
            record,
            SimulationOutcome::Fx {
                quote,
                annual_volatility,
                result,
            },
        ))
    }

    /// Quotes `currency` from the rate source. When no source has a rate,
    /// falls back to the configured anchor and flags it.
    async fn resolve_quote(
        &self,
        currency: &str,
    ) -> Result<(FxQuote, Option<DataQualityFlag>), DomainError> {
        match self.rate_source.quote(currency).await {
            Ok(quote) => Ok((quote, None)),
            Err(err) if err.code == ErrorCode::RateUnavailable => {
                let code = currency.to_ascii_uppercase();
                let rate = self.config.anchor_rate_for(&code);
                warn!(
                    currency = %code,
                    rate,
                    source = self.rate_source.name(),
                    error = %err,
                    "No FX quote; using configured anchor"
                );
                let flag = DataQualityFlag::DefaultAnchorRate {
                    currency: code.clone(),
                    rate,
                };
                let quote = FxQuote {
                    currency: code,
                    rate,
                    source: CONFIG_ANCHOR_SOURCE.to_string(),
                    as_of: Timestamp::now(),
                };
                Ok((quote, Some(flag)))
            }
            Err(err) => Err(err),
        }
    }

    fn run_lead_time(
        &self,
        label: String,
        historical_days: &[f64],
        n_paths: Option<usize>,
    ) -> Result<(SimulationRecord, SimulationOutcome), DomainError> {
        let run = self.engine.lead_time(historical_days, n_paths)?;

        let record = SimulationRecord::new(
            ScenarioType::LeadTime,
            format!("Lead time {}", label),
            run.result.n_paths,
            run.result.seed,
            run.result.summary.clone(),
            json!({
                "historical_count": run.fit.historical_count,
                "historical_mean": run.fit.historical_mean,
                "mu": run.fit.mu,
                "sigma": run.fit.sigma,
                "fallback_used": run.fit.fallback_used,
            }),
        );
        Ok((record, SimulationOutcome::LeadTime(run)))
    }

    fn run_disruption(
        &self,
        scenario: &str,
        baseline_spend: f64,
        context: DisruptionContext,
        n_paths: Option<usize>,
    ) -> Result<(SimulationRecord, SimulationOutcome), DomainError> {
        let scenario: DisruptionScenario = scenario.parse()?;
        let result = self
            .engine
            .disruption(baseline_spend, scenario, context, n_paths)?;

        let record = SimulationRecord::new(
            ScenarioType::Disruption,
            format!(
                "{} at {} ({}d)",
                scenario, result.context.affected_entity, result.context.duration_days
            ),
            result.n_sims,
            result.seed,
            result.cost_impact.clone(),
            json!({
                "scenario": scenario,
                "baseline_spend": baseline_spend,
                "lead_time_addition_mean": result.lead_time_addition.mean,
                "lead_time_addition_p95": result.lead_time_addition.p95,
            }),
        );
        Ok((record, SimulationOutcome::Disruption(result)))
    }

    fn run_cost_scenario(
        &self,
        baseline_spend: f64,
        currencies: Vec<String>,
        horizon_steps: Option<usize>,
        n_paths: Option<usize>,
    ) -> Result<(SimulationRecord, SimulationOutcome), DomainError> {
        let currencies = if currencies.is_empty() {
            DEFAULT_COST_CURRENCIES.iter().map(|c| c.to_string()).collect()
        } else {
            currencies
        };
        let exposures: Vec<CurrencyExposure> = currencies
            .iter()
            .map(|c| CurrencyExposure::new(c.to_ascii_uppercase(), self.config.volatility_for(c)))
            .collect();
        let params = CostScenarioParams::new(baseline_spend, exposures)
            .with_horizon(horizon_steps.unwrap_or(DEFAULT_COST_HORIZON_STEPS));

        let result = self.engine.cost_scenario(&params, n_paths)?;

        let record = SimulationRecord::new(
            ScenarioType::CostScenario,
            format!("Cost scenario {}", currencies.join("/")),
            result.n_paths,
            result.seed,
            result.summary.clone(),
            json!({
                "baseline_spend": baseline_spend,
                "currencies": params.currencies,
                "horizon_steps": result.horizon_steps,
                "commodity": params.commodity,
            }),
        );
        Ok((record, SimulationOutcome::CostScenario(result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FX_ANCHOR, DEFAULT_FX_VOLATILITY};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRateSource;

    #[async_trait]
    impl FxRateSource for MockRateSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn quote(&self, currency: &str) -> Result<FxQuote, DomainError> {
            match currency.to_ascii_uppercase().as_str() {
                "EUR" => Ok(FxQuote {
                    currency: "EUR".to_string(),
                    rate: 0.92,
                    source: "mock".to_string(),
                    as_of: Timestamp::now(),
                }),
                "??" => Err(DomainError::new(ErrorCode::ValidationFailed, "malformed currency code")),
                other => Err(DomainError::new(ErrorCode::RateUnavailable, "no quote")
                    .with_detail("currency", other)),
            }
        }
    }

    #[derive(Default)]
    struct MockSimulationLog {
        records: Mutex<Vec<SimulationRecord>>,
    }

    impl MockSimulationLog {
        fn records(&self) -> Vec<SimulationRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SimulationLogWriter for MockSimulationLog {
        async fn append(&self, record: &SimulationRecord) -> Result<(), DomainError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn recent(
            &self,
            _scenario_type: ScenarioType,
            _limit: usize,
        ) -> Result<Vec<SimulationRecord>, DomainError> {
            Ok(vec![])
        }
    }

    fn handler(log: Arc<MockSimulationLog>) -> RunSimulationHandler {
        let config = SimulationConfig {
            seed: Some(42),
            ..Default::default()
        };
        RunSimulationHandler::new(Arc::new(MockRateSource), log, config)
    }

    #[tokio::test]
    async fn fx_run_uses_quote_and_configured_volatility() {
        let log = Arc::new(MockSimulationLog::default());
        let result = handler(log.clone())
            .handle(SimulationCommand::Fx {
                currency: "eur".to_string(),
                n_paths: Some(2_000),
                horizon_steps: Some(30),
            })
            .await
            .unwrap();

        match &result.outcome {
            SimulationOutcome::Fx {
                quote,
                annual_volatility,
                result,
            } => {
                assert_eq!(quote.rate, 0.92);
                assert_eq!(*annual_volatility, 0.08);
                assert_eq!(result.anchor, 0.92);
                assert_eq!(result.seed, Some(42));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(result.record.scenario_type, ScenarioType::Fx);
        assert_eq!(result.record.scenario_label, "FX EUR 30d");
        assert_eq!(result.record.parameters["annual_volatility"], 0.08);
        assert_eq!(log.records().len(), 1);
    }

    #[tokio::test]
    async fn fx_without_quote_uses_configured_anchor() {
        let log = Arc::new(MockSimulationLog::default());
        let result = handler(log.clone())
            .handle(SimulationCommand::Fx {
                currency: "xof".to_string(),
                n_paths: Some(1_000),
                horizon_steps: Some(30),
            })
            .await
            .unwrap();

        match &result.outcome {
            SimulationOutcome::Fx {
                quote,
                annual_volatility,
                result,
            } => {
                assert_eq!(quote.currency, "XOF");
                assert_eq!(quote.rate, DEFAULT_FX_ANCHOR);
                assert_eq!(quote.source, CONFIG_ANCHOR_SOURCE);
                assert_eq!(*annual_volatility, DEFAULT_FX_VOLATILITY);
                assert_eq!(result.anchor, DEFAULT_FX_ANCHOR);
                assert_eq!(
                    result.flags,
                    vec![DataQualityFlag::DefaultAnchorRate {
                        currency: "XOF".to_string(),
                        rate: DEFAULT_FX_ANCHOR,
                    }]
                );
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(result.record.parameters["rate_source"], CONFIG_ANCHOR_SOURCE);
        assert_eq!(log.records().len(), 1);
    }

    #[tokio::test]
    async fn fx_source_failure_other_than_missing_rate_propagates() {
        let log = Arc::new(MockSimulationLog::default());
        let err = handler(log.clone())
            .handle(SimulationCommand::Fx {
                currency: "??".to_string(),
                n_paths: None,
                horizon_steps: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(log.records().is_empty());
    }

    #[tokio::test]
    async fn lead_time_run_records_fit() {
        let log = Arc::new(MockSimulationLog::default());
        let result = handler(log)
            .handle(SimulationCommand::LeadTime {
                label: "all suppliers".to_string(),
                historical_days: vec![30.0, 45.0],
                n_paths: Some(1_000),
            })
            .await
            .unwrap();

        assert_eq!(result.record.parameters["fallback_used"], true);
        assert_eq!(result.record.scenario_label, "Lead time all suppliers");
        assert!(matches!(result.outcome, SimulationOutcome::LeadTime(_)));
    }

    #[tokio::test]
    async fn disruption_run_parses_scenario() {
        let log = Arc::new(MockSimulationLog::default());
        let result = handler(log)
            .handle(SimulationCommand::Disruption {
                scenario: "port_closure".to_string(),
                baseline_spend: 1_000_000.0,
                context: DisruptionContext::default(),
                n_paths: Some(1_000),
            })
            .await
            .unwrap();

        assert_eq!(result.record.scenario_label, "port_closure at Lagos (30d)");
        assert!(result.record.summary.mean > 0.0);
    }

    #[tokio::test]
    async fn unknown_disruption_rejected() {
        let log = Arc::new(MockSimulationLog::default());
        let err = handler(log)
            .handle(SimulationCommand::Disruption {
                scenario: "meteor".to_string(),
                baseline_spend: 1.0,
                context: DisruptionContext::default(),
                n_paths: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownScenario);
    }

    #[tokio::test]
    async fn cost_scenario_defaults_currency_basket() {
        let log = Arc::new(MockSimulationLog::default());
        let result = handler(log)
            .handle(SimulationCommand::CostScenario {
                baseline_spend: 5_000_000.0,
                currencies: vec![],
                horizon_steps: None,
                n_paths: Some(2_000),
            })
            .await
            .unwrap();

        assert_eq!(result.record.scenario_label, "Cost scenario NGN/EUR/GBP/CNY");
        assert_eq!(result.record.parameters["horizon_steps"], 90);
        assert_eq!(result.record.parameters["currencies"][0]["annual_volatility"], 0.40);
    }
}
