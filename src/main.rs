//! Demonstration runner: ranks a sample supplier panel, scores supplier risk
//! and simulates FX and cost risk against in-memory adapters, printing JSON summaries.

use std::error::Error;
use std::sync::Arc;

use procurement_analytics::adapters::{
    init_tracing, InMemoryScorecardStore, InMemorySimulationLog, StaticFxRates,
};
use procurement_analytics::application::{
    RunScorecardCommand, RunScorecardHandler, RunSimulationHandler, SimulationCommand, WeightSpec,
};
use procurement_analytics::config::AppConfig;
use procurement_analytics::domain::concentration::{compute_hhi, spend_shares, ConcentrationLevel};
use procurement_analytics::domain::ranking::{CriteriaPolarity, DecisionMatrix, Tier};
use procurement_analytics::domain::risk::{assess_risk, SupplierRiskIndicators, VolatilityClass};
use procurement_analytics::domain::simulation::DisruptionContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    tracing::info!(
        method = %config.ranking.default_method,
        seed = ?config.simulation.seed,
        "Starting procurement analytics demo"
    );

    // Supplier scorecard
    let scorecards = Arc::new(InMemoryScorecardStore::new());
    let scorecard_handler = RunScorecardHandler::new(scorecards.clone(), config.ranking.clone());

    let matrix = DecisionMatrix::builder()
        .criteria(vec!["cost", "quality", "delivery", "risk", "esg"])
        .alternative("Dangote Supplies", vec![4.2, 88.0, 91.0, 22.0, 70.0])
        .alternative("Rhine Components", vec![5.1, 95.0, 94.0, 12.0, 85.0])
        .alternative("Shenzhen Parts", vec![3.4, 79.0, 83.0, 35.0, 55.0])
        .alternative("Midlands Metals", vec![4.8, 90.0, 88.0, 18.0, 80.0])
        .build()?;
    let polarity = CriteriaPolarity::from_flags(&[false, true, true, false, true]);

    let scorecard = scorecard_handler
        .handle(RunScorecardCommand {
            matrix,
            weights: WeightSpec::Configured,
            polarity,
            method: None,
            period_label: "2024".to_string(),
        })
        .await?
        .scorecard;
    println!("{}", serde_json::to_string_pretty(&scorecard)?);

    // Spend concentration
    let shares = spend_shares(&[4_200_000.0, 2_900_000.0, 1_800_000.0, 1_100_000.0])?;
    let hhi = compute_hhi(&shares)?;
    println!(
        "{}",
        serde_json::json!({ "hhi": hhi, "level": ConcentrationLevel::from_hhi(hhi) })
    );

    // Supplier risk
    let risk_weights = config.risk.weights()?;
    let indicators = SupplierRiskIndicators {
        annual_revenue_usd: 38_000_000.0,
        defect_rate_pct: Some(2.4),
        on_time_pct: Some(86.0),
        quality_incidents: 2,
        governance_score: Some(38.0),
        fragile_state_index: Some(62.0),
        non_compliant_checks: 1,
        verified_certifications: 2,
        esg_score: Some(61.0),
        supplier_tier: Some(Tier::Preferred),
        currency_volatility: Some(VolatilityClass::High),
        ..Default::default()
    };
    let assessment = assess_risk("Dangote Supplies", &indicators, &risk_weights)?;
    println!("{}", serde_json::to_string_pretty(&assessment)?);

    // Risk simulations
    let simulation_handler = RunSimulationHandler::new(
        Arc::new(StaticFxRates::from_config(&config.simulation)),
        Arc::new(InMemorySimulationLog::new()),
        config.simulation.clone(),
    );

    let commands = vec![
        SimulationCommand::Fx {
            currency: "NGN".to_string(),
            n_paths: None,
            horizon_steps: None,
        },
        SimulationCommand::LeadTime {
            label: "all suppliers".to_string(),
            historical_days: vec![32.0, 41.0, 38.0, 55.0, 29.0, 47.0, 36.0, 60.0],
            n_paths: None,
        },
        SimulationCommand::Disruption {
            scenario: "port_closure".to_string(),
            baseline_spend: 10_000_000.0,
            context: DisruptionContext::default(),
            n_paths: None,
        },
        SimulationCommand::CostScenario {
            baseline_spend: 10_000_000.0,
            currencies: Vec::new(),
            horizon_steps: None,
            n_paths: None,
        },
    ];

    for command in commands {
        let run = simulation_handler.handle(command).await?;
        println!("{}", serde_json::to_string_pretty(&run.record)?);
    }

    Ok(())
}
