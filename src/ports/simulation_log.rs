//! SimulationLogWriter port - Persistence for Monte Carlo run summaries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, RunId, Timestamp};
use crate::domain::simulation::DistributionSummary;

/// Kind of simulation that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    Fx,
    LeadTime,
    Disruption,
    CostScenario,
}

/// Summary of one simulation run. Raw samples are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub id: RunId,

    pub scenario_type: ScenarioType,

    /// Human-readable label, e.g. "FX NGN 90d"
    pub scenario_label: String,

    pub n_paths: usize,

    pub seed: Option<u64>,

    pub summary: DistributionSummary,

    /// Inputs as JSON, for replay and audit
    pub parameters: serde_json::Value,

    pub created_at: Timestamp,
}

impl SimulationRecord {
    pub fn new(
        scenario_type: ScenarioType,
        scenario_label: impl Into<String>,
        n_paths: usize,
        seed: Option<u64>,
        summary: DistributionSummary,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            id: RunId::new(),
            scenario_type,
            scenario_label: scenario_label.into(),
            n_paths,
            seed,
            summary,
            parameters,
            created_at: Timestamp::now(),
        }
    }
}

/// Port for persisting simulation summaries.
#[async_trait]
pub trait SimulationLogWriter: Send + Sync {
    /// Append a record.
    async fn append(&self, record: &SimulationRecord) -> Result<(), DomainError>;

    /// Most recent records of a type, newest first.
    async fn recent(
        &self,
        scenario_type: ScenarioType,
        limit: usize,
    ) -> Result<Vec<SimulationRecord>, DomainError>;
}
