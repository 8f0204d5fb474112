//! In-Memory Simulation Log
//!
//! Append-only log of simulation summaries held in memory.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{ScenarioType, SimulationLogWriter, SimulationRecord};

/// In-memory, append-only simulation log
#[derive(Debug, Clone, Default)]
pub struct InMemorySimulationLog {
    records: Arc<RwLock<Vec<SimulationRecord>>>,
}

impl InMemorySimulationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Snapshot of every record in append order
    pub async fn all(&self) -> Vec<SimulationRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl SimulationLogWriter for InMemorySimulationLog {
    async fn append(&self, record: &SimulationRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn recent(
        &self,
        scenario_type: ScenarioType,
        limit: usize,
    ) -> Result<Vec<SimulationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.scenario_type == scenario_type)
            .take(limit)
            .cloned()
            .collect())
    }
}
