//! ScorecardWriter port - Persistence for supplier ranking runs.
//!
//! A scorecard is one ranking run frozen for a reporting period: the method,
//! the weights actually applied, and every supplier's score, rank and tier.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DataQualityFlag, DomainError, RunId, Timestamp};
use crate::domain::ranking::{RankedAlternative, RankingMethod, RankingResult};

/// A persisted ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub id: RunId,

    /// Reporting period, e.g. "2024" or "2024-Q3"
    pub period_label: String,

    pub methodology: RankingMethod,

    /// Criterion names, aligned with `weights`
    pub criteria: Vec<String>,

    /// Normalized weights applied
    pub weights: Vec<f64>,

    /// Suppliers in matrix row order
    pub entries: Vec<RankedAlternative>,

    pub flags: Vec<DataQualityFlag>,

    pub created_at: Timestamp,
}

impl Scorecard {
    /// Freezes a ranking result under a period label.
    pub fn from_result(period_label: impl Into<String>, result: RankingResult) -> Self {
        Self {
            id: RunId::new(),
            period_label: period_label.into(),
            methodology: result.method,
            criteria: result.criteria,
            weights: result.weights,
            entries: result.alternatives,
            flags: result.flags,
            created_at: Timestamp::now(),
        }
    }

    /// Entries sorted best first.
    pub fn leaderboard(&self) -> Vec<&RankedAlternative> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.rank);
        sorted
    }
}

/// Port for persisting scorecards.
#[async_trait]
pub trait ScorecardWriter: Send + Sync {
    /// Persist a scorecard.
    async fn save(&self, scorecard: &Scorecard) -> Result<(), DomainError>;

    /// Find a scorecard by ID.
    async fn find_by_id(&self, id: &RunId) -> Result<Option<Scorecard>, DomainError>;

    /// All scorecards for a period, oldest first.
    async fn list_for_period(&self, period_label: &str) -> Result<Vec<Scorecard>, DomainError>;
}
