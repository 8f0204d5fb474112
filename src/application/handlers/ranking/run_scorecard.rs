//! RunScorecardHandler - Command handler for ranking suppliers into a scorecard.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::config::RankingConfig;
use crate::domain::foundation::DomainError;
use crate::domain::ranking::{
    rank, CriteriaPolarity, CriteriaWeights, DecisionMatrix, RankingMethod, RankingOptions,
};
use crate::ports::{Scorecard, ScorecardWriter};

/// How criterion weights are supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightSpec {
    /// Positional weights aligned with the matrix columns.
    Explicit(Vec<f64>),
    /// Weights by criterion name; unlisted criteria get the configured default.
    Named(HashMap<String, f64>),
    /// The configured weight table.
    Configured,
    /// Equal weight on every criterion.
    Uniform,
}

/// Command to rank suppliers and persist the scorecard.
#[derive(Debug, Clone)]
pub struct RunScorecardCommand {
    pub matrix: DecisionMatrix,
    pub weights: WeightSpec,
    pub polarity: CriteriaPolarity,
    /// Method name; `None` uses the configured default
    pub method: Option<String>,
    pub period_label: String,
}

/// Result of a successful scorecard run.
#[derive(Debug, Clone)]
pub struct RunScorecardResult {
    pub scorecard: Scorecard,
}

/// Handler for scorecard runs.
pub struct RunScorecardHandler {
    writer: Arc<dyn ScorecardWriter>,
    config: RankingConfig,
}

impl RunScorecardHandler {
    pub fn new(writer: Arc<dyn ScorecardWriter>, config: RankingConfig) -> Self {
        Self { writer, config }
    }

    pub async fn handle(&self, cmd: RunScorecardCommand) -> Result<RunScorecardResult, DomainError> {
        // 1. Resolve method and thresholds
        let method = match cmd.method.as_deref() {
            Some(name) => name.parse::<RankingMethod>()?,
            None => self.config.method().map_err(config_error)?,
        };
        let thresholds = self.config.thresholds().map_err(config_error)?;

        // 2. Resolve weights against the matrix columns
        let weights = self.resolve_weights(&cmd.weights, &cmd.matrix)?;

        // 3. Rank
        let options = RankingOptions::new(method).with_thresholds(thresholds);
        let result = rank(&cmd.matrix, &weights, &cmd.polarity, &options)?;

        // 4. Persist
        let scorecard = Scorecard::from_result(cmd.period_label, result);
        self.writer.save(&scorecard).await?;

        info!(
            scorecard_id = %scorecard.id,
            period = %scorecard.period_label,
            method = %scorecard.methodology,
            suppliers = scorecard.entries.len(),
            "Scorecard saved"
        );

        Ok(RunScorecardResult { scorecard })
    }

    fn resolve_weights(
        &self,
        spec: &WeightSpec,
        matrix: &DecisionMatrix,
    ) -> Result<CriteriaWeights, DomainError> {
        match spec {
            WeightSpec::Explicit(raw) => CriteriaWeights::new(raw.clone()),
            WeightSpec::Named(named) => {
                CriteriaWeights::from_named(matrix.criteria(), named, self.config.unlisted_weight)
            }
            WeightSpec::Configured => CriteriaWeights::from_named(
                matrix.criteria(),
                &self.config.weight_table(),
                self.config.unlisted_weight,
            ),
            WeightSpec::Uniform => CriteriaWeights::uniform(matrix.criterion_count()),
        }
    }
}

fn config_error(err: crate::config::ValidationError) -> DomainError {
    DomainError::validation("ranking", err.to_string())
}
