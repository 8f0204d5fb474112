//! Ranking handlers.

mod run_scorecard;

pub use run_scorecard::{RunScorecardCommand, RunScorecardHandler, RunScorecardResult, WeightSpec};
