//! Ranking Module - Multi-criteria ranking of supplier alternatives.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated alternatives x criteria table
//! - `CriteriaWeights` / `CriteriaPolarity` - Per-criterion importance and direction
//! - `topsis` - Closeness to the ideal solution, in [0, 1]
//! - `promethee` - PROMETHEE II net outranking flow, in [-1, 1]
//! - `wsm` - Weighted sum of min-max normalized benefits, in [0, 1]
//! - `rank` - Runs one method, rescales to 0-100, assigns ranks and tiers
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Numerical degeneracies (zero-norm
//! columns, a lone alternative) never abort a run; they are recorded as
//! `DataQualityFlag`s alongside the scores.

mod criteria;
mod matrix;
mod method_scores;
pub mod normalize;
mod promethee;
mod ranker;
mod tier;
mod topsis;
mod wsm;

pub use criteria::{CriteriaPolarity, CriteriaWeights, Polarity};
pub use matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use method_scores::MethodScores;
pub use promethee::{promethee, PreferenceThresholds};
pub use ranker::{rank, RankedAlternative, RankingMethod, RankingOptions, RankingResult};
pub use tier::{
    Tier, APPROVED_THRESHOLD, CONDITIONAL_THRESHOLD, PREFERRED_THRESHOLD, STRATEGIC_THRESHOLD,
};
pub use topsis::{topsis, SINGLE_ALTERNATIVE_SCORE};
pub use wsm::wsm;
