//! Raw output of a single ranking method.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DataQualityFlag, DomainError, ErrorCode};

/// Per-alternative scores on the method's own scale, in matrix row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodScores {
    pub scores: Vec<f64>,
    /// Numerical fallbacks applied while computing the scores.
    pub flags: Vec<DataQualityFlag>,
}

impl MethodScores {
    pub fn new(scores: Vec<f64>) -> Self {
        Self {
            scores,
            flags: Vec::new(),
        }
    }

    pub fn with_flags(scores: Vec<f64>, flags: Vec<DataQualityFlag>) -> Self {
        Self { scores, flags }
    }

    /// Fails with `NonFiniteValue` naming the first alternative whose score
    /// is NaN or infinite.
    pub(crate) fn ensure_finite(
        self,
        method: &str,
        alternatives: &[String],
    ) -> Result<Self, DomainError> {
        match self.scores.iter().position(|s| !s.is_finite()) {
            None => Ok(self),
            Some(i) => Err(DomainError::new(
                ErrorCode::NonFiniteValue,
                format!("{} produced a non-finite score", method),
            )
            .with_detail("alternative", alternatives[i].clone())),
        }
    }

    /// Index of the highest score. Ties resolve to the earliest row.
    pub fn best_index(&self) -> Option<usize> {
        self.scores
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &s)| match best {
                Some((_, b)) if b >= s => best,
                _ => Some((i, s)),
            })
            .map(|(i, _)| i)
    }
}
