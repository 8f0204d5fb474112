//! Decision Matrix - Fixed-shape table of alternatives x criteria.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::CriteriaPolarity;

/// Immutable m x n table of finite values, one row per alternative.
///
/// Values are stored row-major. Column `k` is named by `criteria()[k]` and
/// row `i` by `alternatives()[i]`, so lookups never depend on dynamic keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    values: Vec<f64>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Builds a matrix from bare rows, naming alternatives `A1..Am` and
    /// criteria `C1..Cn`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DomainError> {
        let n = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut builder = Self::builder().criteria((1..=n).map(|k| format!("C{}", k)).collect());
        for (i, row) in rows.into_iter().enumerate() {
            builder = builder.alternative(format!("A{}", i + 1), row);
        }
        builder.build()
    }

    /// Number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.alternative_count(), self.criterion_count())
    }

    /// Ordered alternative names.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Ordered criterion names.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the value for alternative `i` on criterion `k`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn value(&self, i: usize, k: usize) -> f64 {
        self.values[i * self.criterion_count() + k]
    }

    /// Returns the row for alternative `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.criterion_count();
        &self.values[i * n..(i + 1) * n]
    }

    /// Iterates the values of criterion `k` top to bottom.
    pub fn column(&self, k: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(k)
            .step_by(self.criterion_count())
            .copied()
    }

    /// Returns a copy with every cost criterion negated so that higher is
    /// better on every column.
    pub fn oriented_as_benefits(&self, polarity: &CriteriaPolarity) -> Result<Self, DomainError> {
        polarity.ensure_len(self.criterion_count())?;
        let n = self.criterion_count();
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(idx, &v)| if polarity.is_benefit(idx % n) { v } else { -v })
            .collect();
        Ok(Self {
            alternatives: self.alternatives.clone(),
            criteria: self.criteria.clone(),
            values,
        })
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criteria (column names).
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends an alternative row.
    pub fn alternative(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push((name.into(), values));
        self
    }

    /// Validates shape and values, then builds the matrix.
    ///
    /// # Errors
    /// - `EmptyMatrix` if there are no alternatives or no criteria
    /// - `DimensionMismatch` if a row length differs from the criteria count
    /// - `NonFiniteValue` if any value is NaN or infinite
    /// - `ValidationFailed` on duplicate alternative or criterion names
    pub fn build(self) -> Result<DecisionMatrix, DomainError> {
        if self.rows.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyMatrix,
                "Decision matrix needs at least one alternative",
            ));
        }
        if self.criteria.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyMatrix,
                "Decision matrix needs at least one criterion",
            ));
        }

        ensure_unique("criteria", &self.criteria)?;
        let names: Vec<String> = self.rows.iter().map(|(name, _)| name.clone()).collect();
        ensure_unique("alternatives", &names)?;

        let n = self.criteria.len();
        let mut values = Vec::with_capacity(n * self.rows.len());
        for (name, row) in &self.rows {
            if row.len() != n {
                return Err(DomainError::dimension_mismatch(
                    format!("row '{}'", name),
                    n,
                    row.len(),
                )
                .with_detail("alternative", name.clone()));
            }
            for (k, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(DomainError::new(
                        ErrorCode::NonFiniteValue,
                        format!("Value for '{}' on '{}' is not finite", name, self.criteria[k]),
                    )
                    .with_detail("alternative", name.clone())
                    .with_detail("criterion", self.criteria[k].clone()));
                }
            }
            values.extend_from_slice(row);
        }

        Ok(DecisionMatrix {
            alternatives: names,
            criteria: self.criteria,
            values,
        })
    }
}

fn ensure_unique(field: &str, names: &[String]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(DomainError::validation(
                field,
                format!("Duplicate name '{}' in {}", name, field),
            ));
        }
    }
    Ok(())
}
