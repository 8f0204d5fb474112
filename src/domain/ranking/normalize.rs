//! Column normalization and distance helpers shared by the ranking methods.

use super::DecisionMatrix;

/// A normalized copy of a matrix plus the columns whose scale was degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Row-major values, same shape as the source matrix.
    pub values: Vec<f64>,
    /// Column indices whose norm or range was zero and was treated as 1.
    pub degenerate_columns: Vec<usize>,
}

/// Divides each column by its Euclidean norm. A zero norm is treated as 1,
/// leaving that column all zero.
///
/// The norm is taken over the column scaled by its largest magnitude, so
/// squares cannot overflow for large finite values.
pub fn vector_normalize(matrix: &DecisionMatrix) -> Normalized {
    let (m, n) = matrix.shape();
    let mut degenerate_columns = Vec::new();
    let norms: Vec<f64> = (0..n)
        .map(|k| {
            let max_abs = matrix.column(k).fold(0.0_f64, |acc, v| acc.max(v.abs()));
            if max_abs == 0.0 {
                degenerate_columns.push(k);
                return 1.0;
            }
            let scaled = matrix
                .column(k)
                .map(|v| {
                    let x = v / max_abs;
                    x * x
                })
                .sum::<f64>()
                .sqrt();
            max_abs * scaled
        })
        .collect();

    let mut values = Vec::with_capacity(m * n);
    for i in 0..m {
        values.extend(matrix.row(i).iter().zip(&norms).map(|(v, norm)| v / norm));
    }

    Normalized {
        values,
        degenerate_columns,
    }
}

/// Rescales each column to [0, 1] by min-max. A zero range is treated as 1,
/// leaving that column at 0.
///
/// When `max - min` overflows, the column is first divided by its largest
/// magnitude so the range stays finite.
pub fn min_max_normalize(matrix: &DecisionMatrix) -> Normalized {
    let (m, n) = matrix.shape();
    let mut degenerate_columns = Vec::new();
    let bounds: Vec<ColumnScale> = (0..n)
        .map(|k| {
            let (min, max) = column_bounds(matrix, k);
            let mut scale = 1.0;
            let mut range = max - min;
            if !range.is_finite() {
                scale = min.abs().max(max.abs());
                range = max / scale - min / scale;
            }
            if range == 0.0 {
                degenerate_columns.push(k);
                range = 1.0;
            }
            ColumnScale { min, scale, range }
        })
        .collect();

    let mut values = Vec::with_capacity(m * n);
    for i in 0..m {
        values.extend(
            matrix
                .row(i)
                .iter()
                .zip(&bounds)
                .map(|(v, c)| (v / c.scale - c.min / c.scale) / c.range),
        );
    }

    Normalized {
        values,
        degenerate_columns,
    }
}

struct ColumnScale {
    min: f64,
    scale: f64,
    range: f64,
}

/// Minimum and maximum of column `k`.
pub fn column_bounds(matrix: &DecisionMatrix, k: usize) -> (f64, f64) {
    matrix
        .column(k)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

/// Euclidean distance between two equal-length vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
