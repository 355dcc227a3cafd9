//! Pearson correlation and ordinary least squares regression

use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

/// Slope and intercept of a least-squares line fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Correlation coefficient and regression line for two aligned series
///
/// The coefficient and the fit are defined together: when the
/// correlation denominator is zero (one series is constant) both fall
/// back to zero rather than erroring, since constant inputs such as an
/// all-zero revenue series are a normal state for a new shop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson coefficient in [-1, 1], 0 when undefined
    pub coefficient: f64,
    /// Least-squares fit of `y` against `x`, {0, 0} when degenerate
    pub regression: LinearFit,
}

/// The 1-based period-index axis used to regress a series against its
/// own position, making the slope's unit "per period"
pub fn index_series(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Pearson correlation and simple linear regression of `y` against `x`
///
/// Both series must have the same length of at least 2; anything else
/// is a caller contract violation.
pub fn correlate(x: &[f64], y: &[f64]) -> Result<CorrelationResult> {
    if x.len() != y.len() {
        return Err(AnalyticsError::ValidationError(format!(
            "Series length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }

    if x.len() < 2 {
        return Err(AnalyticsError::ValidationError(
            "Correlation needs at least 2 points".to_string(),
        ));
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();
    let sum_yy: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let spread_x = n * sum_xx - sum_x * sum_x;
    let spread_y = n * sum_yy - sum_y * sum_y;

    // Rounding can push a mathematically zero spread slightly negative
    let denominator_squared = spread_x * spread_y;
    if denominator_squared <= 0.0 {
        return Ok(CorrelationResult {
            coefficient: 0.0,
            regression: LinearFit {
                slope: 0.0,
                intercept: 0.0,
            },
        });
    }

    let coefficient = numerator / denominator_squared.sqrt();
    let slope = numerator / spread_x;
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(CorrelationResult {
        coefficient,
        regression: LinearFit { slope, intercept },
    })
}
