//! Descriptive statistics over a numeric series

use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

/// Default trailing window for moving-average smoothing
pub const DEFAULT_MA_WINDOW: usize = 7;

/// Volatility statistics for a numeric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Standard deviation as a percentage of the mean, 0 when mean <= 0
    pub coefficient_of_variation: f64,
}

/// Calculate mean, variance, standard deviation and coefficient of
/// variation for a non-empty series
///
/// Uses population variance. A single-point series has zero variance.
/// An empty series is a caller contract violation.
pub fn series_statistics(values: &[f64]) -> Result<SeriesStatistics> {
    if values.is_empty() {
        return Err(AnalyticsError::ValidationError(
            "Cannot calculate statistics for an empty series".to_string(),
        ));
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let coefficient_of_variation = if mean > 0.0 {
        std_dev / mean * 100.0
    } else {
        0.0
    };

    Ok(SeriesStatistics {
        mean,
        variance,
        std_dev,
        coefficient_of_variation,
    })
}

/// Trailing moving average with the given window
///
/// The first `window - 1` positions have no defined average and are
/// omitted from the output, never zero-filled. A series shorter than
/// the window produces an empty output.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(AnalyticsError::InvalidParameter(
            "Moving average window must be positive".to_string(),
        ));
    }

    if values.len() < window {
        return Ok(Vec::new());
    }

    let averages = values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect();

    Ok(averages)
}
