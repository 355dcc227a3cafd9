//! Trend classification for ordered series

use crate::error::{AnalyticsError, Result};
use crate::stats::{moving_average, DEFAULT_MA_WINDOW};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative-change band inside which a series counts as stable
pub const TREND_BAND: f64 = 0.05;

/// Direction of a series over its most recent periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        };
        write!(f, "{}", name)
    }
}

/// Classify the trend of an ordered series using the default
/// moving-average window
pub fn classify_trend(values: &[f64]) -> Result<TrendDirection> {
    classify_trend_with_window(values, DEFAULT_MA_WINDOW)
}

/// Classify the trend of an ordered series
///
/// The series is smoothed with a trailing moving average of
/// `min(window, n)` before comparing its last two values; when the
/// smoothed series is too short to compare, the raw values are compared
/// directly. Movement within [`TREND_BAND`] of the previous value is
/// reported as stable.
pub fn classify_trend_with_window(values: &[f64], window: usize) -> Result<TrendDirection> {
    if values.len() < 2 {
        return Err(AnalyticsError::ValidationError(
            "Trend classification needs at least 2 values".to_string(),
        ));
    }

    let effective_window = window.min(values.len());
    let smoothed = moving_average(values, effective_window)?;

    // A single smoothed point leaves nothing to compare against
    let series: &[f64] = if smoothed.len() >= 2 { &smoothed } else { values };

    let last = series[series.len() - 1];
    let prev = series[series.len() - 2];

    if last > prev * (1.0 + TREND_BAND) {
        Ok(TrendDirection::Up)
    } else if last < prev * (1.0 - TREND_BAND) {
        Ok(TrendDirection::Down)
    } else {
        Ok(TrendDirection::Stable)
    }
}
