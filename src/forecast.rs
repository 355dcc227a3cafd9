//! Short-term forecast generation with confidence bands

use crate::data::{Granularity, TimeSeriesPoint};
use crate::error::{AnalyticsError, Result};
use crate::regression::{correlate, index_series};
use crate::stats::series_statistics;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default number of future periods to project
pub const DEFAULT_HORIZON: usize = 3;

/// Default width of the confidence band in standard deviations
pub const DEFAULT_BAND_MULTIPLIER: f64 = 2.0;

/// Minimum number of observed periods required before forecasting
pub const MIN_FORECAST_SAMPLES: usize = 3;

/// Tunable parameters for forecast generation
///
/// The defaults match the values the shop dashboards historically used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Number of future periods to project
    pub horizon: usize,
    /// Average revenue earned per ticket, used to derive revenue
    /// figures from predicted ticket counts. Predicted revenue is not
    /// independently regressed; it is the ticket forecast scaled by
    /// this constant.
    pub avg_revenue_per_ticket: f64,
    /// Width of the confidence band in standard deviations of the
    /// observed ticket counts
    pub band_multiplier: f64,
}

impl ForecastSettings {
    /// Create settings with the default horizon and band width
    pub fn new(avg_revenue_per_ticket: f64) -> Result<Self> {
        if !avg_revenue_per_ticket.is_finite() || avg_revenue_per_ticket < 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "Average revenue per ticket must be a non-negative finite number, got {}",
                avg_revenue_per_ticket
            )));
        }

        Ok(Self {
            horizon: DEFAULT_HORIZON,
            avg_revenue_per_ticket,
            band_multiplier: DEFAULT_BAND_MULTIPLIER,
        })
    }

    /// Replace the forecast horizon
    pub fn with_horizon(mut self, horizon: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(AnalyticsError::InvalidParameter(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }

        self.horizon = horizon;
        Ok(self)
    }

    /// Replace the confidence band width
    pub fn with_band_multiplier(mut self, band_multiplier: f64) -> Result<Self> {
        if !band_multiplier.is_finite() || band_multiplier <= 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "Band multiplier must be a positive finite number, got {}",
                band_multiplier
            )));
        }

        self.band_multiplier = band_multiplier;
        Ok(self)
    }
}

/// Projected totals for one future period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Display label of the projected period
    pub period_label: String,
    pub predicted_ticket_count: u64,
    pub predicted_revenue: f64,
    pub ticket_lower_bound: u64,
    pub ticket_upper_bound: u64,
    pub revenue_lower_bound: f64,
    pub revenue_upper_bound: f64,
}

/// Project the observed series forward by the configured horizon
///
/// Fits a least-squares line to the observed ticket counts over their
/// period index and extrapolates it, with bounds at
/// `band_multiplier` standard deviations of the observed counts,
/// clamped at zero. Fewer than [`MIN_FORECAST_SAMPLES`] observed
/// periods yield an empty forecast; sparse history is a normal state
/// for a new shop, not an error.
pub fn forecast_series(
    points: &[TimeSeriesPoint],
    granularity: Granularity,
    settings: &ForecastSettings,
) -> Result<Vec<ForecastPoint>> {
    let n = points.len();
    if n < MIN_FORECAST_SAMPLES {
        debug!(
            "Skipping forecast: {} observed periods, need {}",
            n, MIN_FORECAST_SAMPLES
        );
        return Ok(Vec::new());
    }

    let counts: Vec<f64> = points.iter().map(|p| p.ticket_count as f64).collect();
    let fit = correlate(&index_series(n), &counts)?.regression;
    let band = settings.band_multiplier * series_statistics(&counts)?.std_dev;

    let last_start = points[n - 1].period_start;
    let mut forecast = Vec::with_capacity(settings.horizon);

    for step in 1..=settings.horizon {
        let index = (n + step) as f64;
        let predicted = (fit.slope * index + fit.intercept).round().max(0.0);
        let lower = (predicted - band).round().max(0.0);
        let upper = (predicted + band).round();

        let start = granularity.advance(last_start, step as u32)?;

        forecast.push(ForecastPoint {
            period_label: granularity.label(start),
            predicted_ticket_count: predicted as u64,
            predicted_revenue: predicted * settings.avg_revenue_per_ticket,
            ticket_lower_bound: lower as u64,
            ticket_upper_bound: upper as u64,
            revenue_lower_bound: lower * settings.avg_revenue_per_ticket,
            revenue_upper_bound: upper * settings.avg_revenue_per_ticket,
        });
    }

    debug!(
        "Forecast {} {} periods from {} observed (slope {:.3})",
        forecast.len(),
        granularity,
        n,
        fit.slope
    );

    Ok(forecast)
}
