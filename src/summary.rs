//! One-call analytics summary for dashboard refreshes

use crate::aggregation::aggregate_events;
use crate::comparison::{compare_periods, PeriodComparison};
use crate::data::{Granularity, TicketEvent, TimeSeriesPoint};
use crate::error::Result;
use crate::forecast::{forecast_series, ForecastPoint, ForecastSettings};
use crate::regression::{correlate, CorrelationResult};
use crate::stats::{series_statistics, SeriesStatistics};
use crate::trend::{classify_trend, TrendDirection};
use serde::{Deserialize, Serialize};

/// Everything a dashboard refresh needs, computed in one pass
///
/// Analytics fields are `None` exactly when the series is too short for
/// them: statistics need one period, trend and correlation need two.
/// The aggregated series omits empty periods; consumers that want a
/// gap-free chart axis must pad it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Aggregated series, ascending by period
    pub series: Vec<TimeSeriesPoint>,
    /// Volatility statistics over ticket counts
    pub statistics: Option<SeriesStatistics>,
    /// Direction of ticket volume over recent periods
    pub trend: Option<TrendDirection>,
    /// Correlation of ticket volume with revenue
    pub correlation: Option<CorrelationResult>,
    /// Growth between consecutive periods
    pub comparisons: Vec<PeriodComparison>,
    /// Projected future periods, empty when history is too short
    pub forecast: Vec<ForecastPoint>,
}

/// Aggregate raw events and derive the full set of analytics over them
pub fn summarize(
    events: &[TicketEvent],
    granularity: Granularity,
    settings: &ForecastSettings,
) -> Result<AnalyticsSummary> {
    let series = aggregate_events(events, granularity);

    let counts: Vec<f64> = series.iter().map(|p| p.ticket_count as f64).collect();
    let revenue: Vec<f64> = series.iter().map(|p| p.total_revenue).collect();

    let statistics = if counts.is_empty() {
        None
    } else {
        Some(series_statistics(&counts)?)
    };

    let (trend, correlation) = if counts.len() < 2 {
        (None, None)
    } else {
        (
            Some(classify_trend(&counts)?),
            Some(correlate(&counts, &revenue)?),
        )
    };

    let comparisons = compare_periods(&series);
    let forecast = forecast_series(&series, granularity, settings)?;

    Ok(AnalyticsSummary {
        series,
        statistics,
        trend,
        correlation,
        comparisons,
        forecast,
    })
}
