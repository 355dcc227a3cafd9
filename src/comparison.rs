//! Period-over-period growth comparison

use crate::data::TimeSeriesPoint;
use serde::{Deserialize, Serialize};

/// Growth between two consecutive aggregated periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    /// Label of the later period in the pair
    pub period_label: String,
    pub current_ticket_count: u64,
    pub previous_ticket_count: u64,
    pub current_revenue: f64,
    pub previous_revenue: f64,
    /// Ticket growth as a percentage of the previous period
    pub ticket_growth_rate: f64,
    /// Revenue growth as a percentage of the previous period
    pub revenue_growth_rate: f64,
}

/// Growth rates between each pair of consecutive periods
///
/// Returns `n - 1` comparisons for `n` input points; fewer than 2
/// points yield no comparisons. Growth from a zero baseline is reported
/// as 100% when the current period has any activity and 0% otherwise,
/// keeping infinities out of downstream consumers.
pub fn compare_periods(points: &[TimeSeriesPoint]) -> Vec<PeriodComparison> {
    points
        .windows(2)
        .map(|pair| {
            let prev = &pair[0];
            let curr = &pair[1];

            PeriodComparison {
                period_label: curr.label.clone(),
                current_ticket_count: curr.ticket_count,
                previous_ticket_count: prev.ticket_count,
                current_revenue: curr.total_revenue,
                previous_revenue: prev.total_revenue,
                ticket_growth_rate: growth_rate(prev.ticket_count as f64, curr.ticket_count as f64),
                revenue_growth_rate: growth_rate(prev.total_revenue, curr.total_revenue),
            }
        })
        .collect()
}

fn growth_rate(previous: f64, current: f64) -> f64 {
    if previous != 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        100.0
    } else {
        0.0
    }
}
