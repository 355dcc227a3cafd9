//! Core value types for repair-shop analytics
//!
//! A [`TicketEvent`] is one raw fact per repair ticket, produced by the
//! shop's data layer. The engine buckets events into calendar periods
//! selected by a [`Granularity`] and emits one [`TimeSeriesPoint`] per
//! populated period.

use crate::error::{AnalyticsError, Result};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One raw fact per repair ticket: when it was opened and what it earned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEvent {
    /// When the ticket was opened
    pub occurred_at: DateTime<Utc>,
    /// Revenue attributed to the ticket, non-negative
    pub revenue: f64,
    /// Customer identity, when the data layer supplies one
    pub customer_id: Option<String>,
}

impl TicketEvent {
    /// Create a new event without customer identity
    pub fn new(occurred_at: DateTime<Utc>, revenue: f64) -> Result<Self> {
        if !revenue.is_finite() || revenue < 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "Revenue must be a non-negative finite number, got {}",
                revenue
            )));
        }

        Ok(Self {
            occurred_at,
            revenue,
            customer_id: None,
        })
    }

    /// Create a new event carrying the customer who opened the ticket
    pub fn new_with_customer(
        occurred_at: DateTime<Utc>,
        revenue: f64,
        customer_id: impl Into<String>,
    ) -> Result<Self> {
        let mut event = Self::new(occurred_at, revenue)?;
        event.customer_id = Some(customer_id.into());
        Ok(event)
    }
}

/// Calendar period used to bucket raw events
///
/// Bucket boundaries are calendar-aligned: weeks start on Monday (ISO)
/// and quarters are 3-month blocks starting in January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Granularity {
    /// Calendar start date of the bucket containing `at`
    pub fn bucket_start(&self, at: DateTime<Utc>) -> NaiveDate {
        let date = at.date_naive();
        match self {
            Granularity::Daily => date,
            Granularity::Weekly => {
                date - Duration::days(date.weekday().num_days_from_monday() as i64)
            }
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
            Granularity::Quarterly => {
                let quarter_month = (date.month0() / 3) * 3 + 1;
                date.with_day(1)
                    .and_then(|d| d.with_month(quarter_month))
                    .unwrap_or(date)
            }
            Granularity::Yearly => date.with_day(1).and_then(|d| d.with_month(1)).unwrap_or(date),
        }
    }

    /// Sortable key identifying the bucket that starts at `start`
    pub fn period_key(&self, start: NaiveDate) -> String {
        match self {
            Granularity::Daily | Granularity::Weekly => start.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => start.format("%Y-%m").to_string(),
            Granularity::Quarterly => format!("{}-Q{}", start.year(), start.month0() / 3 + 1),
            Granularity::Yearly => start.format("%Y").to_string(),
        }
    }

    /// Display label for the bucket that starts at `start`
    pub fn label(&self, start: NaiveDate) -> String {
        match self {
            Granularity::Daily => start.format("%b %d, %Y").to_string(),
            Granularity::Weekly => format!("Week of {}", start.format("%b %d, %Y")),
            Granularity::Monthly => start.format("%B %Y").to_string(),
            Granularity::Quarterly => format!("Q{} {}", start.month0() / 3 + 1, start.year()),
            Granularity::Yearly => start.format("%Y").to_string(),
        }
    }

    /// Advance a bucket start date by `steps` whole periods
    pub fn advance(&self, start: NaiveDate, steps: u32) -> Result<NaiveDate> {
        let advanced = match self {
            Granularity::Daily => start.checked_add_signed(Duration::days(steps as i64)),
            Granularity::Weekly => start.checked_add_signed(Duration::weeks(steps as i64)),
            Granularity::Monthly => start.checked_add_months(Months::new(steps)),
            Granularity::Quarterly => start.checked_add_months(Months::new(3 * steps)),
            Granularity::Yearly => start.checked_add_months(Months::new(12 * steps)),
        };

        advanced.ok_or_else(|| {
            AnalyticsError::ForecastingError(format!(
                "Cannot advance {} by {} {} periods",
                start, steps, self
            ))
        })
    }
}

impl FromStr for Granularity {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            "quarterly" => Ok(Granularity::Quarterly),
            "yearly" => Ok(Granularity::Yearly),
            other => Err(AnalyticsError::InvalidParameter(format!(
                "Unsupported granularity: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
            Granularity::Yearly => "yearly",
        };
        write!(f, "{}", name)
    }
}

/// Aggregated totals for one populated calendar period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Sortable period identifier, e.g. `2024-03` or `2024-Q1`
    pub period_key: String,
    /// Calendar start date of the period
    pub period_start: NaiveDate,
    /// Display label, e.g. `March 2024`
    pub label: String,
    /// Number of tickets opened in the period
    pub ticket_count: u64,
    /// Distinct customers among tickets that carried an identity
    pub unique_customers: u64,
    /// Revenue summed over the period's tickets
    pub total_revenue: f64,
}
