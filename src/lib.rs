//! # Repair Analytics
//!
//! A Rust library for time series analytics and forecasting over
//! repair-shop ticket and revenue data.
//!
//! ## Features
//!
//! - Calendar-period aggregation of raw ticket events (daily, weekly,
//!   monthly, quarterly, yearly)
//! - Descriptive statistics (mean, variance, coefficient of variation)
//! - Trend classification with moving-average smoothing
//! - Pearson correlation and linear regression between ticket volume
//!   and revenue
//! - Period-over-period growth comparison
//! - Short-term forecasts with confidence bands
//!
//! The engine is purely computational: every function is synchronous
//! and side-effect-free, never mutates its inputs, and keeps no state
//! between calls, so it is safe to invoke concurrently from the web
//! dashboard and the mobile app on every refresh. Degenerate inputs
//! that are normal business states (an empty history, a quiet period,
//! zero revenue) produce well-defined fallback values, never errors or
//! `NaN`.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use repair_analytics::{
//!     summarize, ForecastSettings, Granularity, TicketEvent, TrendDirection,
//! };
//!
//! # fn main() -> repair_analytics::Result<()> {
//! let events = vec![
//!     TicketEvent::new_with_customer(
//!         Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap(),
//!         89.0,
//!         "c-001",
//!     )?,
//!     TicketEvent::new_with_customer(
//!         Utc.with_ymd_and_hms(2024, 3, 5, 16, 30, 0).unwrap(),
//!         129.0,
//!         "c-002",
//!     )?,
//!     TicketEvent::new(Utc.with_ymd_and_hms(2024, 3, 6, 11, 15, 0).unwrap(), 59.0)?,
//! ];
//!
//! // Average revenue per ticket comes from shop configuration
//! let settings = ForecastSettings::new(92.0)?;
//! let summary = summarize(&events, Granularity::Daily, &settings)?;
//!
//! assert_eq!(summary.series.len(), 3);
//! assert_eq!(summary.comparisons.len(), 2);
//! assert_eq!(summary.forecast.len(), settings.horizon);
//! assert_eq!(summary.trend, Some(TrendDirection::Stable));
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod comparison;
pub mod data;
pub mod error;
pub mod forecast;
pub mod regression;
pub mod stats;
pub mod summary;
pub mod trend;

// Re-export commonly used types
pub use crate::aggregation::aggregate_events;
pub use crate::comparison::{compare_periods, PeriodComparison};
pub use crate::data::{Granularity, TicketEvent, TimeSeriesPoint};
pub use crate::error::{AnalyticsError, Result};
pub use crate::forecast::{forecast_series, ForecastPoint, ForecastSettings};
pub use crate::regression::{correlate, CorrelationResult, LinearFit};
pub use crate::stats::{moving_average, series_statistics, SeriesStatistics};
pub use crate::summary::{summarize, AnalyticsSummary};
pub use crate::trend::{classify_trend, classify_trend_with_window, TrendDirection};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
