//! Calendar-period aggregation of raw ticket events

use crate::data::{Granularity, TicketEvent, TimeSeriesPoint};
use log::debug;
use std::collections::{BTreeMap, HashSet};

#[derive(Default)]
struct Bucket {
    ticket_count: u64,
    total_revenue: f64,
    customers: HashSet<String>,
}

/// Bucket raw events into calendar periods
///
/// Emits one [`TimeSeriesPoint`] per populated period, ascending by
/// period start. Periods with no events are omitted, not zero-filled;
/// callers that need a gap-free axis must pad explicitly. Input order
/// does not matter and an empty input yields an empty series.
pub fn aggregate_events(events: &[TicketEvent], granularity: Granularity) -> Vec<TimeSeriesPoint> {
    let mut buckets: BTreeMap<chrono::NaiveDate, Bucket> = BTreeMap::new();

    for event in events {
        let start = granularity.bucket_start(event.occurred_at);
        let bucket = buckets.entry(start).or_default();

        bucket.ticket_count += 1;
        bucket.total_revenue += event.revenue;
        if let Some(customer) = &event.customer_id {
            bucket.customers.insert(customer.clone());
        }
    }

    debug!(
        "Aggregated {} events into {} {} buckets",
        events.len(),
        buckets.len(),
        granularity
    );

    buckets
        .into_iter()
        .map(|(start, bucket)| TimeSeriesPoint {
            period_key: granularity.period_key(start),
            period_start: start,
            label: granularity.label(start),
            ticket_count: bucket.ticket_count,
            unique_customers: bucket.customers.len() as u64,
            total_revenue: bucket.total_revenue,
        })
        .collect()
}
