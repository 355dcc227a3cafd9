use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use repair_analytics::{
    aggregate_events, classify_trend, compare_periods, correlate, forecast_series,
    series_statistics, ForecastSettings, Granularity, TicketEvent, TrendDirection,
};

// Ten days of steadily growing ticket volume at a flat average price
fn growing_shop() -> Vec<TicketEvent> {
    let mut events = Vec::new();

    for day in 1..=10_u32 {
        for slot in 0..day {
            let opened = Utc.with_ymd_and_hms(2024, 6, day, 8 + slot % 9, 30, 0).unwrap();
            let customer = format!("c-{:02}-{}", day, slot);
            events.push(TicketEvent::new_with_customer(opened, 50.0, customer).unwrap());
        }
    }

    events
}

#[test]
fn test_full_analytics_workflow() {
    let events = growing_shop();

    // 1. Aggregate into a daily series
    let series = aggregate_events(&events, Granularity::Daily);
    assert_eq!(series.len(), 10);
    assert_eq!(series[0].ticket_count, 1);
    assert_eq!(series[9].ticket_count, 10);

    // 2. Describe the volatility of daily volume
    let counts: Vec<f64> = series.iter().map(|p| p.ticket_count as f64).collect();
    let stats = series_statistics(&counts).unwrap();
    assert!((stats.mean - 5.5).abs() < 1e-9);
    assert!(stats.std_dev > 0.0);
    assert!(stats.coefficient_of_variation > 0.0);

    // 3. Volume is rising
    let trend = classify_trend(&counts).unwrap();
    assert_eq!(trend, TrendDirection::Up);

    // 4. Volume and revenue move together at a flat ticket price
    let revenue: Vec<f64> = series.iter().map(|p| p.total_revenue).collect();
    let correlation = correlate(&counts, &revenue).unwrap();
    assert!((correlation.coefficient - 1.0).abs() < 1e-9);
    assert!((correlation.regression.slope - 50.0).abs() < 1e-9);

    // 5. Every consecutive day grew
    let comparisons = compare_periods(&series);
    assert_eq!(comparisons.len(), 9);
    assert!(comparisons.iter().all(|c| c.ticket_growth_rate > 0.0));

    // 6. The forecast continues the unit-per-day slope
    let settings = ForecastSettings::new(50.0).unwrap();
    let forecast = forecast_series(&series, Granularity::Daily, &settings).unwrap();
    assert_eq!(forecast.len(), settings.horizon);
    assert_eq!(forecast[0].predicted_ticket_count, 11);
    assert_eq!(forecast[1].predicted_ticket_count, 12);
    assert_eq!(forecast[2].predicted_ticket_count, 13);
    assert_eq!(forecast[0].period_label, "Jun 11, 2024");

    for point in &forecast {
        assert!(point.ticket_lower_bound <= point.predicted_ticket_count);
        assert!(point.predicted_ticket_count <= point.ticket_upper_bound);
        assert!((point.predicted_revenue - point.predicted_ticket_count as f64 * 50.0).abs() < 1e-9);
    }
}

#[test]
fn test_quiet_shop_stays_error_free() {
    // A brand-new shop: two quiet days, no revenue yet
    let events = vec![
        TicketEvent::new(Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap(), 0.0).unwrap(),
        TicketEvent::new(Utc.with_ymd_and_hms(2024, 6, 4, 11, 0, 0).unwrap(), 0.0).unwrap(),
    ];

    let series = aggregate_events(&events, Granularity::Daily);
    let counts: Vec<f64> = series.iter().map(|p| p.ticket_count as f64).collect();
    let revenue: Vec<f64> = series.iter().map(|p| p.total_revenue).collect();

    // Constant volume, zero revenue: every statistic stays finite
    let stats = series_statistics(&revenue).unwrap();
    assert_eq!(stats.coefficient_of_variation, 0.0);

    let correlation = correlate(&counts, &revenue).unwrap();
    assert_eq!(correlation.coefficient, 0.0);
    assert_eq!(correlation.regression.slope, 0.0);
    assert_eq!(correlation.regression.intercept, 0.0);

    let comparisons = compare_periods(&series);
    assert_eq!(comparisons[0].revenue_growth_rate, 0.0);

    // Two observed periods are below the forecast minimum
    let settings = ForecastSettings::new(0.0).unwrap();
    let forecast = forecast_series(&series, Granularity::Daily, &settings).unwrap();
    assert!(forecast.is_empty());
}
