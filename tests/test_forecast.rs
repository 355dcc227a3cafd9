use chrono::NaiveDate;
use repair_analytics::forecast::DEFAULT_HORIZON;
use repair_analytics::{forecast_series, ForecastSettings, Granularity, TimeSeriesPoint};

fn monthly_point(y: i32, m: u32, tickets: u64) -> TimeSeriesPoint {
    let start = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
    TimeSeriesPoint {
        period_key: Granularity::Monthly.period_key(start),
        period_start: start,
        label: Granularity::Monthly.label(start),
        ticket_count: tickets,
        unique_customers: tickets,
        total_revenue: tickets as f64 * 80.0,
    }
}

#[test]
fn test_minimum_sample_guard() {
    let settings = ForecastSettings::new(80.0).unwrap();

    let two_points = vec![monthly_point(2024, 1, 10), monthly_point(2024, 2, 12)];
    let forecast = forecast_series(&two_points, Granularity::Monthly, &settings).unwrap();
    assert!(forecast.is_empty());

    let three_points = vec![
        monthly_point(2024, 1, 10),
        monthly_point(2024, 2, 12),
        monthly_point(2024, 3, 11),
    ];
    let forecast = forecast_series(&three_points, Granularity::Monthly, &settings).unwrap();
    assert_eq!(forecast.len(), DEFAULT_HORIZON);
}

#[test]
fn test_linear_history_extrapolates() {
    let settings = ForecastSettings::new(80.0).unwrap();
    let points = vec![
        monthly_point(2024, 1, 10),
        monthly_point(2024, 2, 20),
        monthly_point(2024, 3, 30),
    ];

    let forecast = forecast_series(&points, Granularity::Monthly, &settings).unwrap();

    // Slope 10 per period continues from 30
    assert_eq!(forecast[0].predicted_ticket_count, 40);
    assert_eq!(forecast[1].predicted_ticket_count, 50);
    assert_eq!(forecast[2].predicted_ticket_count, 60);

    // Future labels advance the calendar month by month
    assert_eq!(forecast[0].period_label, "April 2024");
    assert_eq!(forecast[1].period_label, "May 2024");
    assert_eq!(forecast[2].period_label, "June 2024");

    // Revenue is the ticket forecast scaled by average revenue
    assert!((forecast[0].predicted_revenue - 40.0 * 80.0).abs() < 1e-9);
    assert!((forecast[2].revenue_upper_bound - forecast[2].ticket_upper_bound as f64 * 80.0).abs() < 1e-9);
}

#[test]
fn test_bounds_bracket_prediction_and_stay_non_negative() {
    let settings = ForecastSettings::new(80.0).unwrap();

    // Steeply declining history drives raw predictions below zero
    let points = vec![
        monthly_point(2024, 1, 30),
        monthly_point(2024, 2, 20),
        monthly_point(2024, 3, 10),
    ];

    let forecast = forecast_series(&points, Granularity::Monthly, &settings).unwrap();

    for point in &forecast {
        assert!(point.ticket_lower_bound <= point.predicted_ticket_count);
        assert!(point.predicted_ticket_count <= point.ticket_upper_bound);
        assert!(point.revenue_lower_bound <= point.predicted_revenue);
        assert!(point.predicted_revenue <= point.revenue_upper_bound);
        assert!(point.revenue_lower_bound >= 0.0);
    }

    // Index 5 extrapolates to -10 tickets, clamped to zero
    assert_eq!(forecast[1].predicted_ticket_count, 0);
    assert_eq!(forecast[1].ticket_lower_bound, 0);
}

#[test]
fn test_flat_history_forecasts_flat() {
    let settings = ForecastSettings::new(80.0).unwrap();
    let points = vec![
        monthly_point(2024, 1, 15),
        monthly_point(2024, 2, 15),
        monthly_point(2024, 3, 15),
        monthly_point(2024, 4, 15),
    ];

    let forecast = forecast_series(&points, Granularity::Monthly, &settings).unwrap();

    for point in &forecast {
        // Degenerate spread falls back to a zero fit; a constant series
        // has zero deviation, so the band collapses onto the prediction
        assert_eq!(point.ticket_lower_bound, point.predicted_ticket_count);
        assert_eq!(point.ticket_upper_bound, point.predicted_ticket_count);
    }
}

#[test]
fn test_horizon_and_band_overrides() {
    let settings = ForecastSettings::new(80.0)
        .unwrap()
        .with_horizon(5)
        .unwrap()
        .with_band_multiplier(1.0)
        .unwrap();

    let points = vec![
        monthly_point(2024, 1, 10),
        monthly_point(2024, 2, 20),
        monthly_point(2024, 3, 30),
    ];

    let forecast = forecast_series(&points, Granularity::Monthly, &settings).unwrap();
    assert_eq!(forecast.len(), 5);

    // Standard deviation of [10, 20, 30] is ~8.16; a 1-sigma band
    // around 40 rounds to [32, 48]
    assert_eq!(forecast[0].ticket_lower_bound, 32);
    assert_eq!(forecast[0].ticket_upper_bound, 48);
}

#[test]
fn test_quarterly_labels_cross_year_boundary() {
    let settings = ForecastSettings::new(80.0).unwrap();

    let points: Vec<TimeSeriesPoint> = [(2024, 4, 8), (2024, 7, 9), (2024, 10, 12)]
        .iter()
        .map(|&(y, m, tickets)| {
            let start = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
            TimeSeriesPoint {
                period_key: Granularity::Quarterly.period_key(start),
                period_start: start,
                label: Granularity::Quarterly.label(start),
                ticket_count: tickets,
                unique_customers: tickets,
                total_revenue: tickets as f64 * 80.0,
            }
        })
        .collect();

    let forecast = forecast_series(&points, Granularity::Quarterly, &settings).unwrap();

    assert_eq!(forecast[0].period_label, "Q1 2025");
    assert_eq!(forecast[1].period_label, "Q2 2025");
    assert_eq!(forecast[2].period_label, "Q3 2025");
}
