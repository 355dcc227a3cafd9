use chrono::{Duration, TimeZone, Utc};
use repair_analytics::{summarize, ForecastSettings, Granularity, TicketEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Repair Analytics: Shop Dashboard Example");
    println!("========================================\n");

    // Create sample data
    println!("Creating sample ticket history...");
    let events = create_sample_events()?;
    println!("Sample history created: {} tickets\n", events.len());

    // Configure forecasting the way the dashboard does: the average
    // revenue per ticket comes from shop configuration
    let settings = ForecastSettings::new(92.5)?.with_horizon(4)?;

    // Run the full analytics pass for a weekly view
    println!("Running weekly analytics...");
    let summary = summarize(&events, Granularity::Weekly, &settings)?;

    println!("\nAggregated series:");
    for point in &summary.series {
        println!(
            "  {:<22} {:>3} tickets  {:>3} customers  {:>9.2} revenue",
            point.label, point.ticket_count, point.unique_customers, point.total_revenue
        );
    }

    if let Some(stats) = &summary.statistics {
        println!("\nVolume statistics:");
        println!("  Mean:      {:.2} tickets/week", stats.mean);
        println!("  Std dev:   {:.2}", stats.std_dev);
        println!("  CV:        {:.1}%", stats.coefficient_of_variation);
    }

    if let Some(trend) = summary.trend {
        println!("\nVolume trend: {}", trend);
    }

    if let Some(correlation) = summary.correlation {
        println!(
            "Volume/revenue correlation: {:.3} (slope {:.2} per ticket)",
            correlation.coefficient, correlation.regression.slope
        );
    }

    println!("\nWeek-over-week growth:");
    for comparison in &summary.comparisons {
        println!(
            "  {:<22} tickets {:>+7.1}%  revenue {:>+7.1}%",
            comparison.period_label, comparison.ticket_growth_rate, comparison.revenue_growth_rate
        );
    }

    println!("\nForecast (next {} weeks):", settings.horizon);
    for point in &summary.forecast {
        println!(
            "  {:<22} {:>3} tickets  [{} .. {}]  {:>9.2} revenue",
            point.period_label,
            point.predicted_ticket_count,
            point.ticket_lower_bound,
            point.ticket_upper_bound,
            point.predicted_revenue
        );
    }

    println!("\nDashboard refresh complete!");

    Ok(())
}

/// Create eight weeks of tickets with growing volume and a weekend lull
fn create_sample_events() -> Result<Vec<TicketEvent>, Box<dyn std::error::Error>> {
    let mut events = Vec::new();
    let opening_day = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();

    for week in 0..8_i64 {
        // Volume grows a little every week
        let daily_tickets = 2 + week / 2;

        for day in 0..6_i64 {
            for slot in 0..daily_tickets {
                let opened = opening_day + Duration::days(week * 7 + day) + Duration::hours(slot);
                let revenue = 60.0 + (slot as f64) * 25.0;
                let customer = format!("c-{}{}{}", week, day, slot);

                events.push(TicketEvent::new_with_customer(opened, revenue, customer)?);
            }
        }
    }

    Ok(events)
}
