use aquaview_core::analysis::MetricSummary;

/// Prints the end-of-run summary table to stdout.
pub fn print_summary(summaries: &[MetricSummary], total_ticks: u64, total_alerts: u64) {
    println!("\n--- [Run Summary] ---");
    println!("========================================");
    println!("Ticks simulated: {}", total_ticks);
    println!("Alerts raised:   {}", total_alerts);
    println!("----------------------------------------");

    for s in summaries {
        println!(
            "  - {:<18} | min {:>8.2} | max {:>8.2} | mean {:>8.2} | last {:>8.2} | warn {:>4} | crit {:>4}",
            s.metric.label(),
            s.min,
            s.max,
            s.mean,
            s.last,
            s.warning_ticks,
            s.critical_ticks,
        );
    }

    println!("========================================");
}
