//! This module is responsible for generating all visualizations from run log data.

use anyhow::Result;
use aquaview_core::{analysis, logger::LogEntry};
use aquaview_schemas::alert::Alert;
use plotters::prelude::*;

/// The main function to generate and save all plots for a run.
pub fn generate_all_plots(output_dir: &str, log_path: &str) -> Result<()> {
    tracing::info!("Generating charts from run data");

    let entries = analysis::parse_log_file(log_path)?;
    if entries.is_empty() {
        tracing::warn!("No data to plot");
        return Ok(());
    }

    plot_water_quality(output_dir, &entries)?;
    plot_circulation(output_dir, &entries)?;
    plot_alert_timeline(output_dir, &entries)?;

    tracing::info!("Charts saved to '{}'", output_dir);
    Ok(())
}

/// Line chart of the water-quality walks: temperature, pH, dissolved oxygen.
fn plot_water_quality(output_dir: &str, entries: &[LogEntry]) -> Result<()> {
    let path = format!("{}/1_water_quality.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = entries.last().map_or(1, |e| e.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Water Quality Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..30f64)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Value")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            entries.iter().map(|e| (e.tick, e.water_temp)),
            RED.stroke_width(2),
        ))?
        .label("Water Temperature (°C)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(LineSeries::new(
            entries.iter().map(|e| (e.tick, e.ph)),
            GREEN.stroke_width(2),
        ))?
        .label("pH")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .draw_series(LineSeries::new(
            entries.iter().map(|e| (e.tick, e.dissolved_o2)),
            BLUE.stroke_width(2),
        ))?
        .label("Dissolved O2 (mg/L)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Line chart of tank level and loop flow rate.
fn plot_circulation(output_dir: &str, entries: &[LogEntry]) -> Result<()> {
    let path = format!("{}/2_circulation.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = entries.last().map_or(1, |e| e.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Circulation Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..max_tick, 0f64..100f64)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .y_desc("Value")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            entries.iter().map(|e| (e.tick, e.water_level)),
            BLUE.stroke_width(2),
        ))?
        .label("Water Level (%)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            entries.iter().map(|e| (e.tick, e.flow_rate)),
            MAGENTA.stroke_width(2),
        ))?
        .label("Flow Rate (L/min)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Histogram of the ticks on which at least one alert fired.
fn plot_alert_timeline(output_dir: &str, entries: &[LogEntry]) -> Result<()> {
    let path = format!("{}/3_alert_timeline.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 256)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_tick = entries.last().map_or(1, |e| e.tick);

    let mut chart = ChartBuilder::on(&root)
        .caption("Alert Timeline", ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(20)
        .build_cartesian_2d(0u64..max_tick, 0..2i32)?;

    chart
        .configure_mesh()
        .x_desc("Tick")
        .disable_y_axis()
        .draw()?;

    let alert_ticks: Vec<u64> = entries
        .iter()
        .filter_map(|e| {
            let alerts: Vec<Alert> = serde_json::from_str(&e.alerts_json).ok()?;
            if alerts.is_empty() {
                None
            } else {
                Some(e.tick)
            }
        })
        .collect();

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RED.filled())
            .data(alert_ticks.iter().map(|tick| (*tick, 1))),
    )?;

    root.present()?;
    Ok(())
}
