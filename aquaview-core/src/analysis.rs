use crate::{error::AquaviewError, logger::LogEntry};
use aquaview_schemas::{metric::Metric, status::Status};
use std::collections::HashMap;

/// Aggregated view of one metric over a finished run.
#[derive(Debug, Clone)]
pub struct MetricSummary {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub last: f64,
    pub warning_ticks: u64,
    pub critical_ticks: u64,
}

/// Reads a run's CSV log back into memory.
pub fn parse_log_file(log_path: &str) -> Result<Vec<LogEntry>, AquaviewError> {
    let mut reader = csv::Reader::from_path(log_path)
        .map_err(|e| AquaviewError::CsvError(log_path.to_string(), e))?;
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let record: LogEntry =
            result.map_err(|e| AquaviewError::CsvError(log_path.to_string(), e))?;
        entries.push(record);
    }
    Ok(entries)
}

fn metric_value(entry: &LogEntry, metric: Metric) -> f64 {
    match metric {
        Metric::WaterTemp => entry.water_temp,
        Metric::Ph => entry.ph,
        Metric::DissolvedO2 => entry.dissolved_o2,
        Metric::WaterLevel => entry.water_level,
        Metric::FlowRate => entry.flow_rate,
        Metric::Humidity => entry.humidity,
        Metric::Ammonia => entry.ammonia,
        Metric::LightIntensity => entry.light_intensity,
    }
}

/// Produces one summary per metric that appears in the statuses column.
pub fn summarize(entries: &[LogEntry]) -> Result<Vec<MetricSummary>, AquaviewError> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let mut warning_ticks: HashMap<Metric, u64> = HashMap::new();
    let mut critical_ticks: HashMap<Metric, u64> = HashMap::new();
    let mut seen: HashMap<Metric, bool> = HashMap::new();

    for entry in entries {
        let statuses: HashMap<String, Status> = serde_json::from_str(&entry.statuses_json)?;
        for metric in Metric::ALL {
            if let Some(status) = statuses.get(metric.wire_name()) {
                seen.insert(metric, true);
                match status {
                    Status::Warning => *warning_ticks.entry(metric).or_insert(0) += 1,
                    Status::Critical => *critical_ticks.entry(metric).or_insert(0) += 1,
                    Status::Good => {}
                }
            }
        }
    }

    let mut summaries = Vec::new();
    for metric in Metric::ALL {
        if !seen.contains_key(&metric) {
            continue;
        }
        let values: Vec<f64> = entries.iter().map(|e| metric_value(e, metric)).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let last = *values.last().unwrap_or(&0.0);

        summaries.push(MetricSummary {
            metric,
            min,
            max,
            mean,
            last,
            warning_ticks: warning_ticks.get(&metric).copied().unwrap_or(0),
            critical_ticks: critical_ticks.get(&metric).copied().unwrap_or(0),
        });
    }

    Ok(summaries)
}

/// Total number of alert records across a run.
pub fn count_alerts(entries: &[LogEntry]) -> Result<u64, AquaviewError> {
    let mut total = 0u64;
    for entry in entries {
        let alerts: Vec<aquaview_schemas::alert::Alert> =
            serde_json::from_str(&entry.alerts_json)?;
        total += alerts.len() as u64;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tick: u64, water_temp: f64, statuses_json: &str, alerts_json: &str) -> LogEntry {
        LogEntry {
            tick,
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            water_temp,
            ph: 6.8,
            dissolved_o2: 7.1,
            water_level: 80.0,
            flow_rate: 4.5,
            humidity: 65.0,
            ammonia: 0.25,
            light_intensity: 600.0,
            statuses_json: statuses_json.to_string(),
            alerts_json: alerts_json.to_string(),
        }
    }

    #[test]
    fn summarize_aggregates_per_metric() {
        let entries = vec![
            entry(1, 22.0, r#"{"waterTemp":"good"}"#, "[]"),
            entry(2, 24.0, r#"{"waterTemp":"warning"}"#, "[]"),
            entry(3, 23.0, r#"{"waterTemp":"critical"}"#, "[]"),
        ];
        let summaries = summarize(&entries).unwrap();
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.metric, Metric::WaterTemp);
        assert_eq!(s.min, 22.0);
        assert_eq!(s.max, 24.0);
        assert!((s.mean - 23.0).abs() < 1e-9);
        assert_eq!(s.last, 23.0);
        assert_eq!(s.warning_ticks, 1);
        assert_eq!(s.critical_ticks, 1);
    }

    #[test]
    fn empty_run_summarizes_to_nothing() {
        assert!(summarize(&[]).unwrap().is_empty());
    }

    #[test]
    fn alert_counting_reads_the_json_column() {
        let alerts = r#"[{"metric":"ph","value":7.5,"status":"critical","message":"pH at 7.50 is critical","tick":2}]"#;
        let entries = vec![
            entry(1, 23.0, r#"{"ph":"good"}"#, "[]"),
            entry(2, 23.0, r#"{"ph":"critical"}"#, alerts),
        ];
        assert_eq!(count_alerts(&entries).unwrap(), 1);
    }
}
