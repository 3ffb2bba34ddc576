use crate::telemetry::state::TelemetryState;
use aquaview_schemas::{metric::Metric, status::Status};
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs;

/// One CSV row per tick. Per-metric statuses and the tick's alerts are
/// embedded as JSON columns so the flat file stays one row per snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub tick: u64,
    pub timestamp: String,
    pub water_temp: f64,
    pub ph: f64,
    pub dissolved_o2: f64,
    pub water_level: f64,
    pub flow_rate: f64,
    pub humidity: f64,
    pub ammonia: f64,
    pub light_intensity: f64,
    pub statuses_json: String,
    pub alerts_json: String,
}

pub struct TimeSeriesLogger {
    writer: Writer<fs::File>,
}

impl TimeSeriesLogger {
    pub fn new(path: &str) -> Result<Self, csv::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_state(
        &mut self,
        state: &TelemetryState,
        statuses: &[(Metric, Status)],
    ) -> Result<(), anyhow::Error> {
        let statuses_json = serde_json::to_string(
            &statuses
                .iter()
                .map(|(metric, status)| (metric.wire_name().to_string(), serde_json::json!(status)))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        )?;
        let alerts_json = serde_json::to_string(&state.alerts)?;

        let reading = &state.reading;
        let entry = LogEntry {
            tick: state.tick,
            timestamp: chrono::Utc::now().to_rfc3339(),
            water_temp: reading.water_temp,
            ph: reading.ph,
            dissolved_o2: reading.dissolved_o2,
            water_level: reading.water_level,
            flow_rate: reading.flow_rate,
            humidity: reading.humidity,
            ammonia: reading.ammonia,
            light_intensity: reading.light_intensity,
            statuses_json,
            alerts_json,
        };

        self.writer.serialize(entry)?;
        self.writer.flush()?;
        Ok(())
    }
}
