use crate::metric::Metric;
use serde::{Deserialize, Serialize};

/// One immutable snapshot of all sensor values, produced once per tick.
///
/// The previous snapshot is the sole input to computing the next one; a
/// snapshot is always replaced wholesale, never partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub water_temp: f64,
    pub ph: f64,
    pub dissolved_o2: f64,
    pub water_level: f64,
    pub flow_rate: f64,
    pub humidity: f64,
    pub ammonia: f64,
    pub light_intensity: f64,
}

impl Reading {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::WaterTemp => self.water_temp,
            Metric::Ph => self.ph,
            Metric::DissolvedO2 => self.dissolved_o2,
            Metric::WaterLevel => self.water_level,
            Metric::FlowRate => self.flow_rate,
            Metric::Humidity => self.humidity,
            Metric::Ammonia => self.ammonia,
            Metric::LightIntensity => self.light_intensity,
        }
    }
}

impl Default for Reading {
    /// Reference baseline the simulation starts from.
    fn default() -> Self {
        Self {
            water_temp: 23.0,
            ph: 6.8,
            dissolved_o2: 7.1,
            water_level: 80.0,
            flow_rate: 4.5,
            humidity: 65.0,
            ammonia: 0.25,
            light_intensity: 600.0,
        }
    }
}
