use serde::{Deserialize, Serialize};
use std::fmt;

/// The monitored quantities. Serde names match the dashboard's JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    WaterTemp,
    Ph,
    DissolvedO2,
    WaterLevel,
    FlowRate,
    Humidity,
    Ammonia,
    LightIntensity,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::WaterTemp,
        Metric::Ph,
        Metric::DissolvedO2,
        Metric::WaterLevel,
        Metric::FlowRate,
        Metric::Humidity,
        Metric::Ammonia,
        Metric::LightIntensity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::WaterTemp => "Water Temperature",
            Metric::Ph => "pH",
            Metric::DissolvedO2 => "Dissolved Oxygen",
            Metric::WaterLevel => "Water Level",
            Metric::FlowRate => "Flow Rate",
            Metric::Humidity => "Humidity",
            Metric::Ammonia => "Ammonia",
            Metric::LightIntensity => "Light Intensity",
        }
    }

    /// JSON key used on the wire and in log columns.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Metric::WaterTemp => "waterTemp",
            Metric::Ph => "ph",
            Metric::DissolvedO2 => "dissolvedO2",
            Metric::WaterLevel => "waterLevel",
            Metric::FlowRate => "flowRate",
            Metric::Humidity => "humidity",
            Metric::Ammonia => "ammonia",
            Metric::LightIntensity => "lightIntensity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::WaterTemp => "°C",
            Metric::Ph => "",
            Metric::DissolvedO2 => "mg/L",
            Metric::WaterLevel => "%",
            Metric::FlowRate => "L/min",
            Metric::Humidity => "%",
            Metric::Ammonia => "ppm",
            Metric::LightIntensity => "lux",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(
            serde_json::to_string(&Metric::WaterTemp).unwrap(),
            "\"waterTemp\""
        );
        assert_eq!(
            serde_json::to_string(&Metric::DissolvedO2).unwrap(),
            "\"dissolvedO2\""
        );
        assert_eq!(serde_json::to_string(&Metric::Ph).unwrap(), "\"ph\"");
    }

    #[test]
    fn wire_name_matches_serde() {
        for metric in Metric::ALL {
            let serialized = serde_json::to_string(&metric).unwrap();
            assert_eq!(serialized, format!("\"{}\"", metric.wire_name()));
        }
    }

    #[test]
    fn all_lists_every_metric_once() {
        for metric in Metric::ALL {
            assert_eq!(Metric::ALL.iter().filter(|m| **m == metric).count(), 1);
        }
    }
}
