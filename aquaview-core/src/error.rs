use aquaview_schemas::metric::Metric;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquaviewError {
    #[error("Invalid range for {metric}: min {min} must be less than max {max}")]
    InvalidRange { metric: Metric, min: f64, max: f64 },

    #[error("At least one metric range must be configured")]
    NoRangesProvided,

    #[error("Preset '{0}' not found in configuration")]
    PresetNotFound(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error),
}
