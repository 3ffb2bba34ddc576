use crate::{
    error::AquaviewError,
    logger::TimeSeriesLogger,
    telemetry::{engine::TelemetryEngine, state::TelemetryState},
};
use aquaview_schemas::{
    control::ControlPanel,
    range::{MetricRange, RangeSet},
    reading::Reading,
};
use rand::{rngs::StdRng, SeedableRng};

/// A fluent builder for constructing a `TelemetryEngine`.
///
/// Range configuration is validated here so the classifier and generator
/// never see a malformed band at runtime.
#[derive(Default)]
pub struct TelemetryBuilder {
    ranges: Vec<MetricRange>,
    initial_reading: Option<Reading>,
    seed: Option<u64>,
    log_path: Option<String>,
}

impl TelemetryBuilder {
    /// Creates a new, empty `TelemetryBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-metric ranges the classifier evaluates against.
    pub fn with_ranges(mut self, ranges: Vec<MetricRange>) -> Self {
        self.ranges = ranges;
        self
    }

    /// Overrides the baseline snapshot the walk starts from.
    pub fn with_initial_reading(mut self, reading: Reading) -> Self {
        self.initial_reading = Some(reading);
        self
    }

    /// Fixes the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configures the engine to write time-series data to the specified CSV file.
    pub fn with_timeseries_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a fully configured `TelemetryEngine`.
    ///
    /// # Errors
    ///
    /// Returns an `AquaviewError` when no ranges are configured or any
    /// configured range has min >= max.
    pub fn build(self) -> Result<TelemetryEngine, AquaviewError> {
        if self.ranges.is_empty() {
            return Err(AquaviewError::NoRangesProvided);
        }
        for entry in &self.ranges {
            if !entry.range().is_valid() {
                return Err(AquaviewError::InvalidRange {
                    metric: entry.metric,
                    min: entry.min,
                    max: entry.max,
                });
            }
        }

        let ranges: RangeSet = self.ranges.into_iter().collect();

        let logger = match self.log_path {
            Some(path) => Some(
                TimeSeriesLogger::new(&path)
                    .map_err(|e| AquaviewError::CsvError(path.clone(), e))?,
            ),
            None => None,
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let state = TelemetryState {
            tick: 0,
            reading: self.initial_reading.unwrap_or_default(),
            controls: ControlPanel::default(),
            alerts: Vec::new(),
        };

        Ok(TelemetryEngine {
            state,
            ranges,
            logger,
            rng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaview_schemas::metric::Metric;

    #[test]
    fn rejects_empty_configuration() {
        let result = TelemetryBuilder::new().build();
        assert!(matches!(result, Err(AquaviewError::NoRangesProvided)));
    }

    #[test]
    fn rejects_inverted_range() {
        let result = TelemetryBuilder::new()
            .with_ranges(vec![MetricRange {
                metric: Metric::Ph,
                min: 7.5,
                max: 6.0,
            }])
            .build();
        assert!(matches!(
            result,
            Err(AquaviewError::InvalidRange { metric: Metric::Ph, .. })
        ));
    }

    #[test]
    fn rejects_degenerate_range() {
        let result = TelemetryBuilder::new()
            .with_ranges(vec![MetricRange {
                metric: Metric::WaterTemp,
                min: 23.0,
                max: 23.0,
            }])
            .build();
        assert!(matches!(result, Err(AquaviewError::InvalidRange { .. })));
    }

    #[test]
    fn builds_with_custom_baseline() {
        let baseline = Reading { water_temp: 22.5, ..Reading::default() };
        let engine = TelemetryBuilder::new()
            .with_ranges(vec![MetricRange {
                metric: Metric::WaterTemp,
                min: 20.0,
                max: 26.0,
            }])
            .with_initial_reading(baseline)
            .with_seed(1)
            .build()
            .unwrap();
        assert_eq!(engine.current_reading().water_temp, 22.5);
        assert_eq!(engine.get_tick(), 0);
    }
}
