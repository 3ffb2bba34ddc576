use super::state::TelemetryState;
use crate::{classify, error::AquaviewError, logger::TimeSeriesLogger};
use aquaview_schemas::{
    control::{Control, ControlPanel},
    metric::Metric,
    range::RangeSet,
    reading::Reading,
    status::Status,
};
use rand::{rngs::StdRng, Rng};

/// Perturbation parameters for a bounded random walk:
/// `clamp(prev + uniform(-delta, +delta), lo, hi)`.
struct Walk {
    delta: f64,
    lo: f64,
    hi: f64,
}

const WATER_TEMP_WALK: Walk = Walk { delta: 0.2, lo: 22.0, hi: 24.0 };
const PH_WALK: Walk = Walk { delta: 0.05, lo: 6.5, hi: 7.1 };
const DISSOLVED_O2_WALK: Walk = Walk { delta: 0.15, lo: 6.8, hi: 7.4 };
const AMMONIA_WALK: Walk = Walk { delta: 0.02, lo: 0.1, hi: 0.5 };

/// Free-metric draw: `uniform(baseline, baseline + spread)`.
struct Free {
    baseline: f64,
    spread: f64,
}

const WATER_LEVEL_FREE: Free = Free { baseline: 75.0, spread: 10.0 };
const FLOW_RATE_FREE: Free = Free { baseline: 3.5, spread: 1.5 };
const HUMIDITY_FREE: Free = Free { baseline: 58.0, spread: 12.0 };
const LIGHT_INTENSITY_FREE: Free = Free { baseline: 400.0, spread: 350.0 };

/// Tick-driven generator of simulated sensor snapshots.
///
/// Each tick perturbs the previous reading, classifies every configured
/// metric, records alerts for anything outside its Good band, and logs a
/// time-series row when a logger is attached. Timing lives with the caller;
/// the engine only advances when told to.
pub struct TelemetryEngine {
    pub(super) state: TelemetryState,
    pub(super) ranges: RangeSet,
    pub(super) logger: Option<TimeSeriesLogger>,
    pub(super) rng: StdRng,
}

impl TelemetryEngine {
    /// Advances a fixed number of ticks (offline mode).
    pub fn run(&mut self, ticks: u64) -> Result<(), AquaviewError> {
        if let Some(logger) = &mut self.logger {
            let statuses = classify::classify_reading(&self.state.reading, &self.ranges);
            logger.log_state(&self.state, &statuses)?;
        }

        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Produces the next snapshot and replaces the current one wholesale.
    pub fn tick(&mut self) -> Result<(), AquaviewError> {
        self.state.tick += 1;
        self.state.reading = self.next_reading();

        let statuses = classify::classify_reading(&self.state.reading, &self.ranges);
        self.state.alerts =
            classify::alerts_for(&self.state.reading, &self.ranges, self.state.tick);
        for alert in &self.state.alerts {
            tracing::debug!(
                metric = alert.metric.wire_name(),
                value = alert.value,
                status = %alert.status,
                tick = alert.tick,
                "reading outside good band"
            );
        }

        if let Some(logger) = &mut self.logger {
            logger.log_state(&self.state, &statuses)?;
        }

        Ok(())
    }

    fn next_reading(&mut self) -> Reading {
        let prev = self.state.reading;
        Reading {
            water_temp: self.walk(prev.water_temp, &WATER_TEMP_WALK),
            ph: self.walk(prev.ph, &PH_WALK),
            dissolved_o2: self.walk(prev.dissolved_o2, &DISSOLVED_O2_WALK),
            ammonia: self.walk(prev.ammonia, &AMMONIA_WALK),
            water_level: self.free(&WATER_LEVEL_FREE),
            flow_rate: self.free(&FLOW_RATE_FREE),
            humidity: self.free(&HUMIDITY_FREE),
            light_intensity: self.free(&LIGHT_INTENSITY_FREE),
        }
    }

    fn walk(&mut self, prev: f64, params: &Walk) -> f64 {
        let step = self.rng.random_range(-params.delta..=params.delta);
        (prev + step).clamp(params.lo, params.hi)
    }

    fn free(&mut self, params: &Free) -> f64 {
        self.rng
            .random_range(params.baseline..params.baseline + params.spread)
    }

    /// Classifies the current snapshot. Derived on demand, never stored.
    pub fn statuses(&self) -> Vec<(Metric, Status)> {
        classify::classify_reading(&self.state.reading, &self.ranges)
    }

    pub fn set_control(&mut self, control: Control, on: bool) {
        self.state.controls.set(control, on);
    }

    pub fn get_tick(&self) -> u64 {
        self.state.tick
    }

    pub fn current_reading(&self) -> &Reading {
        &self.state.reading
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.state.controls
    }

    pub fn state(&self) -> &TelemetryState {
        &self.state
    }

    pub fn ranges(&self) -> &RangeSet {
        &self.ranges
    }
}
