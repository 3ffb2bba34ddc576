//! Threshold classification of readings against configured ranges.
//!
//! Every function here is pure: the same (value, range) pair always maps to
//! the same status, with no hidden state.

use aquaview_schemas::{
    alert::Alert,
    metric::Metric,
    range::RangeSet,
    reading::Reading,
    status::Status,
};

/// Fraction of the band on either edge that classifies as Warning.
pub const WARNING_BAND_FRACTION: f64 = 0.1;

/// Maps a value and its [min, max] band to a three-level status.
///
/// The exact endpoints classify as Critical, so a value clamped to the edge
/// of its domain is reported, not hidden in the warning band. A degenerate
/// band (`min >= max`) always classifies as Critical; no boundary arithmetic
/// is performed for it.
pub fn classify(value: f64, min: f64, max: f64) -> Status {
    if min >= max {
        return Status::Critical;
    }
    if value <= min || value >= max {
        return Status::Critical;
    }
    let band = WARNING_BAND_FRACTION * (max - min);
    if value < min + band || value > max - band {
        Status::Warning
    } else {
        Status::Good
    }
}

/// Position of `value` within its band as a fill-bar percentage in [0, 100].
///
/// A degenerate band yields 0 rather than dividing by zero.
pub fn percentage(value: f64, min: f64, max: f64) -> f64 {
    if min >= max {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Classifies every configured metric of a snapshot, in `Metric::ALL` order.
/// Metrics without a configured range are skipped.
pub fn classify_reading(reading: &Reading, ranges: &RangeSet) -> Vec<(Metric, Status)> {
    ranges
        .iter()
        .map(|(metric, range)| (metric, classify(reading.get(metric), range.min, range.max)))
        .collect()
}

/// Derives the alert records for one tick: one per metric outside its Good
/// band.
pub fn alerts_for(reading: &Reading, ranges: &RangeSet, tick: u64) -> Vec<Alert> {
    classify_reading(reading, ranges)
        .into_iter()
        .filter(|(_, status)| *status != Status::Good)
        .map(|(metric, status)| {
            let value = reading.get(metric);
            Alert {
                metric,
                value,
                status,
                message: format!(
                    "{} at {:.2}{} is {}",
                    metric.label(),
                    value,
                    metric.unit(),
                    status.label().to_lowercase()
                ),
                tick,
            }
        })
        .collect()
}
