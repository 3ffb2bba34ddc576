use crate::metric::Metric;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The configured acceptable [min, max] band for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// A band is usable only when both ends are finite and min < max.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// A range bound to the metric it applies to, as it appears in YAML files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn range(&self) -> Range {
        Range {
            min: self.min,
            max: self.max,
        }
    }
}

/// Per-metric range configuration, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSet {
    ranges: HashMap<Metric, Range>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, range: Range) {
        self.ranges.insert(metric, range);
    }

    pub fn get(&self, metric: Metric) -> Option<&Range> {
        self.ranges.get(&metric)
    }

    /// Iterates in `Metric::ALL` order, skipping unconfigured metrics.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &Range)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(move |m| self.ranges.get(&m).map(|r| (m, r)))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl FromIterator<MetricRange> for RangeSet {
    fn from_iter<I: IntoIterator<Item = MetricRange>>(iter: I) -> Self {
        let mut set = RangeSet::new();
        for entry in iter {
            set.insert(entry.metric, entry.range());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Range { min: 20.0, max: 25.0 }.is_valid());
        assert!(!Range { min: 25.0, max: 25.0 }.is_valid());
        assert!(!Range { min: 26.0, max: 25.0 }.is_valid());
        assert!(!Range {
            min: f64::NAN,
            max: 25.0
        }
        .is_valid());
    }

    #[test]
    fn iter_follows_metric_order() {
        let set: RangeSet = [
            MetricRange {
                metric: Metric::Ph,
                min: 6.0,
                max: 7.5,
            },
            MetricRange {
                metric: Metric::WaterTemp,
                min: 20.0,
                max: 26.0,
            },
        ]
        .into_iter()
        .collect();

        let order: Vec<Metric> = set.iter().map(|(m, _)| m).collect();
        assert_eq!(order, vec![Metric::WaterTemp, Metric::Ph]);
    }
}
