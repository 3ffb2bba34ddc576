use crate::range::{MetricRange, RangeSet};
use serde::Deserialize;

/// A named bundle of ranges for one species profile, loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Preset {
    pub preset_id: String,
    pub name: String,
    pub description: String,
    pub ranges: Vec<MetricRange>,
}

impl Preset {
    pub fn range_set(&self) -> RangeSet {
        self.ranges.iter().copied().collect()
    }
}
