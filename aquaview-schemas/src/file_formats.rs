use crate::{preset::Preset, range::MetricRange};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RangesFile {
    pub schema_version: String,
    pub ranges: Vec<MetricRange>,
}

#[derive(Debug, Deserialize)]
pub struct PresetFile {
    pub schema_version: String,
    pub presets: Vec<Preset>,
}
