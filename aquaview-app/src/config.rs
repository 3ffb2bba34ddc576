use anyhow::{Context, Result};
use aquaview_core::error::AquaviewError;
use aquaview_schemas::{
    file_formats::{PresetFile, RangesFile},
    preset::Preset,
    range::MetricRange,
};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// Runtime settings, loaded once from a YAML file next to the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Wall-clock interval between simulated readings in serve mode.
    pub tick_interval_ms: u64,
    /// Number of ticks an offline run simulates.
    pub ticks: u64,
    /// Species preset to classify against; falls back to the default ranges.
    pub preset: Option<String>,
    pub data_dir: String,
    pub output_dir: String,
    pub listen_addr: String,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3000,
            ticks: 200,
            preset: None,
            data_dir: "./data/monitor".to_string(),
            output_dir: "./data/runs".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            seed: None,
        }
    }
}

impl MonitorConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path))
    }
}

/// All static range configuration: the default bands plus named species
/// presets. Loaded once at startup.
pub struct RangeBook {
    pub default_ranges: Vec<MetricRange>,
    pub presets: HashMap<String, Preset>,
}

impl RangeBook {
    /// Loads all data from the specified base directory.
    pub fn load(base_path: &str) -> Result<Self> {
        tracing::info!("Loading range configuration from '{}'", base_path);

        let mut default_ranges = Vec::new();
        for file in load_yaml_files::<RangesFile>(Path::new(base_path).join("1_ranges"))? {
            default_ranges.extend(file.ranges);
        }

        let mut presets = HashMap::new();
        for file in load_yaml_files::<PresetFile>(Path::new(base_path).join("2_presets"))? {
            for preset in file.presets {
                presets.insert(preset.preset_id.clone(), preset);
            }
        }

        Ok(Self {
            default_ranges,
            presets,
        })
    }

    /// Picks the range configuration for a run: a named preset, or the
    /// default bands when none is requested.
    pub fn resolve_ranges(&self, preset: Option<&str>) -> Result<Vec<MetricRange>> {
        match preset {
            Some(name) => self
                .presets
                .get(name)
                .map(|p| p.ranges.clone())
                .ok_or_else(|| AquaviewError::PresetNotFound(name.to_string()).into()),
            None => Ok(self.default_ranges.clone()),
        }
    }
}

/// Generic helper to parse every YAML file in a directory.
fn load_yaml_files<F>(dir_path: impl AsRef<Path>) -> Result<Vec<F>>
where
    F: for<'de> serde::Deserialize<'de>,
{
    let mut files = Vec::new();
    for entry in fs::read_dir(dir_path.as_ref())
        .with_context(|| format!("Failed to read directory: {:?}", dir_path.as_ref()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            let content = fs::read_to_string(&path)?;
            let parsed: F = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
            files.push(parsed);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaview_schemas::metric::Metric;

    #[test]
    fn config_defaults_match_reference_behavior() {
        let cfg: MonitorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.tick_interval_ms, 3000);
        assert_eq!(cfg.ticks, 200);
        assert!(cfg.preset.is_none());
    }

    #[test]
    fn config_overrides_apply() {
        let cfg: MonitorConfig =
            serde_yaml::from_str("tick_interval_ms: 1000\npreset: tilapia\nseed: 42\n").unwrap();
        assert_eq!(cfg.tick_interval_ms, 1000);
        assert_eq!(cfg.preset.as_deref(), Some("tilapia"));
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn ranges_file_parses_wire_metric_names() {
        let file: RangesFile = serde_yaml::from_str(
            "schema_version: \"1.0\"\nranges:\n  - metric: waterTemp\n    min: 20.0\n    max: 26.0\n",
        )
        .unwrap();
        assert_eq!(file.ranges.len(), 1);
        assert_eq!(file.ranges[0].metric, Metric::WaterTemp);
    }

    #[test]
    fn missing_preset_is_an_error() {
        let book = RangeBook {
            default_ranges: Vec::new(),
            presets: HashMap::new(),
        };
        assert!(book.resolve_ranges(Some("koi")).is_err());
        assert!(book.resolve_ranges(None).unwrap().is_empty());
    }
}
