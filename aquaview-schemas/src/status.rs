use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level health classification of a reading against its range.
///
/// Always derived from a (value, range) pair, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Warning,
    Critical,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Warning => "Warning",
            Status::Critical => "Critical",
        }
    }

    /// Hex color used by the dashboard's fill bars.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Good => "#22c55e",
            Status::Warning => "#f59e0b",
            Status::Critical => "#ef4444",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
