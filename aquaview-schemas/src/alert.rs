use crate::{metric::Metric, status::Status};
use serde::{Deserialize, Serialize};

/// One out-of-band event for a single tick: a metric left its Good band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub metric: Metric,
    pub value: f64,
    pub status: Status,
    pub message: String,
    pub tick: u64,
}
