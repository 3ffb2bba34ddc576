use crate::control::ControlCommand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status envelope wrapping every GET reply: `{status, data, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok".to_string(),
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Echo reply for POST /controls: `{status, data, message, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlAck {
    pub status: String,
    pub data: ControlCommand,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ControlAck {
    pub fn ok(data: ControlCommand, message: String) -> Self {
        Self {
            status: "ok".to_string(),
            data,
            message,
            timestamp: Utc::now(),
        }
    }
}
