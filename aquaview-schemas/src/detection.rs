use serde::{Deserialize, Serialize};

/// Placeholder "AI detection" result. A fixed sample array stands in for a
/// real vision model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub subject: String,
    pub confidence: f64,
    pub healthy: bool,
    pub note: String,
}

/// The hardcoded detections returned until a real model replaces them.
pub fn sample_detections() -> Vec<Detection> {
    vec![
        Detection {
            subject: "Tilapia #1".to_string(),
            confidence: 0.97,
            healthy: true,
            note: "Normal swimming pattern".to_string(),
        },
        Detection {
            subject: "Tilapia #2".to_string(),
            confidence: 0.92,
            healthy: true,
            note: "Feeding activity detected".to_string(),
        },
        Detection {
            subject: "Lettuce bed A".to_string(),
            confidence: 0.88,
            healthy: true,
            note: "Leaf color within expected band".to_string(),
        },
        Detection {
            subject: "Lettuce bed B".to_string(),
            confidence: 0.74,
            healthy: false,
            note: "Possible early nutrient deficiency".to_string(),
        },
    ]
}
