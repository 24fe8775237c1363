use serde::{Deserialize, Serialize};

/// The advertiser's alert configuration. A single document per tenant in
/// the demo setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Locations the alert watches; must never be empty.
    pub locations: Vec<String>,
    /// Delivery channel: email, sms, push, ...
    pub delivery: String,
    pub price_threshold: f64,
    pub usage_threshold: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Price,
    Usage,
}

impl AlertKind {
    /// The trigger body carries the kind as free text so an unknown value
    /// can be reported as a bad request instead of a deserialization error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price" => Some(Self::Price),
            "usage" => Some(Self::Usage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerAlertRequest {
    pub kind: String,
    pub campaign_id: String,
    pub current_value: f64,
}

#[derive(Debug, Serialize)]
pub struct TriggerAlertResponse {
    pub alert_sent: bool,
}
