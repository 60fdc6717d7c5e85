use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TrackEventRequest {
    /// Kept loose so a non-string name is a validation error, not a parse error.
    #[serde(default)]
    pub event_name: Option<Value>,
    #[serde(default)]
    pub event_data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct TrackEventResponse {
    pub message: &'static str,
}
