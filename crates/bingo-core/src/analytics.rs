use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MAX_EVENT_NAME_LENGTH: usize = 64;

/// A client side event to be recorded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_name: String,
    pub event_data: Value,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub page_url: Option<String>,
}

impl AnalyticsEvent {
    /// Validates the event name. Missing data is stored as an empty object.
    pub fn new(
        event_name: &str,
        event_data: Option<Value>,
    ) -> std::result::Result<Self, CoreError> {
        let event_name = event_name.trim();
        if event_name.is_empty() {
            return Err(CoreError::InvalidEvent(
                "event_name is required and must be a string".to_string(),
            ));
        }
        if event_name.len() > MAX_EVENT_NAME_LENGTH {
            return Err(CoreError::InvalidEvent(format!(
                "event_name must be at most {} bytes",
                MAX_EVENT_NAME_LENGTH
            )));
        }

        Ok(Self {
            event_name: event_name.to_owned(),
            event_data: event_data
                .filter(|data| !data.is_null())
                .unwrap_or_else(|| Value::Object(Default::default())),
            user_agent: None,
            referrer: None,
            page_url: None,
        })
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_referrer(mut self, referrer: Option<String>) -> Self {
        self.referrer = referrer;
        self
    }

    pub fn with_page_url(mut self, page_url: Option<String>) -> Self {
        self.page_url = page_url;
        self
    }
}
