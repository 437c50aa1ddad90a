use serde::Serialize;
use serde_json::{Map, Value};

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// A custom event for the tracking API. Lives on a separate host from the
/// rest of the API and takes a reduced header set; `eventdata` is the
/// vendor's spelling.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedEvent {
    pub email: String,
    pub event: String,
    pub properties: Map<String, Value>,
    pub eventdata: Map<String, Value>,
}

impl TrackedEvent {
    pub fn new(email: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            event: event.into(),
            properties: Map::new(),
            eventdata: Map::new(),
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_data(mut self, eventdata: Map<String, Value>) -> Self {
        self.eventdata = eventdata;
        self
    }
}

pub async fn track_event(client: &ApiClient, event: &TrackedEvent) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::post("/api/v2/trackEvent")
        .on_tracker()
        .with_body(serde_json::to_value(event)?);
    client.execute(&spec).await
}
