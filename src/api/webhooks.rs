use serde::Serialize;

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// Transactional webhooks only; the account holds at most 40 in total
/// across both webhook types.
pub async fn list_webhooks(client: &ApiClient) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::get("/v3/webhooks").with_query(vec![(
        "type".to_string(),
        "transactional".to_string(),
    )]);
    client.execute(&spec).await
}

#[derive(Debug, Clone, Serialize)]
pub struct NewWebhook {
    pub url: String,
    pub description: String,
    pub events: Vec<String>,
}

impl NewWebhook {
    /// A delivery-tracking webhook listening for the common events.
    pub fn delivery_tracking(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: "Delivery tracking webhook".to_string(),
            events: vec![
                "delivered".to_string(),
                "opened".to_string(),
                "clicked".to_string(),
            ],
        }
    }

    pub fn with_events(mut self, events: Vec<String>) -> Self {
        self.events = events;
        self
    }
}

pub async fn create_webhook(
    client: &ApiClient,
    webhook: &NewWebhook,
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::post("/v3/webhooks").with_body(serde_json::to_value(webhook)?);
    client.execute(&spec).await
}
