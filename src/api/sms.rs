use serde::Serialize;

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// A transactional SMS. `recipient` is a phone number with country code
/// and no spaces; `sender` allows at most 11 alphanumeric (or 15 numeric)
/// characters, enforced remotely.
#[derive(Debug, Clone, Serialize)]
pub struct SmsMessage {
    pub sender: String,
    pub recipient: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl SmsMessage {
    pub fn transactional(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            content: content.into(),
            kind: "transactional",
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

pub async fn send_sms(client: &ApiClient, message: &SmsMessage) -> Result<ApiResult, ApiError> {
    let spec =
        RequestSpec::post("/v3/transactionalSMS/send").with_body(serde_json::to_value(message)?);
    client.execute(&spec).await
}
