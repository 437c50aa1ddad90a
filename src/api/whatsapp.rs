use serde::Serialize;

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// A WhatsApp message. The first message to a contact must use an approved
/// template; free text only works inside an existing conversation window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppMessage {
    pub contact_numbers: Vec<String>,
    pub sender_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl WhatsAppMessage {
    pub fn from_template(
        contact_numbers: Vec<String>,
        template_id: i64,
        sender_number: impl Into<String>,
    ) -> Self {
        Self {
            contact_numbers,
            sender_number: sender_number.into(),
            template_id: Some(template_id),
            text: None,
        }
    }

    pub fn text(
        contact_numbers: Vec<String>,
        text: impl Into<String>,
        sender_number: impl Into<String>,
    ) -> Self {
        Self {
            contact_numbers,
            sender_number: sender_number.into(),
            template_id: None,
            text: Some(text.into()),
        }
    }
}

pub async fn send_whatsapp(
    client: &ApiClient,
    message: &WhatsAppMessage,
) -> Result<ApiResult, ApiError> {
    let spec =
        RequestSpec::post("/v3/whatsapp/sendMessage").with_body(serde_json::to_value(message)?);
    client.execute(&spec).await
}

/// Event statistics window. `days` takes precedence over an explicit
/// start/end range; with neither, the API defaults to the last 30 days.
#[derive(Debug, Clone)]
pub struct StatisticsQuery {
    pub limit: u32,
    pub offset: u32,
    pub days: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Default for StatisticsQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            days: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl StatisticsQuery {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];
        if let Some(days) = self.days {
            query.push(("days".to_string(), days.to_string()));
        } else if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            query.push(("startDate".to_string(), start.clone()));
            query.push(("endDate".to_string(), end.clone()));
        }
        query
    }
}

pub async fn get_statistics(
    client: &ApiClient,
    query: &StatisticsQuery,
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::get("/v3/whatsapp/statistics/events").with_query(query.to_query());
    client.execute(&spec).await
}
