use serde::Serialize;

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

#[derive(Debug, Clone, Default)]
pub struct SenderFilter {
    pub ip: Option<String>,
    pub domain: Option<String>,
}

impl SenderFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(ip) = &self.ip {
            query.push(("ip".to_string(), ip.clone()));
        }
        if let Some(domain) = &self.domain {
            query.push(("domain".to_string(), domain.clone()));
        }
        query
    }
}

pub async fn list_senders(
    client: &ApiClient,
    filter: &SenderFilter,
) -> Result<ApiResult, ApiError> {
    let mut spec = RequestSpec::get("/v3/senders");
    let query = filter.to_query();
    if !query.is_empty() {
        spec = spec.with_query(query);
    }
    client.execute(&spec).await
}

#[derive(Debug, Clone, Serialize)]
pub struct DedicatedIp {
    pub ip: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

/// Creating a sender triggers a verification email to the address.
#[derive(Debug, Clone, Serialize)]
pub struct NewSender {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<DedicatedIp>>,
}

impl NewSender {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ips: None,
        }
    }
}

pub async fn create_sender(client: &ApiClient, sender: &NewSender) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::post("/v3/senders").with_body(serde_json::to_value(sender)?);
    client.execute(&spec).await
}

/// First sender on the account with a plausible email, as `(email, name)`.
/// Remote rejections yield `Ok(None)`; only transport faults are errors.
pub async fn first_verified_sender(
    client: &ApiClient,
) -> Result<Option<(String, String)>, ApiError> {
    let result = list_senders(client, &SenderFilter::default()).await?;
    if !result.success {
        return Ok(None);
    }

    // The endpoint normally wraps the array in {"senders": [...]}, but be
    // lenient about a bare array.
    let senders = result
        .body
        .get("senders")
        .or(Some(&result.body))
        .and_then(|value| value.as_array())
        .cloned()
        .unwrap_or_default();

    for sender in senders {
        let email = sender
            .get("email")
            .and_then(|value| value.as_str())
            .unwrap_or_default();
        if email.contains('@') {
            let name = sender
                .get("name")
                .and_then(|value| value.as_str())
                .unwrap_or("Sender");
            return Ok(Some((email.to_string(), name.to_string())));
        }
    }
    Ok(None)
}
