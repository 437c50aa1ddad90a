use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};

use crate::config::Settings;

use super::{
    error::ApiError,
    models::{ApiHost, ApiResult, HttpMethod, RequestSpec},
};

/// Fixed per-request timeout. Slow endpoints surface as transport errors
/// rather than hanging a catalogue run.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const API_KEY_HEADER: &str = "api-key";

/// Executes requests against the Brevo API. One instance is built at
/// startup and shared by every use case.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: String,
    tracker_base: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            tracker_base: settings.tracker_base.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Issue exactly one request. 4xx/5xx come back in-band as
    /// `success == false`; only missing credentials and transport faults
    /// (DNS, refused connection, timeout) are errors.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<ApiResult, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::MissingApiKey)?;

        let base = match spec.host {
            ApiHost::Api => &self.api_base,
            ApiHost::Tracker => &self.tracker_base,
        };
        let url = format!("{}{}", base, spec.path);

        let mut request = match spec.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };

        // The tracking host takes a reduced header set; the main API
        // expects all three.
        request = match spec.host {
            ApiHost::Api => request
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json")
                .header(API_KEY_HEADER, api_key),
            ApiHost::Tracker => request
                .header(CONTENT_TYPE, "application/json")
                .header(API_KEY_HEADER, api_key),
        };

        if let Some(query) = &spec.query {
            request = request.query(query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::Object(Map::new()))
        };

        Ok(ApiResult {
            success: status.is_success(),
            status: status.as_u16(),
            body,
            duration_ms,
        })
    }
}
