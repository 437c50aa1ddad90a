use thiserror::Error;

/// Errors surfaced by the request executor and the API functions.
///
/// Remote rejections (4xx/5xx) are not errors; they come back as an
/// [`ApiResult`](crate::executor::ApiResult) with `success == false`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing API key: set BREVO_API_KEY in .env or the environment")]
    MissingApiKey,

    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("encoding request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
