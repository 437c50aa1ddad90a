mod error;
mod models;
mod runner;

pub use error::ApiError;
pub use models::{ApiHost, ApiResult, HttpMethod, RequestSpec};
pub use runner::{ApiClient, REQUEST_TIMEOUT};
