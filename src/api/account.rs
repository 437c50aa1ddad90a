use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// Account information. Also the cheapest way to validate an API key.
pub async fn get_account(client: &ApiClient) -> Result<ApiResult, ApiError> {
    client.execute(&RequestSpec::get("/v3/account")).await
}
