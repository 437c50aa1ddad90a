use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// Activate the eCommerce app on the account, enabling product and order
/// sync. Idempotent on the remote side.
pub async fn activate(client: &ApiClient) -> Result<ApiResult, ApiError> {
    client
        .execute(&RequestSpec::post("/v3/ecommerce/activate"))
        .await
}
