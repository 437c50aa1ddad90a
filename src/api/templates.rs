use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// SMTP (transactional) templates. `active_only` maps to the API's
/// `templateStatus` flag.
pub async fn list_templates(client: &ApiClient, active_only: bool) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::get("/v3/smtp/templates").with_query(vec![(
        "templateStatus".to_string(),
        active_only.to_string(),
    )]);
    client.execute(&spec).await
}
