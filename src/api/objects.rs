use serde_json::{json, Map, Value};

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

/// Custom objects are only available on higher service tiers; on other
/// plans these calls come back as remote rejections.
pub async fn upsert_records(
    client: &ApiClient,
    object_type: &str,
    records: &[Map<String, Value>],
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::post(format!("/v3/objects/{object_type}/batch/upsert"))
        .with_body(json!({ "records": records }));
    client.execute(&spec).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub limit: u32,
    pub sort: SortOrder,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            sort: SortOrder::Desc,
        }
    }
}

pub async fn list_records(
    client: &ApiClient,
    object_type: &str,
    query: &RecordQuery,
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::get(format!("/v3/objects/{object_type}/records")).with_query(vec![
        ("limit".to_string(), query.limit.to_string()),
        ("sort".to_string(), query.sort.as_str().to_string()),
    ]);
    client.execute(&spec).await
}
