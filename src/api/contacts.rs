use serde::Serialize;
use serde_json::{Map, Value};

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

use super::PageQuery;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub email: String,
    pub attributes: Map<String, Value>,
    pub update_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<i64>>,
}

impl NewContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            attributes: Map::new(),
            update_enabled: false,
            list_ids: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_lists(mut self, list_ids: Vec<i64>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }

    pub fn update_enabled(mut self, enabled: bool) -> Self {
        self.update_enabled = enabled;
        self
    }
}

pub async fn create_contact(
    client: &ApiClient,
    contact: &NewContact,
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::post("/v3/contacts").with_body(serde_json::to_value(contact)?);
    client.execute(&spec).await
}

/// `identifier` is an email address or a numeric contact id.
pub async fn get_contact(client: &ApiClient, identifier: &str) -> Result<ApiResult, ApiError> {
    client
        .execute(&RequestSpec::get(format!("/v3/contacts/{identifier}")))
        .await
}

pub async fn list_contacts(client: &ApiClient, page: &PageQuery) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::get("/v3/contacts").with_query(page.to_query());
    client.execute(&spec).await
}

/// Contacts to add to a list, by email or by id. At least one of the two
/// must be present; the API accepts at most 150 per request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListAdditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
}

impl ListAdditions {
    pub fn emails(emails: Vec<String>) -> Self {
        Self {
            emails: Some(emails),
            ids: None,
        }
    }

    pub fn ids(ids: Vec<i64>) -> Self {
        Self {
            emails: None,
            ids: Some(ids),
        }
    }

    fn is_empty(&self) -> bool {
        self.emails.is_none() && self.ids.is_none()
    }
}

pub async fn add_contacts_to_list(
    client: &ApiClient,
    list_id: i64,
    additions: &ListAdditions,
) -> Result<ApiResult, ApiError> {
    if additions.is_empty() {
        return Err(ApiError::InvalidRequest(
            "provide emails or ids to add to the list".to_string(),
        ));
    }
    let spec = RequestSpec::post(format!("/v3/contacts/lists/{list_id}/contacts/add"))
        .with_body(serde_json::to_value(additions)?);
    client.execute(&spec).await
}

pub async fn list_contact_lists(
    client: &ApiClient,
    page: &PageQuery,
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::get("/v3/contacts/lists").with_query(page.to_query());
    client.execute(&spec).await
}
