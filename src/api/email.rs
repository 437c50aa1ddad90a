use serde::Serialize;
use serde_json::{Map, Value};

use crate::executor::{ApiClient, ApiError, ApiResult, RequestSpec};

#[derive(Debug, Clone, Serialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// A transactional email. Unset optional fields are omitted from the
/// serialized payload entirely, so the wire format matches what the API
/// expects for each variant (HTML, plain text, template, tagged).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub sender: EmailAddress,
    pub to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl EmailMessage {
    pub fn html(
        sender: EmailAddress,
        to: EmailAddress,
        subject: impl Into<String>,
        html_content: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            to: vec![to],
            subject: Some(subject.into()),
            html_content: Some(html_content.into()),
            text_content: None,
            template_id: None,
            params: None,
            tags: None,
        }
    }

    pub fn text(
        sender: EmailAddress,
        to: EmailAddress,
        subject: impl Into<String>,
        text_content: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            to: vec![to],
            subject: Some(subject.into()),
            html_content: None,
            text_content: Some(text_content.into()),
            template_id: None,
            params: None,
            tags: None,
        }
    }

    /// Template sends carry no subject or content; the template supplies
    /// both, with `params` filling its placeholders.
    pub fn from_template(
        sender: EmailAddress,
        to: EmailAddress,
        template_id: i64,
        params: Map<String, Value>,
    ) -> Self {
        Self {
            sender,
            to: vec![to],
            subject: None,
            html_content: None,
            text_content: None,
            template_id: Some(template_id),
            params: Some(params),
            tags: None,
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

pub async fn send_email(
    client: &ApiClient,
    message: &EmailMessage,
) -> Result<ApiResult, ApiError> {
    let spec = RequestSpec::post("/v3/smtp/email").with_body(serde_json::to_value(message)?);
    client.execute(&spec).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sender() -> EmailAddress {
        EmailAddress::named("team@acme.io", "Acme")
    }

    #[test]
    fn html_payload_matches_wire_format() {
        let message = EmailMessage::html(
            sender(),
            EmailAddress::named("jane@example.org", "Jane"),
            "Welcome",
            "<p>Hello</p>",
        );

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "sender": {"email": "team@acme.io", "name": "Acme"},
                "to": [{"email": "jane@example.org", "name": "Jane"}],
                "subject": "Welcome",
                "htmlContent": "<p>Hello</p>",
            })
        );
    }

    #[test]
    fn text_payload_omits_html_fields() {
        let message = EmailMessage::text(
            sender(),
            EmailAddress::new("jane@example.org"),
            "Plain",
            "Hello.",
        );

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["textContent"], "Hello.");
        assert_eq!(value["to"][0], json!({"email": "jane@example.org"}));
        assert!(value.get("htmlContent").is_none());
        assert!(value.get("templateId").is_none());
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn template_payload_carries_id_and_params() {
        let mut params = Map::new();
        params.insert("NAME".to_string(), json!("Jane"));
        let message = EmailMessage::from_template(
            sender(),
            EmailAddress::new("jane@example.org"),
            7,
            params,
        );

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["templateId"], 7);
        assert_eq!(value["params"]["NAME"], "Jane");
        assert!(value.get("subject").is_none());
    }

    #[test]
    fn tags_serialize_as_a_plain_array() {
        let message = EmailMessage::text(
            sender(),
            EmailAddress::new("jane@example.org"),
            "Order Confirmation",
            "Thank you for your order.",
        )
        .with_tags(vec!["order_confirmation".to_string()]);

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["tags"], json!(["order_confirmation"]));
    }
}
