//! Sequential use-case runner.
//!
//! Walks the fixed catalogue one step at a time. Every step is isolated:
//! a configuration or transport failure becomes a [`StepOutcome::Failed`]
//! record and the next step still runs. Printing happens per step as a
//! side effect; callers get the aggregated [`RunReport`] back.

mod catalogue;
mod printer;
mod report;

pub use catalogue::{UseCase, CATALOGUE, EXTRAS};
pub use printer::{print_step, print_summary};
pub use report::{RunReport, StepOutcome, StepRecord};

use serde_json::{json, Map};

use crate::api::email::{EmailAddress, EmailMessage};
use crate::api::{
    account, contacts, ecommerce, email, senders, sms, templates, tracking, webhooks, whatsapp,
    PageQuery,
};
use crate::config::Settings;
use crate::executor::{ApiClient, ApiError, ApiResult};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// When set, email/SMS steps are recorded as skipped instead of
    /// delivering real messages.
    pub skip_sends: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { skip_sends: true }
    }
}

/// Run the whole catalogue in order. No step failure aborts the sequence.
pub async fn run_catalogue(
    client: &ApiClient,
    settings: &Settings,
    options: &RunOptions,
) -> RunReport {
    let sender = if options.skip_sends {
        None
    } else {
        resolve_sender(client, settings).await
    };

    let mut report = RunReport::default();
    for use_case in CATALOGUE {
        let outcome = run_step(use_case, client, settings, sender.as_ref(), options).await;
        let record = StepRecord { use_case, outcome };
        print_step(&record);
        report.records.push(record);
    }
    report
}

/// Run one named use case under the same gating rules as the catalogue.
pub async fn run_one(
    use_case: UseCase,
    client: &ApiClient,
    settings: &Settings,
    options: &RunOptions,
) -> StepRecord {
    let sender = if use_case.is_send() && !options.skip_sends {
        resolve_sender(client, settings).await
    } else {
        None
    };

    let outcome = run_step(use_case, client, settings, sender.as_ref(), options).await;
    let record = StepRecord { use_case, outcome };
    print_step(&record);
    record
}

/// The sender identity used for email sends: the account's first verified
/// sender when one exists, otherwise a usable configured address.
pub async fn resolve_sender(client: &ApiClient, settings: &Settings) -> Option<(String, String)> {
    if let Some(sender) = senders::first_verified_sender(client).await.ok().flatten() {
        return Some(sender);
    }
    settings
        .configured_sender()
        .map(|(email, name)| (email.to_string(), name.to_string()))
}

async fn run_step(
    use_case: UseCase,
    client: &ApiClient,
    settings: &Settings,
    sender: Option<&(String, String)>,
    options: &RunOptions,
) -> StepOutcome {
    if use_case.is_send() {
        if options.skip_sends {
            return StepOutcome::Skipped("pass --send to run message sends".to_string());
        }
        if use_case == UseCase::Sms {
            if settings.recipient_phone.is_none() {
                return StepOutcome::Skipped(
                    "add BREVO_TEST_PHONE to .env (e.g. 919876543210) to try SMS".to_string(),
                );
            }
        } else if sender.is_none() {
            return StepOutcome::Skipped(
                "no verified sender; create one in the dashboard or set BREVO_SENDER_EMAIL"
                    .to_string(),
            );
        }
    }

    match execute_use_case(use_case, client, settings, sender).await {
        Ok(result) => StepOutcome::Completed(result),
        Err(err) => StepOutcome::Failed(err),
    }
}

async fn execute_use_case(
    use_case: UseCase,
    client: &ApiClient,
    settings: &Settings,
    sender: Option<&(String, String)>,
) -> Result<ApiResult, ApiError> {
    match use_case {
        UseCase::Account => account::get_account(client).await,
        UseCase::EmailHtml => {
            let message = EmailMessage::html(
                sender_address(sender)?,
                EmailAddress::named(&settings.recipient_email, &settings.recipient_name),
                "Hello from Brevo!",
                "<html><body><p>Hello,</p><p>This is a transactional email.</p></body></html>",
            );
            email::send_email(client, &message).await
        }
        UseCase::EmailText => {
            let message = EmailMessage::text(
                sender_address(sender)?,
                EmailAddress::new(&settings.recipient_email),
                "Plain text email from Brevo",
                "Hello. This is a plain text transactional email.",
            );
            email::send_email(client, &message).await
        }
        UseCase::EmailDynamic => {
            let tracking_code = "JD01460000300002350000";
            let arrival = "Tomorrow";
            let mut params = Map::new();
            params.insert("trackingCode".to_string(), json!(tracking_code));
            params.insert("estimatedArrival".to_string(), json!(arrival));
            let html = format!(
                "<html><body><p>Your delivery is expected {arrival}. \
                 Tracking code: {tracking_code}</p></body></html>"
            );
            let message = EmailMessage::html(
                sender_address(sender)?,
                EmailAddress::new(&settings.recipient_email),
                "Order Update - Dynamic Content",
                html,
            )
            .with_params(params);
            email::send_email(client, &message).await
        }
        UseCase::EmailTagged => {
            let message = EmailMessage::text(
                sender_address(sender)?,
                EmailAddress::new(&settings.recipient_email),
                "Order Confirmation (Tagged)",
                "Thank you for your order. You can track delivery via webhooks.",
            )
            .with_tags(vec![
                "order_confirmation".to_string(),
                "transactional_v1".to_string(),
            ]);
            email::send_email(client, &message).await
        }
        UseCase::Sms => {
            let recipient = settings.recipient_phone.clone().ok_or_else(|| {
                ApiError::InvalidRequest("no recipient phone configured".to_string())
            })?;
            let message = sms::SmsMessage::transactional(
                "Brevo",
                recipient,
                "Hello! This is a transactional SMS from Brevo.",
            );
            sms::send_sms(client, &message).await
        }
        UseCase::Contacts => contacts::list_contacts(client, &PageQuery::first(5)).await,
        UseCase::ContactLists => contacts::list_contact_lists(client, &PageQuery::first(5)).await,
        UseCase::Senders => senders::list_senders(client, &senders::SenderFilter::default()).await,
        UseCase::Webhooks => webhooks::list_webhooks(client).await,
        UseCase::Templates => templates::list_templates(client, true).await,
        UseCase::CreateContact => {
            let mut attributes = Map::new();
            attributes.insert("FIRSTNAME".to_string(), json!("John"));
            attributes.insert("LASTNAME".to_string(), json!("Doe"));
            let contact =
                contacts::NewContact::new(&settings.recipient_email).with_attributes(attributes);
            contacts::create_contact(client, &contact).await
        }
        UseCase::GetContact => contacts::get_contact(client, &settings.recipient_email).await,
        UseCase::WhatsAppStats => {
            whatsapp::get_statistics(client, &whatsapp::StatisticsQuery::default()).await
        }
        UseCase::Ecommerce => ecommerce::activate(client).await,
        UseCase::TrackEvent => {
            let event = tracking::TrackedEvent::new(&settings.recipient_email, "demo_event");
            tracking::track_event(client, &event).await
        }
    }
}

fn sender_address(sender: Option<&(String, String)>) -> Result<EmailAddress, ApiError> {
    let (email, name) = sender
        .ok_or_else(|| ApiError::InvalidRequest("no sender resolved for email sends".to_string()))?;
    Ok(EmailAddress::named(email, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn settings_for(server: &MockServer) -> Settings {
        Settings {
            api_key: Some("key-1".to_string()),
            api_base: server.base_url(),
            tracker_base: server.base_url(),
            ..Settings::default()
        }
    }

    // Read endpoints minus /v3/senders, which individual tests mock with
    // the sender list they need.
    fn mock_reads(server: &MockServer) {
        for path in [
            "/v3/account",
            "/v3/contacts",
            "/v3/contacts/lists",
            "/v3/webhooks",
            "/v3/smtp/templates",
        ] {
            server.mock(|when, then| {
                when.method(GET).path(path);
                then.status(200)
                    .header("content-type", "application/json")
                    .body("{}");
            });
        }
    }

    fn mock_empty_senders(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/v3/senders");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"senders":[]}"#);
        });
    }

    #[tokio::test]
    async fn catalogue_run_records_every_step_in_order() {
        let server = MockServer::start();
        mock_reads(&server);
        mock_empty_senders(&server);

        let settings = settings_for(&server);
        let client = ApiClient::new(&settings).unwrap();
        let report = run_catalogue(&client, &settings, &RunOptions::default()).await;

        assert_eq!(report.records.len(), CATALOGUE.len());
        let order: Vec<_> = report.records.iter().map(|r| r.use_case).collect();
        assert_eq!(order, CATALOGUE.to_vec());
    }

    #[tokio::test]
    async fn transport_failures_do_not_stop_later_steps() {
        // Nothing listens on port 9; every attempted step fails at the
        // transport level, yet all of them are attempted.
        let settings = Settings {
            api_key: Some("key-1".to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
            tracker_base: "http://127.0.0.1:9".to_string(),
            sender_email: "team@acme.io".to_string(),
            recipient_phone: Some("4915778559164".to_string()),
            ..Settings::default()
        };
        let client = ApiClient::new(&settings).unwrap();
        let options = RunOptions { skip_sends: false };

        let report = run_catalogue(&client, &settings, &options).await;

        assert_eq!(report.records.len(), CATALOGUE.len());
        for record in &report.records {
            assert!(
                matches!(record.outcome, StepOutcome::Failed(ApiError::Transport(_))),
                "expected transport failure for {:?}",
                record.use_case
            );
        }
    }

    #[tokio::test]
    async fn skip_sends_keeps_message_endpoints_untouched() {
        let server = MockServer::start();
        mock_reads(&server);
        mock_empty_senders(&server);
        let email_spy = server.mock(|when, then| {
            when.method(POST).path("/v3/smtp/email");
            then.status(201);
        });
        let sms_spy = server.mock(|when, then| {
            when.method(POST).path("/v3/transactionalSMS/send");
            then.status(201);
        });

        let settings = settings_for(&server);
        let client = ApiClient::new(&settings).unwrap();
        let report = run_catalogue(&client, &settings, &RunOptions { skip_sends: true }).await;

        email_spy.assert_hits(0);
        sms_spy.assert_hits(0);
        assert_eq!(report.skipped(), 5);
        assert_eq!(report.completed(), 6);
    }

    #[tokio::test]
    async fn sms_without_a_phone_is_skipped_with_a_hint() {
        let server = MockServer::start();
        mock_reads(&server);
        mock_empty_senders(&server);
        server.mock(|when, then| {
            when.method(POST).path("/v3/smtp/email");
            then.status(201).body(r#"{"messageId":"<1@smtp>"}"#);
        });
        let sms_spy = server.mock(|when, then| {
            when.method(POST).path("/v3/transactionalSMS/send");
            then.status(201);
        });

        let mut settings = settings_for(&server);
        settings.sender_email = "team@acme.io".to_string();
        settings.recipient_phone = None;
        let client = ApiClient::new(&settings).unwrap();

        let report =
            run_catalogue(&client, &settings, &RunOptions { skip_sends: false }).await;

        sms_spy.assert_hits(0);
        match &report.record(UseCase::Sms).unwrap().outcome {
            StepOutcome::Skipped(reason) => assert!(reason.contains("BREVO_TEST_PHONE")),
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn remote_sender_wins_over_configured_sender() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v3/senders");
            then.status(200)
                .body(r#"{"senders":[{"name":"Verified","email":"verified@acme.io"}]}"#);
        });

        let mut settings = settings_for(&server);
        settings.sender_email = "configured@acme.io".to_string();
        let client = ApiClient::new(&settings).unwrap();

        let sender = resolve_sender(&client, &settings).await;
        assert_eq!(
            sender,
            Some(("verified@acme.io".to_string(), "Verified".to_string()))
        );
    }

    #[tokio::test]
    async fn configured_sender_is_the_fallback() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v3/senders");
            then.status(200).body(r#"{"senders":[]}"#);
        });

        let mut settings = settings_for(&server);
        settings.sender_email = "team@acme.io".to_string();
        settings.sender_name = "Acme".to_string();
        let client = ApiClient::new(&settings).unwrap();

        let sender = resolve_sender(&client, &settings).await;
        assert_eq!(sender, Some(("team@acme.io".to_string(), "Acme".to_string())));
    }

    #[tokio::test]
    async fn email_steps_are_skipped_when_no_sender_resolves() {
        let server = MockServer::start();
        mock_reads(&server);
        mock_empty_senders(&server);
        let email_spy = server.mock(|when, then| {
            when.method(POST).path("/v3/smtp/email");
            then.status(201);
        });

        // Placeholder sender address and an account with no senders.
        let settings = settings_for(&server);
        let client = ApiClient::new(&settings).unwrap();

        let report =
            run_catalogue(&client, &settings, &RunOptions { skip_sends: false }).await;

        email_spy.assert_hits(0);
        match &report.record(UseCase::EmailHtml).unwrap().outcome {
            StepOutcome::Skipped(reason) => assert!(reason.contains("sender")),
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn full_send_run_completes_every_step() {
        let server = MockServer::start();
        mock_reads(&server);
        let email_mock = server.mock(|when, then| {
            when.method(POST).path("/v3/smtp/email");
            then.status(201).body(r#"{"messageId":"<1@smtp>"}"#);
        });
        let sms_mock = server.mock(|when, then| {
            when.method(POST).path("/v3/transactionalSMS/send");
            then.status(201).body(r#"{"reference":"sms-1"}"#);
        });
        server.mock(|when, then| {
            when.method(GET).path("/v3/senders");
            then.status(200)
                .body(r#"{"senders":[{"name":"Acme","email":"team@acme.io"}]}"#);
        });

        let mut settings = settings_for(&server);
        settings.recipient_phone = Some("4915778559164".to_string());
        let client = ApiClient::new(&settings).unwrap();

        let report =
            run_catalogue(&client, &settings, &RunOptions { skip_sends: false }).await;

        email_mock.assert_hits(4);
        sms_mock.assert_hits(1);
        assert_eq!(report.completed(), CATALOGUE.len());
        assert_eq!(report.failed(), 0);
        assert_eq!(report.skipped(), 0);
    }

    #[tokio::test]
    async fn run_one_executes_extras_by_name() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v2/trackEvent");
            then.status(200).body("{}");
        });

        let settings = settings_for(&server);
        let client = ApiClient::new(&settings).unwrap();

        let record = run_one(
            UseCase::TrackEvent,
            &client,
            &settings,
            &RunOptions::default(),
        )
        .await;

        mock.assert();
        assert!(matches!(record.outcome, StepOutcome::Completed(_)));
    }
}
