use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Every operation the CLI can run by name. The default catalogue covers
/// the reliable subset; the rest need nothing beyond configured defaults
/// but are only run when asked for explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseCase {
    Account,
    EmailHtml,
    EmailText,
    EmailDynamic,
    EmailTagged,
    Sms,
    Contacts,
    ContactLists,
    Senders,
    Webhooks,
    Templates,
    CreateContact,
    GetContact,
    WhatsAppStats,
    Ecommerce,
    TrackEvent,
}

/// The fixed run order. Sends sit between the account lookup and the
/// read-only calls, mirroring the order users see in the dashboard flow.
pub const CATALOGUE: [UseCase; 11] = [
    UseCase::Account,
    UseCase::EmailHtml,
    UseCase::EmailText,
    UseCase::EmailDynamic,
    UseCase::EmailTagged,
    UseCase::Sms,
    UseCase::Contacts,
    UseCase::ContactLists,
    UseCase::Senders,
    UseCase::Webhooks,
    UseCase::Templates,
];

/// Callable by slug but excluded from the default run: these either
/// mutate account data or sit behind optional plan features.
pub const EXTRAS: [UseCase; 5] = [
    UseCase::CreateContact,
    UseCase::GetContact,
    UseCase::WhatsAppStats,
    UseCase::Ecommerce,
    UseCase::TrackEvent,
];

static SLUGS: Lazy<HashMap<&'static str, UseCase>> = Lazy::new(|| {
    CATALOGUE
        .into_iter()
        .chain(EXTRAS)
        .map(|use_case| (use_case.slug(), use_case))
        .collect()
});

impl UseCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Get Account",
            Self::EmailHtml => "Send Email (HTML)",
            Self::EmailText => "Send Email (Text)",
            Self::EmailDynamic => "Send Email (Dynamic)",
            Self::EmailTagged => "Send Email (Tags)",
            Self::Sms => "Send SMS",
            Self::Contacts => "Get Contacts",
            Self::ContactLists => "Get Contact Lists",
            Self::Senders => "Get Senders",
            Self::Webhooks => "Get Webhooks",
            Self::Templates => "Get SMTP Templates",
            Self::CreateContact => "Create Contact",
            Self::GetContact => "Get Contact",
            Self::WhatsAppStats => "Get WhatsApp Statistics",
            Self::Ecommerce => "Activate eCommerce",
            Self::TrackEvent => "Track Custom Event",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::EmailHtml => "email-html",
            Self::EmailText => "email-text",
            Self::EmailDynamic => "email-dynamic",
            Self::EmailTagged => "email-tagged",
            Self::Sms => "sms",
            Self::Contacts => "contacts",
            Self::ContactLists => "contact-lists",
            Self::Senders => "senders",
            Self::Webhooks => "webhooks",
            Self::Templates => "templates",
            Self::CreateContact => "contact-create",
            Self::GetContact => "contact-get",
            Self::WhatsAppStats => "whatsapp-stats",
            Self::Ecommerce => "ecommerce-activate",
            Self::TrackEvent => "track-event",
        }
    }

    /// True for operations that deliver a real message to a real inbox or
    /// phone; these are gated behind `--send`.
    pub fn is_send(self) -> bool {
        matches!(
            self,
            Self::EmailHtml | Self::EmailText | Self::EmailDynamic | Self::EmailTagged | Self::Sms
        )
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        SLUGS.get(slug).copied()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        CATALOGUE.into_iter().chain(EXTRAS)
    }
}
