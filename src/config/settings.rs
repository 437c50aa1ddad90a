use std::path::Path;

use anyhow::Result;

use crate::env::{load_env_file, merged_process_env, EnvMap};

const DEFAULT_API_BASE: &str = "https://api.brevo.com";
const DEFAULT_TRACKER_BASE: &str = "https://in-automate.brevo.com";

/// Runtime configuration, resolved once at startup and passed by reference.
///
/// The API key stays optional here: a missing key only becomes an error
/// when a request is actually attempted.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub tracker_base: String,
    pub sender_email: String,
    pub sender_name: String,
    pub recipient_email: String,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            tracker_base: DEFAULT_TRACKER_BASE.to_string(),
            sender_email: "hello@example.com".to_string(),
            sender_name: "Your Company".to_string(),
            recipient_email: "test@example.com".to_string(),
            recipient_name: "Test User".to_string(),
            recipient_phone: None,
        }
    }
}

impl Settings {
    /// Resolve settings from an explicit `.env` file (error if unreadable),
    /// or from `./.env` when present, with process variables taking
    /// precedence over file values either way.
    pub fn load(explicit_env: Option<&Path>) -> Result<Self> {
        let mut file_env = EnvMap::new();
        if let Some(path) = explicit_env {
            load_env_file(path, &mut file_env)?;
        } else {
            let default_path = Path::new(".env");
            if default_path.exists() {
                load_env_file(default_path, &mut file_env)?;
            }
        }
        Ok(Self::from_map(&merged_process_env(&file_env)))
    }

    pub fn from_map(env: &EnvMap) -> Self {
        let defaults = Self::default();
        Self {
            api_key: non_empty(env, "BREVO_API_KEY")
                .or_else(|| non_empty(env, "BREVO_WEBHOOK_SECRET")),
            api_base: non_empty(env, "BREVO_API_BASE").unwrap_or(defaults.api_base),
            tracker_base: non_empty(env, "BREVO_TRACKER_BASE").unwrap_or(defaults.tracker_base),
            sender_email: non_empty(env, "BREVO_SENDER_EMAIL").unwrap_or(defaults.sender_email),
            sender_name: non_empty(env, "BREVO_SENDER_NAME").unwrap_or(defaults.sender_name),
            recipient_email: non_empty(env, "BREVO_TEST_EMAIL").unwrap_or(defaults.recipient_email),
            recipient_name: non_empty(env, "BREVO_TEST_USER").unwrap_or(defaults.recipient_name),
            recipient_phone: non_empty(env, "BREVO_TEST_PHONE"),
        }
    }

    /// The configured sender, if it looks usable: a real address rather
    /// than one of the placeholder domains the defaults ship with.
    pub fn configured_sender(&self) -> Option<(&str, &str)> {
        let email = self.sender_email.as_str();
        if email.contains('@') && !email.contains("example") && !email.contains("yourdomain") {
            Some((email, self.sender_name.as_str()))
        } else {
            None
        }
    }
}

fn non_empty(env: &EnvMap, key: &str) -> Option<String> {
    env.get(key).filter(|value| !value.is_empty()).cloned()
}
