//! Typed wrappers around the Brevo REST endpoints.
//!
//! Each function builds a [`RequestSpec`](crate::executor::RequestSpec) and
//! hands it to the executor. Nothing here catches errors; callers (usually
//! the runner) decide how failures are handled.

pub mod account;
pub mod contacts;
pub mod ecommerce;
pub mod email;
pub mod objects;
pub mod senders;
pub mod sms;
pub mod templates;
pub mod tracking;
pub mod webhooks;
pub mod whatsapp;

/// Offset pagination shared by the list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl PageQuery {
    pub fn first(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }

    pub(crate) fn to_query(self) -> Vec<(String, String)> {
        vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ]
    }
}
