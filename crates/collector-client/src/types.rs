//! Wire types for the collection endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Registrant record as sent to the collection endpoint.
///
/// Field names follow the endpoint's camelCase contract.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub id: u64,
    pub given_name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub full_name: String,
    pub phone: String,
    pub national_id: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
    pub api_key: Option<String>,
    pub session_token: String,
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("id", &self.id)
            .field("registered_at", &self.registered_at)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}
