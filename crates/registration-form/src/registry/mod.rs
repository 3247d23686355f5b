//! Registrant records and the in-memory registry.

mod memory;

pub use memory::Registry;

use chrono::{DateTime, Utc};
use collector_client::RegistrationPayload;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Prefix of every generated session token.
pub const SESSION_TOKEN_PREFIX: &str = "TOKEN_";

/// An assembled registration record.
///
/// Only [`Registry::append`] creates these; they are never mutated afterwards.
#[derive(Clone)]
pub struct Registrant {
    pub sequence_id: u64,
    pub given_name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub full_name: String,
    pub phone: String,
    pub national_id: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
    pub api_key_ref: Option<SecretString>,
    pub session_token: String,
}

impl Registrant {
    /// Build the body sent to the collection endpoint.
    pub fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            id: self.sequence_id,
            given_name: self.given_name.clone(),
            first_surname: self.first_surname.clone(),
            second_surname: self.second_surname.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            national_id: self.national_id.clone(),
            email: self.email.clone(),
            registered_at: self.registered_at,
            api_key: self
                .api_key_ref
                .as_ref()
                .map(|key| key.expose_secret().clone()),
            session_token: self.session_token.clone(),
        }
    }
}

impl fmt::Debug for Registrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrant")
            .field("sequence_id", &self.sequence_id)
            .field("registered_at", &self.registered_at)
            .field("has_api_key", &self.api_key_ref.is_some())
            .finish_non_exhaustive()
    }
}

/// Join the name parts with single spaces.
///
/// The second surname is always joined, so an empty one leaves a trailing
/// space ("Ana López ").
pub fn full_name(given_name: &str, first_surname: &str, second_surname: &str) -> String {
    format!("{} {} {}", given_name, first_surname, second_surname)
}

/// Generate an opaque per-record session token.
///
/// This identifies a record for display and correlation only. It is not an
/// authentication credential.
pub fn generate_session_token() -> String {
    format!("{}{}", SESSION_TOKEN_PREFIX, to_base36(rand::random::<u64>()))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".into();
    }

    let mut out = Vec::with_capacity(13);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_keeps_trailing_space() {
        assert_eq!(full_name("Ana", "López", "Ruiz"), "Ana López Ruiz");
        // Empty second surname still gets its separator.
        assert_eq!(full_name("Ana", "López", ""), "Ana López ");
    }

    #[test]
    fn test_session_token_shape() {
        let token = generate_session_token();
        let fragment = token.strip_prefix(SESSION_TOKEN_PREFIX).unwrap();

        assert!(!fragment.is_empty());
        assert!(fragment.len() <= 13);
        assert!(fragment
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }
}
