//! In-memory registry implementation.

use super::{full_name, generate_session_token, Registrant};
use crate::form::ValidatedForm;
use chrono::Utc;
use secrecy::SecretString;

/// Append-only, insertion-ordered list of registrants.
///
/// Owns the sequence counter, so assigning an id and storing the record
/// happen together under a single `&mut` borrow.
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<Registrant>,
    next_id: u64,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a registrant from validated fields and append it.
    pub fn append(&mut self, form: ValidatedForm, api_key: Option<&SecretString>) -> &Registrant {
        let sequence_id = self.next_id;
        self.next_id += 1;

        let record = Registrant {
            sequence_id,
            full_name: full_name(form.given_name(), form.first_surname(), form.second_surname()),
            given_name: form.given_name().to_string(),
            first_surname: form.first_surname().to_string(),
            second_surname: form.second_surname().to_string(),
            phone: form.phone().to_string(),
            national_id: form.national_id().to_string(),
            email: form.email().to_string(),
            registered_at: Utc::now(),
            api_key_ref: api_key.cloned(),
            session_token: generate_session_token(),
        };

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Get a record by sequence id.
    pub fn get(&self, sequence_id: u64) -> Option<&Registrant> {
        self.records.iter().find(|r| r.sequence_id == sequence_id)
    }

    /// Most recently appended record.
    pub fn latest(&self) -> Option<&Registrant> {
        self.records.last()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Registrant] {
        &self.records
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
