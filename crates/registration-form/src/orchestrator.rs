//! Submission pipeline: validate, assemble, present, reset, submit.

use crate::error::{FormError, FormResult};
use crate::form::{validate_form, RegistrationForm, Rejection};
use crate::registry::Registry;
use crate::render::{render_page, RegistrantTable, TableRow};
use crate::submission::{Delivery, Dispatcher};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Registry and visible table, kept under one lock so rows always follow
/// registry order.
#[derive(Debug, Default)]
pub struct FormState {
    registry: Registry,
    table: RegistrantTable,
}

impl FormState {
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn table(&self) -> &RegistrantTable {
        &self.table
    }
}

/// Outcome of an accepted submission.
#[derive(Debug)]
pub struct Submission {
    pub sequence_id: u64,
    pub full_name: String,
    pub registered_at: DateTime<Utc>,
    pub row: TableRow,
    /// Form values to show after the submission (always blank).
    pub reset_form: RegistrationForm,
    pub delivery: Delivery,
}

/// Owns the process-wide registration state and runs the fixed pipeline.
pub struct Orchestrator {
    state: Mutex<FormState>,
    api_key: Option<SecretString>,
    dispatcher: Dispatcher,
}

impl Orchestrator {
    pub fn new(api_key: Option<SecretString>, dispatcher: Dispatcher) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            api_key,
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Lock the registration state for reading.
    pub async fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().await
    }

    /// Handle one form submission.
    ///
    /// Stops at the first failing field without touching the registry.
    pub async fn submit(&self, form: &RegistrationForm) -> FormResult<Submission> {
        let validated = validate_form(form).map_err(|rejection| {
            info!(field = %rejection.field, "Submission rejected");
            FormError::from(rejection)
        })?;

        let (payload, row) = {
            let mut state = self.state.lock().await;
            let FormState { registry, table } = &mut *state;

            let record = registry.append(validated, self.api_key.as_ref());
            let row = table.append_row(record).clone();
            (record.to_payload(), row)
        };

        let sequence_id = payload.id;
        let full_name = payload.full_name.clone();
        let registered_at = payload.registered_at;
        info!(sequence_id, "Registrant recorded");

        debug!(sequence_id, "Form reset");
        let reset_form = RegistrationForm::default();

        let delivery = self.dispatcher.dispatch(payload);

        Ok(Submission {
            sequence_id,
            full_name,
            registered_at,
            row,
            reset_form,
            delivery,
        })
    }

    /// Render the page with the current table.
    pub async fn render(&self, form: &RegistrationForm, rejection: Option<&Rejection>) -> String {
        let state = self.state.lock().await;
        render_page(&state.table, form, rejection)
    }
}
