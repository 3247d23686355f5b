//! API request and response types.

use crate::registry::Registrant;
use crate::submission::DeliverySnapshot;
use serde::Serialize;

/// Response after an accepted JSON submission.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub sequence_id: u64,
    pub full_name: String,
    pub registered_at: String,
    /// "dispatched" or "skipped"
    pub delivery: String,
}

/// Registrant info for listing. Carries no api key or session token.
#[derive(Debug, Serialize)]
pub struct RegistrantInfo {
    pub sequence_id: u64,
    pub full_name: String,
    pub phone: String,
    pub national_id: String,
    pub email: String,
    pub registered_at: String,
}

impl From<&Registrant> for RegistrantInfo {
    fn from(r: &Registrant) -> Self {
        Self {
            sequence_id: r.sequence_id,
            full_name: r.full_name.clone(),
            phone: r.phone.clone(),
            national_id: r.national_id.clone(),
            email: r.email.clone(),
            registered_at: r.registered_at.to_rfc3339(),
        }
    }
}

/// List of registrants.
#[derive(Debug, Serialize)]
pub struct RegistrantsResponse {
    pub registrants: Vec<RegistrantInfo>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub registry_count: usize,
    pub max_records: usize,
    pub collector_configured: bool,
    pub deliveries: DeliverySnapshot,
}
