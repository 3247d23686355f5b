//! HTTP request handlers.

use super::types::{HealthResponse, RegisterResponse, RegistrantInfo, RegistrantsResponse};
use super::AppState;
use crate::error::FormError;
use crate::form::{RegistrationForm, Rejection};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry_count = state.orchestrator.state().await.registry().len();
    let dispatcher = state.orchestrator.dispatcher();

    Json(HealthResponse {
        status: "ok".to_string(),
        registry_count,
        max_records: state.max_records,
        collector_configured: dispatcher.is_configured(),
        deliveries: dispatcher.stats(),
    })
}

/// Registration page with a blank form.
pub async fn form_page(State(state): State<AppState>) -> Html<String> {
    Html(
        state
            .orchestrator
            .render(&RegistrationForm::default(), None)
            .await,
    )
}

/// Browser form submission.
///
/// A rejection re-renders the page with the submitted values and the
/// message; a success renders a blank form and the updated table.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<(StatusCode, Html<String>), FormError> {
    match state.orchestrator.submit(&form).await {
        Ok(submission) => {
            let page = state.orchestrator.render(&submission.reset_form, None).await;
            Ok((StatusCode::CREATED, Html(page)))
        }
        Err(FormError::Validation { field, message }) => {
            let rejection = Rejection { field, message };
            let page = state.orchestrator.render(&form, Some(&rejection)).await;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)))
        }
        Err(e) => Err(e),
    }
}

/// JSON submission.
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegistrationForm>,
) -> Result<(StatusCode, Json<RegisterResponse>), FormError> {
    let submission = state.orchestrator.submit(&form).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            sequence_id: submission.sequence_id,
            full_name: submission.full_name,
            registered_at: submission.registered_at.to_rfc3339(),
            delivery: submission.delivery.label().to_string(),
        }),
    ))
}

/// List all registrants in registration order.
pub async fn list_registrants(State(state): State<AppState>) -> Json<RegistrantsResponse> {
    let guard = state.orchestrator.state().await;
    let registrants: Vec<RegistrantInfo> = guard
        .registry()
        .list()
        .iter()
        .map(RegistrantInfo::from)
        .collect();

    let total = registrants.len();
    Json(RegistrantsResponse { registrants, total })
}

/// Get one registrant by sequence id.
pub async fn get_registrant(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RegistrantInfo>, FormError> {
    let guard = state.orchestrator.state().await;
    let record = guard.registry().get(id).ok_or(FormError::NotFound(id))?;

    Ok(Json(RegistrantInfo::from(record)))
}
