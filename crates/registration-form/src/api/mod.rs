//! HTTP API for the registration service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::config::Config;
use crate::error::{FormError, FormResult};
use crate::orchestrator::Orchestrator;
use crate::submission::Dispatcher;
use axum::{middleware as axum_middleware, routing::get, Router};
use collector_client::CollectorClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registration pipeline and its state
    pub orchestrator: Arc<Orchestrator>,
    /// Declared registry capacity, reported by /health
    pub max_records: usize,
}

impl AppState {
    /// Create new application state.
    pub fn new(orchestrator: Orchestrator, max_records: usize) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            max_records,
        }
    }

    /// Build state from configuration.
    ///
    /// Missing collector settings are logged and disable forwarding; the
    /// form keeps working.
    pub fn from_config(config: &Config) -> FormResult<Self> {
        let dispatcher = match config.collector_settings() {
            Ok(settings) => {
                let client =
                    CollectorClient::new(settings.endpoint, settings.auth_token, settings.timeout)
                        .map_err(|e| {
                            FormError::Internal(format!("Failed to create collector client: {}", e))
                        })?;
                info!(endpoint = %client.endpoint(), "Forwarding records to collection endpoint");
                Dispatcher::new(Arc::new(client), settings.dispatch_delay)
            }
            Err(e) => {
                error!("{}; records will not be forwarded", e);
                Dispatcher::unconfigured()
            }
        };

        if config.api.api_key.is_none() {
            info!("No API key configured, records will carry none");
        }

        let orchestrator = Orchestrator::new(config.api.api_key.clone(), dispatcher);
        Ok(Self::new(orchestrator, config.system.max_records))
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Browser form
        .route("/", get(handlers::form_page).post(handlers::submit_form))
        // JSON API
        .route(
            "/v1/registrations",
            get(handlers::list_registrants).post(handlers::register),
        )
        .route("/v1/registrations/:id", get(handlers::get_registrant))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
