//! Collection endpoint HTTP client.

use crate::error::CollectorError;
use crate::types::RegistrationPayload;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the remote endpoint that collects registrant records.
///
/// The auth token is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output. It is sent verbatim as the
/// `Authorization` header, so it must already carry its scheme
/// (e.g. `Bearer sk_...`).
#[derive(Clone)]
pub struct CollectorClient {
    client: Client,
    endpoint: String,
    auth_token: SecretString,
}

impl CollectorClient {
    /// Create a new collector client.
    pub fn new(
        endpoint: impl Into<String>,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, CollectorError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_token,
        })
    }

    /// Target URL records are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one registrant record.
    ///
    /// Only the status code is inspected; the response body is ignored.
    #[instrument(skip(self, payload), fields(sequence_id = payload.id))]
    pub async fn submit(&self, payload: &RegistrationPayload) -> Result<(), CollectorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", self.auth_token.expose_secret().as_str())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "Record accepted by collection endpoint");
            return Ok(());
        }

        Err(Self::extract_error(response).await)
    }

    async fn extract_error(response: reqwest::Response) -> CollectorError {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Collection endpoint rejected the auth token");
            return CollectorError::Unauthorized;
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".into());
        warn!(%status, "Collection endpoint returned an error");

        CollectorError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
