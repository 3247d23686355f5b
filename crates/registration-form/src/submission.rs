//! Fire-and-forget forwarding of registrant records.

use async_trait::async_trait;
use collector_client::{CollectorClient, CollectorError, RegistrationPayload};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Destination for assembled records.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), CollectorError>;
}

#[async_trait]
impl Submitter for CollectorClient {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), CollectorError> {
        CollectorClient::submit(self, payload).await
    }
}

/// Result of handing a record to the dispatcher.
#[derive(Debug)]
pub enum Delivery {
    /// A send task was spawned. Awaiting the handle is optional.
    Dispatched(JoinHandle<Result<(), CollectorError>>),
    /// No collector is configured; nothing was sent.
    Skipped,
}

impl Delivery {
    pub fn label(&self) -> &'static str {
        match self {
            Delivery::Dispatched(_) => "dispatched",
            Delivery::Skipped => "skipped",
        }
    }
}

/// Delivery outcome counters.
#[derive(Debug, Default)]
pub struct DeliveryStats {
    succeeded: AtomicU64,
    failed: AtomicU64,
    skipped: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliverySnapshot {
    pub succeeded: u64,
    pub failed: u64,
    pub skipped: u64,
}

impl DeliveryStats {
    pub fn snapshot(&self) -> DeliverySnapshot {
        DeliverySnapshot {
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}

/// Spawns one independent send per record.
///
/// Sends are neither ordered nor cancellable, and failures never reach the
/// caller of [`Dispatcher::dispatch`]; they are logged and counted.
#[derive(Clone)]
pub struct Dispatcher {
    submitter: Option<Arc<dyn Submitter>>,
    delay: Duration,
    stats: Arc<DeliveryStats>,
}

impl Dispatcher {
    pub fn new(submitter: Arc<dyn Submitter>, delay: Duration) -> Self {
        Self {
            submitter: Some(submitter),
            delay,
            stats: Arc::default(),
        }
    }

    /// Dispatcher that drops every record.
    pub fn unconfigured() -> Self {
        Self {
            submitter: None,
            delay: Duration::ZERO,
            stats: Arc::default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.submitter.is_some()
    }

    pub fn stats(&self) -> DeliverySnapshot {
        self.stats.snapshot()
    }

    /// Hand a record off for sending.
    pub fn dispatch(&self, payload: RegistrationPayload) -> Delivery {
        let Some(submitter) = self.submitter.clone() else {
            error!(
                sequence_id = payload.id,
                "Collector configuration not available, record not sent"
            );
            self.stats.skipped.fetch_add(1, Ordering::Relaxed);
            return Delivery::Skipped;
        };

        let delay = self.delay;
        let stats = self.stats.clone();

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let result = submitter.submit(&payload).await;
            match &result {
                Ok(()) => {
                    stats.succeeded.fetch_add(1, Ordering::Relaxed);
                    debug!(sequence_id = payload.id, "Record delivered");
                }
                Err(e) => {
                    stats.failed.fetch_add(1, Ordering::Relaxed);
                    warn!(sequence_id = payload.id, error = %e, "Record delivery failed");
                }
            }
            result
        });

        Delivery::Dispatched(handle)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSubmitter;
    use super::*;
    use chrono::Utc;

    fn payload(id: u64) -> RegistrationPayload {
        RegistrationPayload {
            id,
            given_name: "Ana".into(),
            first_surname: "Ruiz".into(),
            second_surname: String::new(),
            full_name: "Ana Ruiz ".into(),
            phone: "5551234567".into(),
            national_id: "ABCD123456HDFLNS09".into(),
            email: "ana@example.com".into(),
            registered_at: Utc::now(),
            api_key: None,
            session_token: "TOKEN_x".into(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_payload() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let dispatcher = Dispatcher::new(submitter.clone(), Duration::ZERO);

        let Delivery::Dispatched(handle) = dispatcher.dispatch(payload(3)) else {
            panic!("expected dispatch");
        };
        handle.await.unwrap().unwrap();

        let received = submitter.received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, 3);
        assert_eq!(dispatcher.stats().succeeded, 1);
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_counted() {
        let dispatcher = Dispatcher::new(Arc::new(RecordingSubmitter::failing()), Duration::ZERO);

        let Delivery::Dispatched(handle) = dispatcher.dispatch(payload(0)) else {
            panic!("expected dispatch");
        };
        assert!(handle.await.unwrap().is_err());

        let stats = dispatcher.stats();
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.succeeded, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_waits_for_delay() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let dispatcher = Dispatcher::new(submitter.clone(), Duration::from_secs(1));

        let Delivery::Dispatched(handle) = dispatcher.dispatch(payload(0)) else {
            panic!("expected dispatch");
        };

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(submitter.received.lock().await.is_empty());

        handle.await.unwrap().unwrap();
        assert_eq!(submitter.received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_skips() {
        let dispatcher = Dispatcher::unconfigured();

        assert!(!dispatcher.is_configured());
        assert!(matches!(dispatcher.dispatch(payload(0)), Delivery::Skipped));
        assert_eq!(dispatcher.stats().skipped, 1);
    }
}
