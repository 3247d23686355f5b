//! HTTP client for the remote registrant collection endpoint.

mod client;
mod error;
mod types;

pub use client::CollectorClient;
pub use error::CollectorError;
pub use types::RegistrationPayload;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use secrecy::SecretString;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> CollectorClient {
        CollectorClient::new(
            format!("{}/api/usuarios/guardar", mock_server.uri()),
            SecretString::new("Bearer test-token".into()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn sample_payload() -> RegistrationPayload {
        RegistrationPayload {
            id: 0,
            given_name: "María".into(),
            first_surname: "Pérez".into(),
            second_surname: "Núñez".into(),
            full_name: "María Pérez Núñez".into(),
            phone: "5551234567".into(),
            national_id: "PENM900101MDFRXR05".into(),
            email: "maria@example.com".into(),
            registered_at: Utc::now(),
            api_key: Some("sk_test".into()),
            session_token: "TOKEN_k3j2h1".into(),
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/usuarios/guardar"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "id": 0,
                "fullName": "María Pérez Núñez",
                "nationalId": "PENM900101MDFRXR05",
                "apiKey": "sk_test"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.submit(&sample_payload()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_submit_ignores_response_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(client.submit(&sample_payload()).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.submit(&sample_payload()).await;
        assert!(matches!(result, Err(CollectorError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_submit_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        match client.submit(&sample_payload()).await {
            Err(CollectorError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_unreachable_endpoint() {
        let client = CollectorClient::new(
            "http://127.0.0.1:9/unreachable",
            SecretString::new("Bearer test-token".into()),
            Duration::from_secs(1),
        )
        .unwrap();

        let result = client.submit(&sample_payload()).await;
        assert!(matches!(result, Err(CollectorError::Http(_))));
    }

    #[test]
    fn test_endpoint_getter() {
        let client = CollectorClient::new(
            "http://collector.local/api",
            SecretString::new("Bearer x".into()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://collector.local/api");
    }
}
