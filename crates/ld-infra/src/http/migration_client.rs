use async_trait::async_trait;
use ld_core::config::AppConfig;
use ld_core::migration::MigrationRequest;
use ld_core::ports::{MigrationError, MigrationGatewayPort};
use serde::Deserialize;
use tracing::debug;

/// Error body shape of the import endpoint; only the optional `response`
/// text is consumed.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    response: Option<String>,
}

/// reqwest client for `POST /api/v1/migration`.
///
/// One submission per request, exactly one response awaited, no retry.
pub struct HttpMigrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMigrationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/migration", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MigrationGatewayPort for HttpMigrationClient {
    async fn submit(&self, request: &MigrationRequest) -> Result<(), MigrationError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| MigrationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: a non-JSON error body degrades to no message.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.response);
            return Err(MigrationError::Rejected { message });
        }

        // The success body is JSON but its shape is not otherwise consumed.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| MigrationError::Transport(e.to_string()))?;

        debug!(status = %status, "migration accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ld_core::migration::MigrationFormat;
    use serde_json::json;

    fn request() -> MigrationRequest {
        MigrationRequest::new(MigrationFormat::HtmlFile, "<html></html>").unwrap()
    }

    #[tokio::test]
    async fn test_accepted_submission_resolves_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/migration")
            .match_body(mockito::Matcher::Json(json!({
                "format": "htmlFile",
                "data": "<html></html>",
            })))
            .with_status(200)
            .with_body(r#"{"response":"ok"}"#)
            .create_async()
            .await;

        let client = HttpMigrationClient::from_config(&AppConfig {
            api_base_url: server.url(),
            ..AppConfig::default()
        });
        client.submit(&request()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_carries_the_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/migration")
            .with_status(400)
            .with_body(r#"{"response":"bad format"}"#)
            .create_async()
            .await;

        let client = HttpMigrationClient::new(server.url());
        let error = client.submit(&request()).await.unwrap_err();

        match error {
            MigrationError::Rejected { message } => {
                assert_eq!(message.as_deref(), Some("bad format"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_a_body_has_no_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/migration")
            .with_status(500)
            .with_body("internal server error")
            .create_async()
            .await;

        let client = HttpMigrationClient::new(server.url());
        let error = client.submit(&request()).await.unwrap_err();

        match error {
            MigrationError::Rejected { message } => assert_eq!(message, None),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Nothing listens on this port
        let client = HttpMigrationClient::new("http://127.0.0.1:9");
        let error = client.submit(&request()).await.unwrap_err();

        assert!(matches!(error, MigrationError::Transport(_)));
    }
}
