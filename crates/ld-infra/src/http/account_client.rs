use async_trait::async_trait;
use ld_core::account::Account;
use ld_core::config::AppConfig;
use ld_core::ports::{AccountGatewayPort, AccountUpdateError};
use serde::Deserialize;
use tracing::debug;

const UPDATE_FALLBACK_MESSAGE: &str = "Failed to update the account.";

/// Error body shape of the account endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// reqwest client for `PUT /api/v1/users/{id}`.
///
/// The survey submission sends the full account object with `referred_by`
/// overlaid; only success or the error `message` is consumed here.
pub struct HttpAccountClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAccountClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn endpoint(&self, account: &Account) -> String {
        format!(
            "{}/api/v1/users/{}",
            self.base_url.trim_end_matches('/'),
            account.id
        )
    }
}

#[async_trait]
impl AccountGatewayPort for HttpAccountClient {
    async fn update(&self, account: &Account) -> Result<(), AccountUpdateError> {
        let response = self
            .http
            .put(self.endpoint(account))
            .json(account)
            .send()
            .await
            .map_err(|e| AccountUpdateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| UPDATE_FALLBACK_MESSAGE.to_string());
            return Err(AccountUpdateError::Rejected { message });
        }

        debug!(status = %status, account = %account.id, "account updated");
        Ok(())
    }
}
