use crate::account::Account;
use crate::ports::errors::AccountUpdateError;

/// Account update boundary, consumed by the survey submission. Takes the
/// full account object with `referred_by` overlaid.
#[async_trait::async_trait]
pub trait AccountGatewayPort: Send + Sync {
    async fn update(&self, account: &Account) -> Result<(), AccountUpdateError>;
}
