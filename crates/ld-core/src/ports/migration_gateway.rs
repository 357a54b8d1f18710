use crate::migration::MigrationRequest;
use crate::ports::errors::MigrationError;

/// The import service boundary. One POST per request, exactly one response
/// awaited, no retry.
#[async_trait::async_trait]
pub trait MigrationGatewayPort: Send + Sync {
    async fn submit(&self, request: &MigrationRequest) -> Result<(), MigrationError>;
}
