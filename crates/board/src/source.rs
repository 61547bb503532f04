//! Where the board gets its listings from.

use async_trait::async_trait;

use jobdeck_client::{Gateway, GatewayError};
use jobdeck_core::JobSummary;

/// Listing provider for the board view.
///
/// The view only ever asks for the full listing, so this is the whole
/// surface. Production uses the gateway; tests use a scripted source.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, GatewayError>;
}

#[async_trait]
impl JobSource for Gateway {
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, GatewayError> {
        Gateway::list_jobs(self).await
    }
}
