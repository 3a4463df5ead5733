//! Trait abstraction for the lead API client to enable mocking in tests

use async_trait::async_trait;

use super::client::{QuoteSubmission, SubmitAck, SubmitError};

/// Trait for lead API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadApi: Send + Sync {
    /// Check if the lead API is reachable
    async fn check_connection(&self) -> bool;

    /// Submit a finished quote request
    async fn submit_quote(&self, submission: QuoteSubmission) -> Result<SubmitAck, SubmitError>;
}
