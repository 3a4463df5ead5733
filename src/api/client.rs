//! HTTP client for the quote-request endpoint
//!
//! One POST with a JSON body carries the whole draft plus a source tag and
//! a timestamp. The endpoint is at-least-once from our side: nothing here
//! retries, and a manual resubmit after a failure may produce a duplicate,
//! which the backend accepts.

use crate::config::TuiConfig;
use crate::state::{validate::digits_of, QuoteDraft};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::traits::LeadApi;

/// Default lead API address
const DEFAULT_BASE_URL: &str = "https://api.quotedesk.io";

/// Source tag stamped on submissions unless configured otherwise
pub const DEFAULT_SOURCE_TAG: &str = "quotedesk-tui";

/// Request timeout; the UI blocks on the call, so keep it short
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Payload posted to the lead API.
///
/// Derived from the draft at submit time and dropped once the call resolves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub project_type: String,
    pub property_size: String,
    pub timeline: String,
    pub budget: String,
    pub message: String,
    /// Where this lead came from, e.g. "quotedesk-tui"
    pub source: String,
    /// RFC 3339 submission timestamp
    pub submitted_at: DateTime<Utc>,
}

impl QuoteSubmission {
    /// Build the payload from a validated draft
    pub fn from_draft(draft: &QuoteDraft, source: &str) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            // The validator already checked the digit count; send digits only
            phone: digits_of(&draft.phone),
            service_type: draft.service_type.clone(),
            project_type: draft.project_type.clone(),
            property_size: draft.property_size.clone(),
            timeline: draft.timeline.clone(),
            budget: draft.budget.clone(),
            message: draft.message.trim().to_string(),
            source: source.to_string(),
            submitted_at: Utc::now(),
        }
    }
}

/// Acknowledgment returned by the lead API on success
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitAck {
    /// Server-side reference for the new quote request
    pub id: Option<String>,
    pub message: Option<String>,
}

/// Why a submission did not go through
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("lead API returned status {status}")]
    Status { status: u16 },
    #[error("could not reach lead API: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the lead API
pub struct LeadClient {
    client: reqwest::Client,
    base_url: String,
}

impl LeadClient {
    /// Create a client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `QUOTEDESK_API_URL`, then config, then the
    /// built-in default
    pub fn from_config(config: &TuiConfig) -> Self {
        let base_url = std::env::var("QUOTEDESK_API_URL")
            .ok()
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl LeadApi for LeadClient {
    async fn check_connection(&self) -> bool {
        match self.client.get(self.endpoint("/api/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!("lead API health check failed: {err}");
                false
            }
        }
    }

    async fn submit_quote(&self, submission: QuoteSubmission) -> Result<SubmitAck, SubmitError> {
        let response = self
            .client
            .post(self.endpoint("/api/quote-requests"))
            .json(&submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        // The ack body is informational; an empty or malformed one is fine
        Ok(response.json::<SubmitAck>().await.unwrap_or_default())
    }
}
