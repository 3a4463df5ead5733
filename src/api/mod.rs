//! Lead API client module

pub mod client;
pub mod traits;

pub use client::{LeadClient, QuoteSubmission, SubmitAck, SubmitError};
pub use traits::LeadApi;

#[cfg(test)]
pub use traits::MockLeadApi;
