//! Submission callbacks.
//!
//! The wizard never talks to the backend itself. A host hands it a
//! [`Submitter`], which resolves on success or rejects with an opaque
//! [`SubmitError`] that is shown to the user verbatim.

pub mod outbox;
#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

use crate::config::{OnboardConfig, SubmissionTarget};
use crate::wizard::SubmissionPayload;
use crate::Result;

pub use outbox::OutboxSubmitter;
#[cfg(feature = "http")]
pub use http::HttpSubmitter;

/// Rejection reported by a submitter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SubmitError(String);

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<std::io::Error> for SubmitError {
    fn from(e: std::io::Error) -> Self {
        Self(e.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        Self(e.to_string())
    }
}

/// Hands a completed payload to whatever persists it
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> std::result::Result<(), SubmitError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Adapts an async closure into a [`Submitter`]
pub struct FnSubmitter<F>(F);

/// Wrap a closure as a submitter. The closure receives its own copy of the
/// payload.
pub fn submit_fn<F, Fut>(f: F) -> FnSubmitter<F>
where
    F: Fn(SubmissionPayload) -> Fut + Send + Sync,
    Fut: Future<Output = std::result::Result<(), SubmitError>> + Send + 'static,
{
    FnSubmitter(f)
}

#[async_trait]
impl<F, Fut> Submitter for FnSubmitter<F>
where
    F: Fn(SubmissionPayload) -> Fut + Send + Sync,
    Fut: Future<Output = std::result::Result<(), SubmitError>> + Send + 'static,
{
    async fn submit(&self, payload: &SubmissionPayload) -> std::result::Result<(), SubmitError> {
        (self.0)(payload.clone()).await
    }

    fn name(&self) -> &'static str {
        "callback"
    }
}

/// Build the submitter selected by configuration
pub fn from_config(config: &OnboardConfig) -> Result<Arc<dyn Submitter>> {
    match &config.submission {
        SubmissionTarget::Outbox { dir } => Ok(Arc::new(OutboxSubmitter::new(dir.clone()))),
        #[cfg(feature = "http")]
        SubmissionTarget::Http { endpoint } => Ok(Arc::new(HttpSubmitter::new(endpoint)?)),
        #[cfg(not(feature = "http"))]
        SubmissionTarget::Http { .. } => Err(crate::OnboardError::Config(
            "HTTP submission requires the 'http' feature".to_string(),
        )),
    }
}
