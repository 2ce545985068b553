//! Multipart submission to the dashboard's REST backend

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use super::{SubmitError, Submitter};
use crate::wizard::SubmissionPayload;
use crate::{OnboardError, Result};

/// POSTs `multipart/form-data`: a `payload` JSON part and one part per new
/// attachment.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpSubmitter {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|e| OnboardError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("fpo-onboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OnboardError::Http(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn form(payload: &SubmissionPayload) -> std::result::Result<Form, SubmitError> {
        let json = serde_json::to_string(payload)?;
        let mut form = Form::new().part(
            "payload",
            Part::text(json)
                .mime_str("application/json")
                .map_err(|e| SubmitError::new(e.to_string()))?,
        );
        for (name, file) in payload.uploads() {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .map_err(|e| SubmitError::new(e.to_string()))?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> std::result::Result<(), SubmitError> {
        let form = Self::form(payload)?;
        debug!(endpoint = %self.endpoint, uploads = payload.uploads().len(), "Posting registration");

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "Backend accepted registration");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, "Backend rejected registration");
        if body.trim().is_empty() {
            Err(SubmitError::new(format!("Backend returned {}", status)))
        } else {
            Err(SubmitError::new(format!("Backend returned {}: {}", status, body.trim())))
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
