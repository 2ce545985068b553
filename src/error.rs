use thiserror::Error;

use crate::wizard::{FieldErrors, Step};

#[derive(Error, Debug)]
pub enum OnboardError {
    #[error("{action} is not available on step {step}")]
    NotAvailable { action: &'static str, step: Step },

    #[error("Validation failed on step {step}: {errors}")]
    Validation { step: Step, errors: FieldErrors },

    #[error("The wizard has already been closed")]
    Closed,

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Document field '{0}' does not belong to the selected document type")]
    InactiveDocument(String),

    #[error("Unknown option '{value}' for {field}")]
    UnknownOption { field: String, value: String },

    #[error("Field '{0}' does not take an attachment")]
    NotAnAttachment(String),

    #[error("Field '{0}' takes an attachment, not text")]
    AttachmentField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OnboardError>;
