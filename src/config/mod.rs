//! onboard.yaml configuration

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_FILE};
pub use types::{OnboardConfig, SubmissionTarget, CONFIG_TEMPLATE};
