use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wizard::Presentation;

/// Where completed registrations go
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SubmissionTarget {
    /// POST to the dashboard backend
    Http { endpoint: String },
    /// Write to a local directory
    Outbox { dir: PathBuf },
}

/// Root configuration file structure for onboard.yaml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnboardConfig {
    /// Standalone page or embedded dashboard overlay
    #[serde(default)]
    pub presentation: Presentation,

    /// Submission target
    #[serde(default = "default_submission")]
    pub submission: SubmissionTarget,
}

fn default_submission() -> SubmissionTarget {
    SubmissionTarget::Outbox {
        dir: PathBuf::from("outbox"),
    }
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            presentation: Presentation::default(),
            submission: default_submission(),
        }
    }
}

/// Template written by `fpo-onboard init`
pub const CONFIG_TEMPLATE: &str = r#"# fpo-onboard configuration

# standalone: full-screen wizard, shows a success screen when done
# embedded:   dashboard overlay, inline error text is hidden
presentation: standalone

# Where completed registrations are sent
submission:
  kind: outbox
  dir: outbox

# To post directly to the dashboard backend instead:
# submission:
#   kind: http
#   endpoint: https://dashboard.example.org/api/employees
"#;
