/// Terminal user interface for the registration wizard
pub mod app;
pub mod events;
pub mod form;
pub mod modal;
pub mod screens;
pub mod theme;

use std::sync::Arc;

pub use app::{App, Effect, Screen};

use crate::submit::Submitter;
use crate::wizard::{CloseReason, Wizard};
use crate::Result;

/// Run the wizard until it closes or the user quits
pub async fn run(wizard: Wizard, submitter: Arc<dyn Submitter>) -> Result<Option<CloseReason>> {
    App::new(wizard, submitter).run().await
}
