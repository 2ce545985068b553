//! fpo-onboard: employee registration wizard for FPO management dashboards

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod submit;
pub mod wizard;

pub use error::{OnboardError, Result};
