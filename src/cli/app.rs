use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fpo-onboard: employee registration for FPO management dashboards
#[derive(Parser)]
#[command(name = "fpo-onboard")]
#[command(version)]
#[command(about = "Employee registration wizard for FPO management dashboards")]
#[command(
    long_about = "fpo-onboard collects a new employee's personal, contact, relation, address, professional, bank, document and role details step by step, validates each step, and submits the record to the dashboard backend or a local outbox."
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter onboard.yaml
    Init {
        /// Directory to write onboard.yaml into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Run the interactive registration wizard
    Register {
        /// Configuration file (defaults to ./onboard.yaml, then the user config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Present as a dashboard overlay (no inline error text)
        #[arg(long)]
        embedded: bool,

        /// Existing record (JSON) to edit
        #[arg(long)]
        edit: Option<PathBuf>,
    },

    /// Check a record (JSON) against every step's rules
    Validate {
        /// Record file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Walk a record (JSON) through the wizard and submit it
    Submit {
        /// Record file
        file: PathBuf,

        /// Configuration file (defaults to ./onboard.yaml, then the user config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
