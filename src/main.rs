use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fpo_onboard::cli::commands::{
    init::InitCommand, register::RegisterCommand, submit::SubmitCommand,
    validate::ValidateCommand, CommandHandler, CommandResult,
};
use fpo_onboard::cli::{Cli, Commands, LogLevel};
use fpo_onboard::io::paths::OnboardPaths;

/// Initialize tracing with the CLI log level.
///
/// Logs go to stderr, except while the terminal UI owns the screen; then
/// they go to a file under the data directory.
fn initialize_tracing(log_level: &LogLevel, to_file: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if to_file {
        let file = OnboardPaths::new().and_then(|paths| {
            paths.ensure_data_dir()?;
            Ok(std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())?)
        });
        if let Ok(file) = file {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = cfg!(feature = "tui") && matches!(cli.command, Commands::Register { .. });
    initialize_tracing(&cli.log_level, interactive);

    let handler: Box<dyn CommandHandler + Send + Sync> = match cli.command {
        Commands::Init { output, force } => Box::new(InitCommand::new(output, force)),
        Commands::Register {
            config,
            embedded,
            edit,
        } => Box::new(RegisterCommand::new(config, embedded, edit)),
        Commands::Validate { file, format } => Box::new(ValidateCommand::new(file, format)),
        Commands::Submit { file, config } => Box::new(SubmitCommand::new(file, config)),
    };

    tracing::debug!(command = handler.name(), "Running command");
    let result = handler.execute().await?;

    match &result {
        CommandResult::Success(Some(message)) => eprintln!("✅ {}", message),
        CommandResult::Success(None) => {}
        CommandResult::Warning(message) => eprintln!("⚠️  {}", message),
        CommandResult::Error(message) => eprintln!("❌ {}", message),
    }

    if result.exit_code() != 0 {
        std::process::exit(result.exit_code());
    }
    Ok(())
}
