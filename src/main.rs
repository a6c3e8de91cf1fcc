//! Library catalog - terminal front end
//!
//! Runs one catalog command, or an interactive shell when none is given.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    cli::{Cli, Flow, OutputFormat, Shell},
    config::{AppConfig, LoggingConfig},
    AppState,
};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    init_tracing(&config.logging);
    tracing::info!("Starting library catalog v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config);
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let stdout = io::stdout();
    let mut shell = Shell::new(state.services.clone(), stdout.lock(), format);

    let mut status = ExitCode::SUCCESS;
    match cli.command.and_then(|c| c.into_shell_command()) {
        Some(command) => {
            if shell.execute(command)? == Flow::Failed {
                status = ExitCode::FAILURE;
            }
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Type `help` for commands, `quit` to leave.");
                shell = shell.with_prompt("> ");
            }
            shell.run(stdin.lock())?;
        }
    }

    tracing::info!("Library catalog stopped");
    Ok(status)
}

/// Initialize tracing on stderr, keeping stdout for catalog output
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
