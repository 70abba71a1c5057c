mod chat;
mod cli;
mod dotenv;
mod lead;

use std::process::ExitCode;

use titu_common::TituError;
use titu_config::TituConfig;
use titu_platform::FileIdentityStore;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

const DEFAULT_DIRECTIVE: &str = "titu=info";

fn init_logging(args: &Args, config: Option<&TituConfig>) {
    let directive = args
        .log_level
        .clone()
        .or_else(|| config.map(|c| c.logging.level.directive().to_string()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());

    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("titu: ignoring log filter {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args, config: TituConfig) -> Result<(), TituError> {
    match args.command() {
        Command::Chat => {
            let identity = FileIdentityStore::open_default()?;
            tracing::debug!(path = %identity.path().display(), "identity store");
            chat::run(&config, &identity).await
        }
        Command::Lead => lead::run(&config).await,
    }
}

fn main() -> ExitCode {
    let dotenv = dotenv::load();
    let args = cli::parse();

    let config = titu_config::load_config(args.config.as_deref());
    init_logging(&args, config.as_ref().ok());

    tracing::info!("Titu v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("titu: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = titu_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("titu: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&args, config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("titu: {e}");
            ExitCode::FAILURE
        }
    }
}
