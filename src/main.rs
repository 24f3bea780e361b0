//! Vacation engine CLI.

use std::io::{self, IsTerminal};
use std::path::Path;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use vacation_engine::api::{AppState, create_router};
use vacation_engine::config::{ConfigLoader, PolicyConfig};
use vacation_engine::error::EngineResult;
use vacation_engine::logging::{LogConfig, LogFormat, init_logging};
use vacation_engine::processor;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, ServeArgs, VacationArgs};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match cli.command {
        Command::Vacation(args) => match run_vacation(&args).await {
            Ok(()) => 0,
            Err(_) => 1,
        },
        Command::Serve(args) => match run_serve(&args).await {
            Ok(()) => 0,
            Err(_) => 1,
        },
    };
    std::process::exit(exit_code);
}

/// Builds logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };

    LogConfig {
        use_env_filter: !cli.verbosity.is_present(),
        ..LogConfig::default()
    }
    .with_level_filter(cli.verbosity.tracing_level_filter())
    .with_format(format)
    .with_ansi(io::stderr().is_terminal())
}

fn load_policy(path: Option<&Path>) -> EngineResult<PolicyConfig> {
    let Some(path) = path else {
        return Ok(PolicyConfig::default());
    };

    let loader = ConfigLoader::load(path).inspect_err(|e| error!("{}", e))?;
    debug!(path = %path.display(), policy = ?loader.policy(), "Loaded policy");
    Ok(loader.into_policy())
}

async fn run_vacation(args: &VacationArgs) -> EngineResult<()> {
    let policy = load_policy(args.policy.as_deref())?;
    processor::run(
        &args.year,
        &args.input_file,
        args.output_file.as_deref(),
        &policy,
    )
    .await
    .map(|_| ())
}

async fn run_serve(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let policy = load_policy(args.policy.as_deref())?;
    let router = create_router(AppState::new(policy));

    let listener = TcpListener::bind(args.addr)
        .await
        .inspect_err(|e| error!(addr = %args.addr, "Failed to bind: {}", e))?;
    info!(addr = %args.addr, "Listening for entitlement requests");

    axum::serve(listener, router)
        .await
        .inspect_err(|e| error!("Server failed: {}", e))?;
    Ok(())
}
