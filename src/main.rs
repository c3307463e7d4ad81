mod cli;

use cli::Args;
use sbom_kit::adapters::inbound::StdioServer;
use sbom_kit::adapters::outbound::system::SystemIdentitySource;
use sbom_kit::application::tool_service::SbomToolService;
use sbom_kit::config::{discover_config, load_config_from_path, AppConfig};
use sbom_kit::shared::error::ExitCode;
use sbom_kit::shared::Result;
use std::io;
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(code.as_i32());
}

fn run(args: Args) -> Result<()> {
    let config_file = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let config = AppConfig::resolve(config_file, |key| std::env::var(key).ok())?;

    init_tracing(args.log_level.as_deref(), config.log_level.as_deref());
    for field in &config.ignored_fields {
        tracing::warn!(field = %field, "unknown config field will be ignored");
    }

    let service = SbomToolService::new(SystemIdentitySource, config.settings, config.source);
    let server = StdioServer::new(service);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "serving JSON-RPC on stdio");
    let stdin = io::stdin();
    let stdout = io::stdout();
    server.run(stdin.lock(), stdout.lock())
}

/// `--log-level` wins, then `RUST_LOG`, then the config file, then `info`
fn init_tracing(cli_level: Option<&str>, config_level: Option<&str>) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_level.unwrap_or("info"))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
