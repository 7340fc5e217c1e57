//! Planner server: to-dos, calendar events, notes and share links.
//!
//! Main entry point that loads configuration, initializes logging and
//! dispatches the selected command.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use planner_core::config::AppConfig;
use planner_core::error::AppError;
use planner_database::DataStore;

/// Planner backend server
#[derive(Debug, Parser)]
#[command(name = "planner-server", version, about, long_about = None)]
struct Cli {
    /// Configuration overlay to load from `config/<env>.toml`
    /// (defaults to `$PLANNER_ENV`, then `development`)
    #[arg(short, long)]
    env: Option<String>,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Command>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Apply pending PostgreSQL migrations and exit
    Migrate,
    /// Load and validate configuration, print a summary and exit
    CheckConfig,
}

/// Arguments for the serve command
#[derive(Debug, Default, Args)]
struct ServeArgs {
    /// Override the server host
    #[arg(long)]
    host: Option<String>,

    /// Override the server port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let env = cli
        .env
        .clone()
        .or_else(|| std::env::var("PLANNER_ENV").ok())
        .unwrap_or_else(|| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(env = %env, "Configuration loaded");

    if let Err(e) = run(cli.command, config).await {
        tracing::error!(error = %e, "Planner exited with an error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(command: Option<Command>, mut config: AppConfig) -> Result<(), AppError> {
    match command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            tracing::info!("Starting Planner v{}", env!("CARGO_PKG_VERSION"));
            planner_api::run_server(config).await
        }
        Command::Migrate => {
            if config.database.provider != "postgres" {
                return Err(AppError::configuration(format!(
                    "Migrations need the postgres provider (configured: '{}')",
                    config.database.provider
                )));
            }
            config.database.auto_migrate = false;
            let store = DataStore::connect(&config.database).await?;
            let outcome = store.migrate().await;
            store.close().await;
            outcome
        }
        Command::CheckConfig => {
            println!("Configuration is valid");
            println!("  Server:   {}:{}", config.server.host, config.server.port);
            println!("  Database: {}", config.database.provider);
            println!("  Share:    {}/share/<token>", config.share.base_url.trim_end_matches('/'));
            println!("  Mail:     {}", config.mail.transport);
            println!(
                "  Logging:  {} ({})",
                config.logging.level, config.logging.format
            );
            Ok(())
        }
    }
}
