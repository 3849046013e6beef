use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use poli_api::{routes, server, Config};

/// HTTP backend for the Politécnico Ann y Ted Kheel website.
#[derive(Parser)]
#[command(name = "poli-api", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to TOML config file.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Socket address to bind, overriding config and `POLI_LISTEN`.
    #[arg(long, global = true)]
    listen: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default when no subcommand given).
    Serve,
    /// Print the route table and exit.
    Routes,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Routes => {
            for (method, path) in routes::ROUTES {
                println!("{method:<6} {path}");
            }
            ExitCode::SUCCESS
        }
        Commands::Serve => run_server(cli.config.as_deref(), cli.listen).await,
    }
}

async fn run_server(config_path: Option<&str>, listen: Option<String>) -> ExitCode {
    let mut config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("poli-api: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(listen) = listen {
        if let Err(e) = config.override_listen(listen) {
            eprintln!("poli-api: {e}");
            return ExitCode::FAILURE;
        }
    }

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("poli-api v{} starting", env!("CARGO_PKG_VERSION"));

    match server::run(config).await {
        Ok(()) => {
            info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
