//! layout-routes
//!
//! Serves the navigation route table consumed by the application layout.
//!
//! # Architecture Overview
//!
//! ```text
//!   routes.toml ──▶ config::loader ──▶ config::validation ──▶ AppConfig
//!        │                                                      │
//!        │ (--watch)                                            ▼
//!        └──▶ config::watcher ──mpsc──▶ reloader ──▶ ArcSwap<RouteTable>
//!                                                               │
//!   Client ──▶ http::server (request id, trace, timeout) ──▶ handlers
//!                                                               │
//!   Client ◀── JSON { "routes": [...] } ◀────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use layout_routes::config::{load_config, AppConfig, ConfigWatcher};
use layout_routes::http::HttpServer;
use layout_routes::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "layout-routes")]
#[command(about = "Navigation route table for the application layout", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the route table over HTTP (default)
    Serve {
        /// Override server.bind_address
        #[arg(short, long)]
        bind: Option<String>,

        /// Reload routes when the config file changes
        #[arg(short, long)]
        watch: bool,
    },
    /// Print the route table as JSON
    Print {
        #[arg(short, long)]
        pretty: bool,
    },
    /// Validate the configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Serve {
        bind: None,
        watch: false,
    }) {
        Commands::Print { pretty } => {
            let table = config.route_table();
            let json = if pretty {
                serde_json::to_string_pretty(&table)?
            } else {
                serde_json::to_string(&table)?
            };
            println!("{}", json);
        }
        Commands::Check => {
            println!("Configuration OK ({} routes)", config.route_table().len());
        }
        Commands::Serve { bind, watch } => {
            serve(config, cli.config.as_deref(), bind, watch).await?;
        }
    }

    Ok(())
}

async fn serve(
    mut config: AppConfig,
    path: Option<&Path>,
    bind: Option<String>,
    watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability.log_level)?;

    tracing::info!("layout-routes v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.server.bind_address,
        base_path = %config.server.base_path,
        configured_routes = config.routes.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let server = HttpServer::new(config);

    // Keep the watcher alive for the lifetime of the server.
    let _watcher = match (watch, path) {
        (true, Some(path)) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            let handle = watcher.run()?;
            server.spawn_reloader(updates);
            Some(handle)
        }
        (true, None) => {
            tracing::warn!("--watch given without --config, nothing to watch");
            None
        }
        _ => None,
    };

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
