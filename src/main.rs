//! canvas-router
//!
//! Serves the canvas route table over HTTP, or inspects it from the shell.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::RouteTable ──▶ dispatch::ActionRegistry
//!                      (axum + tower-http)   (first match)          (canvas#new, canvas#release)
//!
//!     Cross-cutting: config (TOML) · observability (tracing, metrics) · lifecycle (startup, shutdown)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use canvas_router::config::load_or_default;
use canvas_router::lifecycle::startup::{resolve_command, route_listing};
use canvas_router::observability::logging;
use canvas_router::{Application, Shutdown};

#[derive(Parser)]
#[command(name = "canvas-router")]
#[command(version, about = "Static route table for the canvas endpoints", long_about = None)]
struct Cli {
    /// TOML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print the route table
    Routes,
    /// Resolve METHOD PATH to its handler
    Resolve { method: String, path: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
            }
            logging::init(&config.observability.log_level);
            tracing::info!("canvas-router v{} starting", env!("CARGO_PKG_VERSION"));

            let app = Application::from_config(config)?;
            let shutdown = Shutdown::new();
            app.serve(shutdown.subscribe()).await?;

            tracing::info!("Shutdown complete");
        }
        Commands::Routes => {
            print!("{}", route_listing(&config)?);
        }
        Commands::Resolve { method, path } => match resolve_command(&config, &method, &path) {
            Ok(handler) => println!("{}", handler),
            Err(e) => {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
