//! Nudge AI web service entry point.

use std::net::SocketAddr;

use askama::Template;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nudge_web::config::Config;
use nudge_web::error::AppError;
use nudge_web::web::{create_router, endpoints, AppState, IndexTemplate, ServiceInfo};
use nudge_web::{metrics, utils};

/// Nudge AI web service.
#[derive(Parser, Debug)]
#[command(name = "nudge-web")]
#[command(about = "Web frontend and status API for Nudge AI")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("nudge_web=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("NUDGE WEB - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Check static directory
    print!("Checking static directory... ");
    match std::fs::metadata(&config.static_dir) {
        Ok(meta) if meta.is_dir() => println!("OK"),
        Ok(_) => {
            println!("FAILED");
            println!("  Error: `{}` is not a directory", config.static_dir);
            return Err(AppError::InvalidConfig(format!(
                "STATIC_DIR `{}` is not a directory",
                config.static_dir
            ))
            .into());
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(AppError::Io(e).into());
        }
    }

    // Render the landing page once to catch template errors before serving
    print!("Rendering index template... ");
    let info = ServiceInfo::from_config(&config);
    match IndexTemplate::new(&info).render() {
        Ok(html) => println!("OK ({} bytes)", html.len()),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(AppError::Template(e).into());
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Title: {}", config.app_title);
    println!("  Description: {}", config.app_description);
    println!("  Version: {}", info.version);
    println!("  Static Directory: {}", config.static_dir);
    println!("  Port: {}", config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the web server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Title: {}", config.app_title);
    info!("Static directory: {}", config.static_dir);

    // Initialize metrics
    let metrics_handle = metrics::init_metrics()?;

    // Create app state
    let app_state = AppState::from_config(&config).with_metrics(metrics_handle);

    // Build the router before accepting connections: static mount and
    // endpoint registration both happen here
    let router = create_router(app_state.clone(), endpoints::router());

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    app_state.set_ready(true);

    axum::serve(listener, router)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
