mod analyze_cmd;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use geoforge_config::{redact, validate_and_log, AppConfig};
use geoforge_gateway::{start_server, GatewayState};

#[derive(Parser)]
#[command(name = "geoforge")]
#[command(about = "geoforge — turn photos of geometry problems into GeoGebra commands")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the analysis pipeline on a local image and print the JSON result
    Analyze {
        /// Path to the image file
        path: PathBuf,
        /// Override the MIME type detected from the file
        #[arg(long)]
        mime: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    logging::init_logger(&config.logging.dir, &config.logging.level);
    let report = validate_and_log(&config);
    if !report.is_valid() {
        bail!("invalid configuration ({} errors)", report.errors.len());
    }

    match cli.command {
        Commands::Serve { port } => {
            let config = AppConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Analyze { path, mime } => {
            analyze_cmd::run(&config, &path, mime.as_deref()).await?;
        }
    }

    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    info!(
        config = %redact(&config),
        demo_mode = config.demo_mode(),
        "Starting geoforge gateway"
    );

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.bind_address, config.port))?;
    let state = GatewayState::from_config(&config)?;

    start_server(addr, state).await
}
