use std::io::Read;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use scanpost_config::{validate, ScanpostConfig};
use scanpost_core::ScanError;
use scanpost_gateway::{build_router, start_server, GatewayState};
use scanpost_logging::init_logger;
use scanpost_scan::OcrEngine;

#[derive(Parser)]
#[command(name = "scanpost")]
#[command(about = "Scanpost — postal address OCR scanner backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Parse address text from an argument or stdin and print the fields
    Parse {
        /// Address text; reads stdin when omitted
        text: Option<String>,
    },
    /// Run OCR on an image file using the configured engine
    Ocr {
        /// Path to the image file
        file: String,
    },
    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ScanpostConfig::from_env();
    init_logger(&config.logging.dir, &config.logging.level);

    let report = validate(&config);
    for warning in &report.warnings {
        warn!(path = %warning.path, message = %warning.message, "config warning");
    }
    if !report.is_valid() {
        for error in &report.errors {
            tracing::error!(path = %error.path, message = %error.message, "config error");
        }
        return Err(ScanError::ConfigError(format!(
            "{} invalid config value(s)",
            report.errors.len()
        ))
        .into());
    }

    match cli.command {
        Command::Serve { port, bind } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            serve(config).await
        }
        Command::Parse { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read address text from stdin")?;
                    buf
                }
            };
            let language = scanpost_scan::detect_language(&text);
            let parsed = scanpost_scan::parse_address(&text);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "language": language,
                    "parsed": parsed,
                }))?
            );
            Ok(())
        }
        Command::Ocr { file } => {
            let state = GatewayState::from_config(&config);
            let image = tokio::fs::read(&file)
                .await
                .with_context(|| format!("failed to read {file}"))?;
            let text = state.ocr.extract_text(&image).await?;
            println!("{text}");
            Ok(())
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

async fn serve(config: ScanpostConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .context("invalid bind address")?;

    let origin: HeaderValue = config
        .cors
        .allowed_origin
        .parse()
        .context("invalid CORS origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = GatewayState::from_config(&config);
    let app = build_router(state, config.upload.max_bytes).layer(cors);

    info!(
        engine = ?config.ocr.engine,
        port = config.server.port,
        "starting scanpost gateway"
    );
    start_server(addr, app).await
}
