//! Vetter - input-sanitization classification service.
//!
//! Runs the HTTP API server that classifies user-supplied strings as
//! sanitized or unsanitized.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vetter_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Vetter - input-sanitization classification service
#[derive(Parser, Debug)]
#[command(name = "vetter", version, about)]
struct Args {
    /// Host to bind the API server to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind the API server to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write daily-rotated log files to this directory in addition to stdout
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Initialize logging, optionally with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vetter={},warn", log_level)));

    if let Some(ref log_dir) = args.log_dir {
        if std::fs::create_dir_all(log_dir).is_ok() {
            // Rolling file appender (rotates daily, keeps a bounded set of files)
            let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
                .rotation(tracing_appender::rolling::Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("vetter")
                .filename_suffix("log")
                .build(log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(std::io::stdout))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }

        // Fall through to console-only if the directory is unusable
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
        tracing::warn!("File logging unavailable, using console only");
        return None;
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (keep guard alive for the duration of the program)
    let _log_guard = init_logging(&args);

    tracing::info!("Starting Vetter...");

    let config = ServerConfig::default()
        .with_host(&args.host)
        .with_port(args.port);

    let server = Server::new(config).map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
    server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Vetter shutting down");
    Ok(())
}
