//! Toxiguard - web front end that classifies text with a local language model.
//!
//! Serves the detector page and the `/detect` API, forwarding text to an
//! Ollama-compatible inference service.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use directories::ProjectDirs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toxiguard_core::inference::{DEFAULT_MODEL, DEFAULT_SERVICE_ADDRESS, DEFAULT_TIMEOUT_SECS};
use toxiguard_core::InferenceConfig;
use toxiguard_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Toxiguard - detect toxic text with a locally hosted language model
#[derive(Parser, Debug)]
#[command(name = "toxiguard", version, about)]
struct Args {
    /// IP address to bind to
    #[arg(long, env = "TOXIGUARD_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, env = "TOXIGUARD_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Model identifier passed to the inference service
    #[arg(long, env = "TOXIGUARD_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the inference service
    #[arg(long, env = "TOXIGUARD_SERVICE_ADDRESS", default_value = DEFAULT_SERVICE_ADDRESS)]
    service_address: String,

    /// Seconds to wait for the inference service before failing a request
    #[arg(long, env = "TOXIGUARD_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Enable debug logging (logs raw model output)
    #[arg(long, env = "TOXIGUARD_DEBUG", value_parser = clap::builder::FalseyValueParser::new())]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write logs to daily rotating files
    #[arg(long)]
    log_to_file: bool,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long, env = "TOXIGUARD_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        let inference = InferenceConfig::default()
            .with_service_address(&self.service_address)
            .with_model(&self.model)
            .with_timeout(Duration::from_secs(self.timeout_secs));

        ServerConfig::default()
            .with_host(&self.host)
            .with_port(self.port)
            .with_inference(inference)
    }

    fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

/// Get the default logs directory path.
fn default_logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "toxiguard", "Toxiguard").map(|dirs| dirs.data_dir().join("logs"))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "toxiguard={level},toxiguard_core={level},toxiguard_server={level},tower_http={level},warn"
        ))
    })
}

/// Initialize logging, optionally with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let level = args.effective_log_level();

    if args.log_to_file {
        if let Some(log_dir) = args.log_dir.clone().or_else(default_logs_dir) {
            if std::fs::create_dir_all(&log_dir).is_ok() {
                let file_appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .max_log_files(5)
                    .filename_prefix("toxiguard")
                    .filename_suffix("log")
                    .build(&log_dir)
                    .ok();

                if let Some(appender) = file_appender {
                    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                    tracing_subscriber::registry()
                        .with(env_filter(level))
                        .with(fmt::layer().with_writer(std::io::stdout))
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();

                    tracing::info!("Logging to {:?}", log_dir);
                    return Some(guard);
                }
            }
        }

        tracing_subscriber::fmt().with_env_filter(env_filter(level)).init();
        tracing::warn!("File logging unavailable, using console only");
        return None;
    }

    tracing_subscriber::fmt().with_env_filter(env_filter(level)).init();
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(&args);

    if args.debug {
        tracing::warn!("Debug mode enabled; raw model output will be logged");
    }

    let config = args.server_config();
    tracing::info!(
        model = %config.inference.model,
        service_address = %config.inference.service_address,
        timeout_secs = config.inference.timeout.as_secs(),
        "Inference service configured"
    );

    let server = Server::new(config).context("failed to create server")?;
    server.run().await.context("server failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that read or write TOXIGUARD_DEBUG.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let args = Args::try_parse_from(["toxiguard"]).unwrap();
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 5000);
        assert_eq!(args.model, "llama3.2");
        assert_eq!(args.service_address, "http://localhost:11434");
        assert_eq!(args.timeout_secs, 60);
        assert!(!args.debug);
        assert_eq!(args.effective_log_level(), "info");
    }

    #[test]
    fn overrides_flow_into_server_config() {
        let args = Args::try_parse_from([
            "toxiguard",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--model",
            "mistral",
            "--service-address",
            "http://gpu-box:11434",
            "--timeout-secs",
            "15",
        ])
        .unwrap();

        let config = args.server_config();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.inference.model, "mistral");
        assert_eq!(config.inference.service_address, "http://gpu-box:11434");
        assert_eq!(config.inference.timeout, Duration::from_secs(15));
    }

    #[test]
    fn debug_raises_log_level() {
        let args = Args::try_parse_from(["toxiguard", "--debug", "--log-level", "warn"]).unwrap();
        assert_eq!(args.effective_log_level(), "debug");
    }

    #[test]
    fn debug_env_accepts_common_values() {
        let _guard = ENV_LOCK.lock().unwrap();

        let cases = [
            ("1", true),
            ("true", true),
            ("yes", true),
            ("0", false),
            ("false", false),
            ("", false),
        ];

        for (value, expected) in cases {
            std::env::set_var("TOXIGUARD_DEBUG", value);
            let args = Args::try_parse_from(["toxiguard"]);
            std::env::remove_var("TOXIGUARD_DEBUG");

            let args = args.unwrap_or_else(|e| panic!("TOXIGUARD_DEBUG={value:?} rejected: {e}"));
            assert_eq!(args.debug, expected, "TOXIGUARD_DEBUG={value:?}");
        }
    }

    #[test]
    fn zero_timeout_rejected() {
        assert!(Args::try_parse_from(["toxiguard", "--timeout-secs", "0"]).is_err());
    }
}
