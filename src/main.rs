//! scoops binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use scoops::args::{self, ArgsOutcome};
use scoops::{app, theme};

struct ScoopsTimer;

impl tracing_subscriber::fmt::time::FormatTime for ScoopsTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the filter: `RUST_LOG` when set, otherwise `level`.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// Initialize tracing writing to ~/.config/scoops/logs/scoops.log, or stderr if that fails.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("scoops.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ScoopsTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ScoopsTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    if let Some(dir) = args.config_dir.clone() {
        let _ = theme::set_config_dir_override(dir);
    }
    init_logging(&args::determine_log_level(&args));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "scoops starting");

    let settings = theme::settings();
    let code = match args::process_args(&args, &settings) {
        ArgsOutcome::Exit(code) => code,
        ArgsOutcome::RunTui { catalog, view } => match app::run(catalog, view, settings).await {
            Ok(()) => 0,
            Err(err) => {
                tracing::error!(error = ?err, "Application error");
                eprintln!("scoops: {err}");
                1
            }
        },
    };
    tracing::info!(code, "scoops exited");
    if code != 0 {
        std::process::exit(code);
    }
}
