use banksim_core::config::types::ResolvedConfig;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);

    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    // Output goes to stdout, diagnostics stay on stderr.
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.logging.file else {
        registry.init();
        return;
    };

    let file_level_str = cfg.logging.file_level.as_deref().unwrap_or(&cfg.logging.level);
    let file_level = parse_level(file_level_str).unwrap_or(LevelFilter::DEBUG);
    let file_filter =
        EnvFilter::builder().with_default_directive(file_level.into()).from_env_lossy();

    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Keep the worker alive for the life of the process.
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter);

    registry.with(file_layer).init();
}

/// Flush the file writer. Needed before `std::process::exit`, which skips drops.
pub fn flush() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
