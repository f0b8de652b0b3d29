use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn file_logging_enabled() -> bool {
    std::env::var("PHONICS_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

/// Install the tracing subscriber. Returns the file writer guard when
/// file logging is enabled; keep it alive for the process lifetime.
pub fn init_tracing(log_level: &str) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    if file_logging_enabled() {
        let log_dir = std::env::var("PHONICS_LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
        match std::fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let file_appender =
                    RollingFileAppender::new(Rotation::DAILY, &log_dir, "player.log");
                let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
                let file_layer = fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_target(true);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(stderr_layer)
                    .with(file_layer)
                    .init();

                return Some(guard);
            }
            Err(err) => {
                eprintln!("failed to create log directory {log_dir}: {err}");
            }
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    None
}
