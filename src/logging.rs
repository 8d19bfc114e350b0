use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target used by the request logging middleware
pub const HTTP_TARGET: &str = "http";

/// Install the global subscriber: a rolling log file, plus coloured stdout
/// in text mode. The returned guard flushes the file writer on drop.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (file_writer, guard) = tracing_appender::non_blocking(rolling_appender(config));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));
    let registry = tracing_subscriber::registry().with(filter);

    // JSON keeps the target so `http` request lines can be filtered downstream
    if config.use_json {
        registry
            .with(fmt::layer().json().with_writer(file_writer).with_ansi(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(file_writer)
                    .with_ansi(false),
            )
            .with(fmt::layer().with_target(false))
            .init();
    }

    guard
}

fn rolling_appender(config: &AppConfig) -> RollingFileAppender {
    let rotation = match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    };
    RollingFileAppender::new(rotation, &config.log_dir, &config.log_file)
}

fn filter_directives(config: &AppConfig) -> String {
    if config.log_requests {
        config.log_level.clone()
    } else {
        format!("{},{}=off", config.log_level, HTTP_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_logging_can_be_silenced() {
        let mut config = AppConfig::default();
        assert_eq!(filter_directives(&config), "info");
        config.log_requests = false;
        assert_eq!(filter_directives(&config), "info,http=off");
    }
}
