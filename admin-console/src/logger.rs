//! Logging setup
//!
//! Console output by default; when `log_dir` exists, output goes to a daily
//! rolling file instead.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with an optional level and log directory
///
/// `log_level` accepts anything `EnvFilter` does (`debug`,
/// `admin_console=debug,venue_client=info`, ...). An unparsable value falls
/// back to `info`.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_new(log_level.unwrap_or("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "venue-console");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
