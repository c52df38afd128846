//! 文件日志
//!
//! 终端被 TUI 占用，日志只写入 <data_local_dir>/todo-list/logs/

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::ChronoLocal, prelude::*};

/// 初始化日志，返回的 guard 必须在整个会话期间持有
pub fn init_logging(data_dir: &Path, filter: &str) -> WorkerGuard {
    let logs_dir = data_dir.join("logs");
    fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "todo-list.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_timer(ChronoLocal::rfc_3339()),
        )
        .init();

    guard
}
