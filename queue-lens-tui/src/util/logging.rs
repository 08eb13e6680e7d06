//! 日志初始化
//!
//! TUI 占用了终端，日志写入用户状态目录下的文件。库 crate 统一走 `log`
//! 门面，这里装一个 tracing 订阅器（默认启用 log 桥接）统一收集。

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// 初始化文件日志，返回的 guard 必须持有到进程结束
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("queue-lens");
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, "queue-lens.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
