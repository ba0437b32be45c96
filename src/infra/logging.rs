//! # Logging Module / 日志模块
//!
//! Diagnostic logging for the binary. Reports go to the process streams
//! directly; this subscriber only carries `tracing` events, filtered by the
//! `XAVIER_LOG` environment variable and written to standard error.
//!
//! 二进制程序的诊断日志。报告直接写入进程流；此订阅器只承载 `tracing` 事件，
//! 由 `XAVIER_LOG` 环境变量过滤并写入标准错误。

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
/// 保存日志过滤指令的环境变量。
pub const LOG_ENV: &str = "XAVIER_LOG";

/// Installs the global subscriber. Calling it twice is harmless.
/// 安装全局订阅器。重复调用无害。
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
