//! # Xavier Library / Xavier 库
//!
//! This library renders the results of a test run for a host test runner:
//! a colourful console transcript for humans and a JUnit-style XML document
//! for CI systems.
//!
//! 此库为宿主测试运行器渲染测试运行结果：
//! 面向人类的彩色控制台记录，以及面向 CI 系统的 JUnit 风格 XML 文档。
//!
//! ## Modules / 模块
//!
//! - `core` - Event data models, configuration and event-stream replay
//! - `infra` - Text, stack, excerpt, terminal and stream helpers, logging
//! - `reporting` - The console and XML reporters
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 事件数据模型、配置以及事件流回放
//! - `infra` - 文本、堆栈、摘录、终端和流工具，日志
//! - `reporting` - 控制台和 XML 报告器
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::events;
pub use core::models;
pub use reporting::{ConsoleReporter, Reporter, XmlReporter};

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
