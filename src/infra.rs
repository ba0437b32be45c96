//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the reporters: text
//! helpers, stack and source-excerpt extraction, terminal and clock
//! capabilities, output streams, logging and i18n support.
//!
//! 此模块为报告器提供基础设施服务：文本工具、堆栈与源码摘录提取、
//! 终端与时钟能力、输出流、日志以及国际化支持。

pub mod excerpt;
pub mod logging;
pub mod stack;
pub mod streams;
pub mod terminal;
pub mod text;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
