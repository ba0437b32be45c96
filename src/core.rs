//! # Core Module / 核心模块
//!
//! This module contains the core of xavier: the event data models, the
//! reporter configuration and the replay of event streams.
//!
//! 此模块包含 xavier 的核心：事件数据模型、报告器配置以及事件流回放。

pub mod config;
pub mod events;
pub mod models;
pub mod replay;

// Re-exports
pub use config::ReporterConfig;
pub use models::{RunStatus, TestResult, UnhandledError};
pub use replay::replay;
