//! # Reporting Module / 报告模块
//!
//! This module renders test-run events in multiple formats: a colourful
//! console transcript and a JUnit-style XML document. Both implement
//! [`Reporter`], so the host runner picks one and drives it through the same
//! lifecycle: `start` once, `test` per completed test, `unhandled_error` at
//! any point, `finish` once.
//!
//! 此模块以多种格式渲染测试运行事件：彩色的控制台记录和 JUnit 风格的 XML 文档。
//! 两者都实现了 [`Reporter`]，因此宿主运行器选择其中一个并按相同的生命周期驱动：
//! `start` 一次，每个完成的测试调用 `test`，任意时刻调用 `unhandled_error`，
//! 最后调用 `finish` 一次。

pub mod console;
pub mod diff;
pub mod xml;

use std::io;

use crate::core::config::{ReporterConfig, ReporterKind};
use crate::core::models::{RunStatus, TestResult, UnhandledError};

// Re-export common reporting types
pub use console::ConsoleReporter;
pub use xml::XmlReporter;

/// A renderer for one output format.
///
/// The rendering operations are pure: they build a fragment from their inputs
/// and the reporter's configuration and never fail. The caller decides where
/// fragments go, usually through [`Reporter::write`].
///
/// 单一输出格式的渲染器。
///
/// 渲染操作是纯函数：它们根据输入和报告器配置构建片段，且永不失败。
/// 由调用者决定片段的去向，通常通过 [`Reporter::write`]。
pub trait Reporter {
    /// The opening fragment of the report / 报告的开头片段
    fn start(&self) -> String;

    /// The fragment for one completed test, or `None` when the test should
    /// not produce output.
    /// 单个已完成测试的片段；当测试不应产生输出时为 `None`。
    fn test(&self, result: &TestResult, status: &RunStatus) -> Option<String>;

    /// The fragment for a process-level rejection or exception.
    /// 进程级拒绝或异常的片段。
    fn unhandled_error(&self, error: &UnhandledError) -> String;

    /// The closing fragment of the report / 报告的结尾片段
    fn finish(&self, status: &RunStatus) -> String;

    /// A visual separator between runs, if the format has one.
    /// 运行之间的视觉分隔符（如果该格式有的话）。
    fn section(&self) -> Option<String> {
        None
    }

    /// Emits a rendered fragment to the reporter's primary stream.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Forwards output a test wrote to its standard output.
    fn stdout(&mut self, data: &[u8]) -> io::Result<()>;

    /// Forwards output a test wrote to its standard error.
    fn stderr(&mut self, data: &[u8]) -> io::Result<()>;
}

/// Builds the reporter selected by `config.reporter`, writing to the process
/// streams.
///
/// 根据 `config.reporter` 构建所选的报告器，写入进程流。
pub fn build_reporter(config: ReporterConfig) -> Box<dyn Reporter> {
    match config.reporter {
        ReporterKind::Console => Box::new(ConsoleReporter::new(config)),
        ReporterKind::Xml => Box::new(XmlReporter::new(config)),
    }
}
