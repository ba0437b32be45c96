//! # XML Reporting Module / XML 报告模块
//!
//! This module renders a JUnit-style XML document incrementally: each
//! lifecycle call returns one fragment, and the caller streams the fragments
//! in order. Every user-supplied value is ANSI-stripped and XML-escaped, so
//! the concatenated output is always well-formed.
//!
//! 此模块以增量方式渲染 JUnit 风格的 XML 文档：每个生命周期调用返回一个片段，
//! 由调用者按顺序输出这些片段。所有用户提供的值都会去除 ANSI 序列并进行 XML 转义，
//! 因此拼接后的输出始终是格式良好的。

use std::io;

use crate::core::config::{ReporterConfig, TitleGroups};
use crate::core::models::{ErrorInfo, RunStatus, TestResult, UnhandledError, display_value};
use crate::infra::stack::source_from_stack;
use crate::infra::streams::Streams;
use crate::infra::text::{sanitize_xml, seconds, strip_ansi};
use crate::reporting::Reporter;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The suite, classname and case name a test is filed under.
/// 测试所归属的套件、类名和用例名。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseNames {
    pub suite: String,
    pub classname: String,
    pub name: String,
}

impl CaseNames {
    /// Resolves names from the structured title path when the runner sent
    /// one, otherwise by splitting the flat title on spaces.
    ///
    /// 当运行器发送了结构化标题路径时从中解析名称，否则按空格拆分扁平标题。
    pub fn resolve(result: &TestResult, groups: TitleGroups) -> Self {
        match result.title_path.as_deref() {
            Some(path) if !path.is_empty() => Self::from_path(path),
            _ => Self::from_flat_title(&result.title, groups),
        }
    }

    pub fn from_path(path: &[String]) -> Self {
        let suite = path.first().cloned().unwrap_or_default();
        let classname = if path.len() > 2 { path[1].clone() } else { suite.clone() };
        let name = path.last().cloned().unwrap_or_default();
        Self { suite, classname, name }
    }

    /// Splits a `"<group> <separator> <subgroup> ... <leaf>"` title.
    /// Titles of another shape yield blank or odd names.
    ///
    /// 拆分 `"<分组> <分隔符> <子分组> ... <叶子>"` 形式的标题。
    /// 其他形状的标题会得到空白或奇怪的名称。
    pub fn from_flat_title(title: &str, groups: TitleGroups) -> Self {
        let plain = strip_ansi(title);
        let tokens: Vec<&str> = plain.split(' ').collect();
        let suite = tokens.first().copied().unwrap_or_default().to_string();
        let classname = match groups {
            TitleGroups::Three => tokens.get(2).copied().unwrap_or_default().to_string(),
            TitleGroups::Two => suite.clone(),
        };
        let name = tokens.last().copied().unwrap_or_default().to_string();
        Self { suite, classname, name }
    }
}

/// Renders test events as JUnit-style XML on standard output.
/// 将测试事件渲染为输出到标准输出的 JUnit 风格 XML。
pub struct XmlReporter {
    config: ReporterConfig,
    streams: Streams,
}

impl XmlReporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            config,
            streams: Streams::process(),
        }
    }

    pub fn with_streams(mut self, streams: Streams) -> Self {
        self.streams = streams;
        self
    }

    fn failure(&self, result: &TestResult, error: &ErrorInfo, time: &str) -> Vec<String> {
        let mut lines = vec!["    <failure>".to_string(), "      ---".to_string()];
        let mut field = |key: &str, value: &str| {
            lines.push(format!("        {}: {}", key, sanitize_xml(value)));
        };

        if !error.message.trim().is_empty() {
            field("message", &error.message);
        }
        if let Some(operator) = &error.operator {
            field("operator", operator);
        }
        if let Some(expected) = &error.expected {
            field("expected", &display_value(expected));
        }
        if let Some(actual) = &error.actual {
            field("actual", &display_value(actual));
        }
        if let Some(assertion) = &error.assertion {
            field("assertion", assertion);
        }
        if !time.is_empty() {
            field("duration_ms", &result.duration.unwrap_or_default().to_string());
        }
        let at = source_from_stack(error.stack.as_deref(), 1);
        if !at.is_empty() {
            field("at", &at);
        }
        if let Some(file) = &result.file {
            field("file", file);
        }
        if self.config.verbose {
            let dump = serde_json::to_string(error).unwrap_or_default();
            field("dump", &dump);
        }

        lines.push("      ...".to_string());
        lines.push("    </failure>".to_string());
        lines
    }
}

impl Reporter for XmlReporter {
    fn start(&self) -> String {
        format!("{}\n<testsuites name=\"tests\">", XML_DECLARATION)
    }

    fn test(&self, result: &TestResult, _status: &RunStatus) -> Option<String> {
        let names = CaseNames::resolve(result, self.config.title_groups);
        let time = seconds(result.duration);
        let failed = if result.is_failure() { "1" } else { "0" };
        let skipped = if result.skip { r#" skipped="1""# } else { "" };
        let todo = if result.todo { r#" todo="1""# } else { "" };

        let mut output = vec![
            format!(
                r#"<testsuite tests="1" failures="{}"{}{} errors="0" name="{}" time="{}">"#,
                failed,
                skipped,
                todo,
                sanitize_xml(&names.suite),
                time
            ),
            format!(
                r#"  <testcase classname="{}" name="{}" time="{}">"#,
                sanitize_xml(&names.classname),
                sanitize_xml(&names.name),
                time
            ),
        ];

        if result.todo {
            output.push(r#"    <skipped message="todo"/>"#.to_string());
        } else if result.skip {
            output.push("    <skipped/>".to_string());
        }

        if let Some(error) = &result.error {
            output.extend(self.failure(result, error, &time));
        }

        output.push("  </testcase>".to_string());
        output.push("</testsuite>".to_string());
        Some(output.join("\n"))
    }

    fn unhandled_error(&self, error: &UnhandledError) -> String {
        let mut output = vec![
            r#"<testsuite tests="1" failures="1" errors="1">"#.to_string(),
            "  <error>".to_string(),
            format!("    {}", sanitize_xml(&error.message)),
        ];

        // Runner-internal errors carry no stack worth reporting.
        if !error.is_internal(&self.config.internal_error_name) {
            output.push("  ---".to_string());
            output.push(format!("    name: {}", sanitize_xml(&error.name)));
            output.push(format!(
                "    at: {}",
                sanitize_xml(&source_from_stack(error.stack.as_deref(), 1))
            ));
            if let Some(file) = &error.file {
                output.push(format!("    file: {}", sanitize_xml(file)));
            }
            if self.config.verbose {
                output.push(format!("    dump: {}", sanitize_xml(&error.dump())));
            }
            output.push("  ...".to_string());
        }

        output.push("  </error>".to_string());
        output.push("</testsuite>".to_string());
        output.join("\n")
    }

    fn finish(&self, _status: &RunStatus) -> String {
        "</testsuites>".to_string()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.streams.line_out(text)
    }

    fn stdout(&mut self, data: &[u8]) -> io::Result<()> {
        self.streams.raw_err(data)
    }

    fn stderr(&mut self, data: &[u8]) -> io::Result<()> {
        self.streams.raw_err(data)
    }
}
