//! # Data Models Module / 数据模型模块
//!
//! This module defines the event payloads a host test runner hands to the
//! reporters: per-test results, assertion error details, the aggregate run
//! status and process-level unhandled errors.
//!
//! 此模块定义了宿主测试运行器传递给报告器的事件负载：
//! 单个测试结果、断言错误详情、整体运行状态以及进程级未处理错误。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The sentinel title a runner gives to a test declared without a name.
/// 运行器为未命名测试提供的哨兵标题。
pub const ANONYMOUS_TITLE: &str = "[anonymous]";

/// The outcome record for one executed test case.
/// Produced by the runner once per completed test and consumed once by a reporter.
///
/// 单个已执行测试用例的结果记录。
/// 由运行器在每个测试完成时生成一次，并由报告器消费一次。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestResult {
    /// The display title of the test / 测试的显示标题
    pub title: String,
    /// Structured title segments (suite, group, ..., case name). When present
    /// it takes precedence over splitting `title` on spaces.
    /// 结构化的标题片段（套件、分组、……、用例名）。
    /// 如果存在，则优先于按空格拆分 `title`。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_path: Option<Vec<String>>,
    /// The assertion error, if the test failed / 测试失败时的断言错误
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    pub todo: bool,
    pub skip: bool,
    /// `true` for a test that is expected to fail and did.
    /// 对于预期失败且确实失败的测试为 `true`。
    pub failing: bool,
    /// Wall-clock duration in milliseconds / 以毫秒为单位的耗时
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// The test file the result came from / 结果所属的测试文件
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl TestResult {
    /// Creates a passing result with the given title.
    pub fn passed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Creates a failed result carrying `error`.
    pub fn failed(title: impl Into<String>, error: ErrorInfo) -> Self {
        Self {
            title: title.into(),
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Duration in milliseconds, treating an absent or zero duration as unknown.
    /// 以毫秒为单位的耗时，缺失或为零时视为未知。
    pub fn known_duration(&self) -> Option<f64> {
        self.duration.filter(|d| *d > 0.0)
    }
}

/// A source location reported by the assertion library.
/// 断言库报告的源码位置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceLocation {
    /// Path relative to the configured base path / 相对于配置的基础路径的路径
    pub file: String,
    /// One-based line number / 从 1 开始的行号
    pub line: usize,
}

/// A labelled value an assertion attached to its error (e.g. the evaluated
/// operand of a failed `truthy` check).
///
/// 断言附加到错误上的带标签值（例如失败的 `truthy` 检查中被求值的操作数）。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssertionValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(alias = "formatted")]
    pub value: Value,
}

/// Error details for a failed test. The shape varies by assertion library,
/// so every field is optional.
///
/// 失败测试的错误详情。其结构因断言库而异，因此每个字段都是可选的。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorInfo {
    /// The error message. Some assertion libraries use a single space as a
    /// placeholder.
    /// 错误消息。某些断言库使用单个空格作为占位符。
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<AssertionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion: Option<String>,
    /// Whether the assertion diff should be rendered / 是否渲染断言差异
    pub show_output: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLocation>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// Renders an arbitrary assertion operand for display: strings verbatim,
/// everything else as pretty-printed JSON.
///
/// 渲染任意断言操作数以供显示：字符串原样输出，其他值输出为格式化的 JSON。
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Aggregate counts, flags and collections describing an entire run.
/// Built by the runner and read-only to reporters; the counts are rendered,
/// never validated.
///
/// 描述整个运行的汇总计数、标志和集合。
/// 由运行器构建，对报告器只读；计数只会被渲染，不会被校验。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunStatus {
    pub pass_count: usize,
    pub fail_count: usize,
    pub skip_count: usize,
    pub todo_count: usize,
    pub known_failure_count: usize,
    pub rejection_count: usize,
    pub exception_count: usize,
    /// Failures recorded in earlier runs of files that were not rerun.
    /// 在未重新运行的文件中先前记录的失败。
    pub previous_fail_count: usize,
    /// Tests that never ran (fail-fast or exclusive modifier).
    /// 从未运行的测试（由于 fail-fast 或独占修饰符）。
    pub remaining_count: usize,
    pub file_count: usize,
    pub test_count: usize,
    pub fail_fast_enabled: bool,
    pub has_exclusive: bool,
    pub tests: Vec<TestResult>,
    pub known_failures: Vec<TestResult>,
}

impl RunStatus {
    /// Whether the run should be reported as unsuccessful.
    /// 该运行是否应被报告为不成功。
    pub fn has_failures(&self) -> bool {
        self.fail_count > 0 || self.rejection_count > 0 || self.exception_count > 0
    }

    /// Whether the run consists of exactly one test in one file.
    pub fn is_sole_test(&self) -> bool {
        self.file_count == 1 && self.test_count == 1
    }
}

/// The origin of a process-level failure / 进程级失败的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnhandledKind {
    Rejection,
    Exception,
}

/// A process-level rejection or exception not attributable to a specific test.
/// 不归属于特定测试的进程级拒绝或异常。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnhandledError {
    #[serde(rename = "type")]
    pub kind: UnhandledKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl UnhandledError {
    /// Errors raised by the runner itself carry no useful stack; reporters
    /// render them as a single line.
    ///
    /// 运行器自身引发的错误没有有用的堆栈；报告器将其渲染为单行。
    pub fn is_internal(&self, internal_error_name: &str) -> bool {
        self.kind == UnhandledKind::Exception && self.name == internal_error_name
    }

    /// A compact JSON rendering used when no stack trace is available.
    /// 当没有堆栈跟踪时使用的紧凑 JSON 表示。
    pub fn dump(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

impl fmt::Display for UnhandledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for UnhandledError {}
