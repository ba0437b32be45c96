//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders a readable transcript of a test run: one line per
//! test, a summary block with failure details, and section separators. All
//! output, including what tests print to stdout, goes to the error stream so
//! standard output stays free for the program under test.
//!
//! 此模块渲染测试运行的可读记录：每个测试一行、包含失败详情的摘要块以及分节分隔线。
//! 所有输出（包括测试打印到 stdout 的内容）都写入错误流，
//! 使标准输出保留给被测程序使用。

use colored::*;
use std::io;

use crate::core::config::ReporterConfig;
use crate::core::models::{ANONYMOUS_TITLE, ErrorInfo, RunStatus, TestResult, UnhandledError, UnhandledKind};
use crate::infra::excerpt::code_excerpt;
use crate::infra::stack::extract_stack;
use crate::infra::streams::Streams;
use crate::infra::t;
use crate::infra::terminal::{Clock, ProcessTerminal, SystemClock, TerminalSize};
use crate::infra::text::{indent, plural, pretty_duration, was_were};
use crate::reporting::Reporter;
use crate::reporting::diff::format_assert_error;

const TICK: &str = "✔";
const CROSS: &str = "✖";
const RULE: &str = "─";

/// Renders test events as colourised console text.
///
/// 将测试事件渲染为彩色控制台文本。
///
/// # Output Format / 输出格式
/// ```text
///   ✔ math › adds
///   ✔ io › reads a large file (1s 204ms)
///   - parser › handles unicode
///   ✖ math › divides expected 2 to equal 3
///
///   1 test failed [14:02:51]
///   1 test skipped
/// ```
pub struct ConsoleReporter {
    config: ReporterConfig,
    terminal: Box<dyn TerminalSize>,
    clock: Box<dyn Clock>,
    streams: Streams,
}

impl ConsoleReporter {
    /// Creates a reporter bound to the process terminal, clock and streams.
    /// 创建绑定到进程终端、时钟和流的报告器。
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            config,
            terminal: Box::new(ProcessTerminal),
            clock: Box::new(SystemClock),
            streams: Streams::process(),
        }
    }

    pub fn with_terminal(mut self, terminal: impl TerminalSize + 'static) -> Self {
        self.terminal = Box::new(terminal);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_streams(mut self, streams: Streams) -> Self {
        self.streams = streams;
        self
    }

    fn locale(&self) -> &str {
        self.config.locale()
    }

    /// The count lines of the summary, in display order, without timestamp.
    /// 摘要中的计数行（按显示顺序，不含时间戳）。
    fn summary_lines(&self, status: &RunStatus) -> Vec<String> {
        let locale = self.locale();
        let mut lines = Vec::new();

        if status.fail_count > 0 {
            let n = status.fail_count;
            lines.push(t!("summary.failed", locale = locale, count = n, noun = plural("test", n)).red().to_string());
        } else {
            let n = status.pass_count;
            lines.push(t!("summary.passed", locale = locale, count = n, noun = plural("test", n)).green().to_string());
        }

        if status.known_failure_count > 0 {
            let n = status.known_failure_count;
            lines.push(
                t!("summary.known_failures", locale = locale, count = n, noun = plural("known failure", n))
                    .red()
                    .to_string(),
            );
        }
        if status.skip_count > 0 {
            let n = status.skip_count;
            lines.push(t!("summary.skipped", locale = locale, count = n, noun = plural("test", n)).yellow().to_string());
        }
        if status.todo_count > 0 {
            let n = status.todo_count;
            lines.push(t!("summary.todo", locale = locale, count = n, noun = plural("test", n)).blue().to_string());
        }
        if status.rejection_count > 0 {
            let n = status.rejection_count;
            lines.push(
                t!("summary.rejections", locale = locale, count = n, noun = plural("rejection", n))
                    .red()
                    .to_string(),
            );
        }
        if status.exception_count > 0 {
            let n = status.exception_count;
            lines.push(
                t!("summary.exceptions", locale = locale, count = n, noun = plural("exception", n))
                    .red()
                    .to_string(),
            );
        }
        if status.previous_fail_count > 0 {
            let n = status.previous_fail_count;
            lines.push(
                t!("summary.previous_failures", locale = locale, count = n, noun = plural("failure", n))
                    .red()
                    .to_string(),
            );
        }

        lines.into_iter().map(|line| format!("  {}", line)).collect()
    }

    /// Renders the detail block of one failed test (without the leading
    /// separator).
    /// 渲染单个失败测试的详情块（不含前导分隔）。
    fn failure_details(&self, test: &TestResult, error: &ErrorInfo) -> String {
        let mut output = format!("  {}\n", test.title.bold());

        if let Some(source) = &error.source {
            output.push_str(&format!("  {}\n", format!("{}:{}", source.file, source.line).bright_black()));

            let path = self.config.base_path.join(&source.file);
            if let Some(excerpt) = code_excerpt(&path, source.line, self.terminal.width_or_default()) {
                output.push_str(&format!("\n{}\n", indent(&excerpt, 2)));
            }
        }

        if error.show_output {
            output.push_str(&format!("\n{}", indent(&format_assert_error(error, self.locale()), 2)));
        }

        // Assertion libraries use " " as the default message.
        if !error.message.trim().is_empty() {
            output.push_str(&format!("\n{}\n", indent(&error.message, 2)));
        }

        if let Some(stack) = &error.stack {
            output.push_str(&format!("\n{}", indent(&extract_stack(stack), 2).bright_black()));
        }

        output
    }
}

impl Reporter for ConsoleReporter {
    fn start(&self) -> String {
        String::new()
    }

    fn test(&self, result: &TestResult, status: &RunStatus) -> Option<String> {
        if let Some(error) = &result.error {
            return Some(format!("  {} {} {}", CROSS.red(), result.title, error.message.red()));
        }

        if result.todo || result.skip {
            return Some(format!("  {} {}", "-".yellow(), result.title.yellow()));
        }

        if result.failing {
            return Some(format!("  {} {}", TICK.red(), result.title));
        }

        if status.is_sole_test() && result.title == ANONYMOUS_TITLE {
            return None;
        }

        let duration = match result.duration {
            Some(ms) if ms > self.config.duration_threshold_ms => {
                format!(" {}", format!("({})", pretty_duration(ms)).bright_black())
            }
            _ => String::new(),
        };

        Some(format!("  {} {}{}", TICK.green(), result.title, duration))
    }

    fn unhandled_error(&self, error: &UnhandledError) -> String {
        if error.is_internal(&self.config.internal_error_name) {
            return format!("  {} {}", CROSS.red(), error.message);
        }

        let label = match error.kind {
            UnhandledKind::Rejection => t!("unhandled.rejection", locale = self.locale()),
            UnhandledKind::Exception => t!("unhandled.exception", locale = self.locale()),
        };

        let mut output = format!("{}: {}\n", label.red().bold(), error.file.as_deref().unwrap_or_default());
        match &error.stack {
            Some(stack) => output.push_str(&format!("{}\n", indent(stack, 2))),
            None => output.push_str(&format!("  {}\n", error.dump())),
        }
        output.push('\n');
        output
    }

    fn finish(&self, status: &RunStatus) -> String {
        let locale = self.locale();
        let mut output = String::from("\n");

        let mut lines = self.summary_lines(status);
        if let Some(first) = lines.first_mut() {
            let stamp = format!("[{}]", self.clock.now().format("%H:%M:%S"));
            first.push_str(&format!(" {}", stamp.bright_black().dimmed()));
            output.push_str(&lines.join("\n"));
        }

        if status.known_failure_count > 0 {
            for test in &status.known_failures {
                output.push_str(&format!("\n\n\n  {}", test.title.red()));
            }
        }

        if status.fail_count > 0 {
            let failures = status
                .tests
                .iter()
                .filter_map(|test| test.error.as_ref().map(|error| (test, error)));
            for (index, (test, error)) in failures.enumerate() {
                let spacing = if index == 0 { "\n\n" } else { "\n\n\n\n" };
                output.push_str(spacing);
                output.push_str(&self.failure_details(test, error));
            }
        }

        if status.fail_fast_enabled && status.remaining_count > 0 && status.fail_count > 0 {
            output.push_str(&format!("\n\n\n  {}", t!("advisory.fail_fast", locale = locale).magenta()));
        }

        if status.has_exclusive && status.remaining_count > 0 {
            let n = status.remaining_count;
            let advisory = t!(
                "advisory.exclusive",
                locale = locale,
                count = n,
                noun = plural("test", n),
                verb = was_were(n)
            );
            output.push_str(&format!("\n\n\n  {}", advisory.magenta()));
        }

        output.push('\n');
        output
    }

    fn section(&self) -> Option<String> {
        let rule = RULE.repeat(self.terminal.width_or_default());
        Some(rule.bright_black().dimmed().to_string())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.streams.line_err(text)
    }

    fn stdout(&mut self, data: &[u8]) -> io::Result<()> {
        self.streams.raw_err(data)
    }

    fn stderr(&mut self, data: &[u8]) -> io::Result<()> {
        self.streams.raw_err(data)
    }
}
