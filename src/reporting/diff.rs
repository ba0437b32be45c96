//! # Assertion Diff Module / 断言差异模块
//!
//! Formats the expected/actual operands and labelled values of a failed
//! assertion for the console failure details.
//!
//! 为控制台失败详情格式化失败断言的期望值/实际值操作数以及带标签的值。

use colored::*;
use similar::{ChangeTag, TextDiff};

use crate::core::models::{ErrorInfo, display_value};
use crate::infra::t;
use crate::infra::text::indent;

/// Renders the assertion output of `error`: a line diff between `expected`
/// and `actual` when both are present, followed by every labelled value.
/// Removed lines are expected-only (`-`), added lines actual-only (`+`).
///
/// 渲染 `error` 的断言输出：当 `expected` 和 `actual` 都存在时输出两者的逐行差异，
/// 然后输出每个带标签的值。删除行只存在于期望值中（`-`），新增行只存在于实际值中（`+`）。
pub fn format_assert_error(error: &ErrorInfo, locale: &str) -> String {
    let mut sections = Vec::new();

    if let (Some(expected), Some(actual)) = (&error.expected, &error.actual) {
        let expected = display_value(expected);
        let actual = display_value(actual);
        let mut block = format!("{}\n\n", t!("diff.difference", locale = locale));
        block.push_str(&line_diff(&expected, &actual));
        sections.push(block);
    }

    for value in &error.values {
        let rendered = indent(&display_value(&value.value), 2);
        match &value.label {
            Some(label) => sections.push(format!("{}\n\n{}", label, rendered)),
            None => sections.push(rendered),
        }
    }

    let mut output = sections.join("\n\n");
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

fn line_diff(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    diff.iter_all_changes()
        .map(|change| {
            let text = change.value().trim_end_matches('\n');
            match change.tag() {
                ChangeTag::Delete => format!("- {}", text).red().to_string(),
                ChangeTag::Insert => format!("+ {}", text).green().to_string(),
                ChangeTag::Equal => format!("  {}", text),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
