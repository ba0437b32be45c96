//! # Code Excerpt Module / 代码摘录模块
//!
//! Extracts a few lines of source around the line an assertion failed on,
//! with a line-number gutter and the failing line highlighted.
//!
//! 提取断言失败所在行周围的几行源码，带有行号栏并高亮失败的行。

use colored::*;
use std::fs;
use std::path::Path;

/// Lines of context shown on each side of the failing line.
/// 失败行两侧显示的上下文行数。
const AROUND: usize = 1;

/// Renders an excerpt of `path` centred on the one-based `line`.
///
/// Each row is ` <line number>: <source>`; numbers are right-aligned, source
/// is truncated to fit `max_width` and padded to equal length so the
/// highlighted row forms a solid bar.
///
/// Returns `None` when the file cannot be read or `line` is out of range.
///
/// 渲染以从 1 开始的 `line` 为中心的 `path` 摘录。
///
/// 每行格式为 ` <行号>: <源码>`；行号右对齐，源码截断以适应 `max_width`，
/// 并填充到相同长度，使高亮行形成完整的色条。
///
/// 当文件无法读取或 `line` 超出范围时返回 `None`。
pub fn code_excerpt(path: &Path, line: usize, max_width: usize) -> Option<String> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "source excerpt unavailable");
            return None;
        }
    };
    let lines: Vec<&str> = source.lines().collect();
    if line == 0 || line > lines.len() {
        tracing::debug!(path = %path.display(), line, "excerpt line out of range");
        return None;
    }

    let first = line.saturating_sub(AROUND).max(1);
    let last = (line + AROUND).min(lines.len());
    let gutter = last.to_string().len();
    let budget = max_width.saturating_sub(line.to_string().len() + 5);

    let rows: Vec<(usize, String)> = (first..=last)
        .map(|n| (n, truncate(&lines[n - 1].replace('\t', "  "), budget)))
        .collect();
    let width = rows.iter().map(|(_, text)| text.chars().count()).max().unwrap_or(0);

    let rendered = rows
        .into_iter()
        .map(|(n, text)| {
            let padded = format!("{:<width$}", text, width = width);
            let number = format!("{:>gutter$}:", n, gutter = gutter);
            if n == line {
                format!(" {} {}", number, padded).on_red().to_string()
            } else {
                format!(" {} {}", number.bright_black(), padded)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(rendered)
}

fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(budget - 1).collect();
    cut.push('…');
    cut
}
