//! # Stack Trace Module / 堆栈跟踪模块
//!
//! Helpers that clean up the raw stack traces carried by error payloads.
//!
//! 清理错误负载中原始堆栈跟踪的工具函数。

/// Frame fragments that point into the runner or the host runtime rather
/// than into user code.
/// 指向运行器或宿主运行时而非用户代码的帧片段。
const INTERNAL_FRAMES: &[&str] = &[
    "node_modules/ava/",
    "node_modules\\ava\\",
    "(internal/",
    "(node:",
    "(native)",
    "(<anonymous>)",
];

/// Keeps only the user-facing `at ...` frames of a raw stack, trimmed, one
/// per line. The leading message line and internal frames are dropped.
///
/// 仅保留原始堆栈中面向用户的 `at ...` 帧（已修剪，每行一个）。
/// 开头的消息行和内部帧会被丢弃。
pub fn extract_stack(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| is_frame(line))
        .filter(|line| !INTERNAL_FRAMES.iter().any(|internal| line.contains(internal)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_frame(line: &str) -> bool {
    line.strip_prefix("at ")
        .is_some_and(|rest| rest.contains(':') || rest.ends_with(')'))
}

/// Returns line `index` of `stack` with leading whitespace removed, or an
/// empty string when the stack is shorter.
/// Index 1 is the innermost frame of a conventional `Error: message` stack.
///
/// 返回 `stack` 的第 `index` 行（去除前导空白），如果堆栈更短则返回空字符串。
/// 对于常规的 `Error: message` 堆栈，索引 1 是最内层的帧。
pub fn source_from_stack(stack: Option<&str>, index: usize) -> String {
    stack
        .and_then(|s| s.lines().nth(index))
        .map(|line| line.trim_start().to_string())
        .unwrap_or_default()
}
