//! # Text Utilities Module / 文本工具模块
//!
//! Small string helpers shared by the reporters: ANSI stripping, XML escaping,
//! indentation, pluralisation and human-readable durations.
//!
//! 报告器共享的小型字符串工具：去除 ANSI 序列、XML 转义、缩进、复数形式和可读的耗时。

use std::time::Duration;

/// Removes ANSI escape sequences from `text`.
/// 从 `text` 中移除 ANSI 转义序列。
pub fn strip_ansi(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

/// Escapes `text` for use in XML character data or attribute values.
///
/// Characters outside the XML 1.0 `Char` production (C0 controls other than
/// tab, newline and carriage return, and the noncharacters U+FFFE and U+FFFF)
/// are dropped, since no escape makes them legal.
///
/// 转义 `text` 以用于 XML 字符数据或属性值。
///
/// XML 1.0 `Char` 产生式之外的字符（除制表符、换行符和回车符之外的 C0 控制字符，
/// 以及非字符 U+FFFE 和 U+FFFF）会被丢弃，因为任何转义都无法使它们合法。
pub fn escape_xml(text: &str) -> String {
    let legal: String = text.chars().filter(|c| is_xml_char(*c)).collect();
    quick_xml::escape::escape(legal.as_str()).into_owned()
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => c >= ' ',
    }
}

/// ANSI-strips then XML-escapes `text`. Every user-supplied value placed in an
/// XML report goes through this.
///
/// 先去除 ANSI 序列再进行 XML 转义。放入 XML 报告的每个用户提供的值都经过此处理。
pub fn sanitize_xml(text: &str) -> String {
    escape_xml(&strip_ansi(text))
}

/// Indents every non-empty line of `text` by `width` spaces.
/// 将 `text` 的每个非空行缩进 `width` 个空格。
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns `word` for a count of one and its plural otherwise.
///
/// 计数为一时返回 `word`，否则返回其复数形式。
///
/// # Examples / 示例
/// ```
/// use xavier::infra::text::plural;
/// assert_eq!(plural("test", 1), "test");
/// assert_eq!(plural("test", 3), "tests");
/// assert_eq!(plural("known failure", 2), "known failures");
/// ```
pub fn plural(word: &str, count: usize) -> String {
    if count == 1 {
        return word.to_string();
    }
    if word.ends_with('s') || word.ends_with('x') || word.ends_with("ch") || word.ends_with("sh") {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

/// Verb agreement for "was"/"were" / "was"/"were" 的动词一致
pub fn was_were(count: usize) -> &'static str {
    if count == 1 { "was" } else { "were" }
}

/// Formats a millisecond duration for humans, e.g. `1s 250ms`.
/// Sub-millisecond precision is rounded away.
///
/// 将毫秒耗时格式化为人类可读形式，例如 `1s 250ms`。亚毫秒精度会被四舍五入。
pub fn pretty_duration(ms: f64) -> String {
    let rounded = if ms.is_finite() && ms > 0.0 { ms.round() as u64 } else { 0 };
    humantime::format_duration(Duration::from_millis(rounded)).to_string()
}

/// Formats a millisecond duration as fractional seconds for XML `time`
/// attributes; absent or zero durations render as an empty string.
///
/// 将毫秒耗时格式化为 XML `time` 属性使用的小数秒；缺失或为零时渲染为空字符串。
pub fn seconds(ms: Option<f64>) -> String {
    match ms.filter(|d| *d > 0.0) {
        Some(d) => format!("{}", d / 1000.0),
        None => String::new(),
    }
}
