//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a default
//! reporter configuration file.
//!
//! 此模块实现了 `init` 命令，用于写入默认的报告器配置文件。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::Path};

use crate::infra::t;

pub const DEFAULT_CONFIG: &str = r#"# Reporter Configuration / 报告器配置

# Language for console messages; the system language when unset
# 控制台消息的语言；未设置时使用系统语言
# language = "en"

# "console" or "xml" / "console" 或 "xml"
reporter = "console"

# Directory that source locations are relative to / 源码位置所相对的目录
base_path = "."

# Append full error dumps to XML failures / 在 XML 失败信息中附加完整的错误转储
verbose = false

# How flat titles split into suite/class/case: "three" or "two"
# 扁平标题如何拆分为套件/类/用例："three" 或 "two"
title_groups = "three"

# Error name the runner uses for its own failures / 运行器自身失败所使用的错误名称
internal_error_name = "AvaError"

# Passing tests slower than this show their duration / 耗时超过此值的通过测试会显示耗时
duration_threshold_ms = 100.0
"#;

/// Writes [`DEFAULT_CONFIG`] to `output`.
/// An existing file is left untouched unless `force` is set.
///
/// 将 [`DEFAULT_CONFIG`] 写入 `output`。除非设置了 `force`，否则不会覆盖已存在的文件。
///
/// # Returns
/// `true` when the file was written / 文件被写入时返回 `true`
pub fn execute(output: &Path, force: bool, locale: &str) -> Result<bool> {
    if output.exists() && !force {
        println!(
            "{}",
            t!("cli.config_exists", locale = locale, path = output.display()).red()
        );
        println!("{}", t!("cli.use_force", locale = locale).yellow());
        return Ok(false);
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("cli.create_parent_dir_failed", locale = locale, path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(output, DEFAULT_CONFIG)
        .with_context(|| t!("cli.write_failed", locale = locale, path = output.display()).to_string())?;

    println!(
        "{}",
        t!("cli.config_written", locale = locale, path = output.display()).green()
    );
    Ok(true)
}
