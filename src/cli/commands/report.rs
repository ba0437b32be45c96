//! # Report Command Module / 报告命令模块
//!
//! This module implements the `report` command, which replays an event
//! stream through the configured reporter.
//!
//! 此模块实现了 `report` 命令，通过配置的报告器回放事件流。

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use crate::cli::resolve_locale;
use crate::core::config::{ReporterConfig, ReporterKind, expand_path};
use crate::core::replay::{ReplayOutcome, replay};
use crate::reporting::build_reporter;

/// Command-line overrides applied on top of the configuration file.
/// 应用在配置文件之上的命令行覆盖项。
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub input: Option<PathBuf>,
    pub config: PathBuf,
    pub reporter: Option<ReporterKind>,
    pub base_path: Option<PathBuf>,
    pub verbose: bool,
    /// Language given with `--lang` / 通过 `--lang` 指定的语言
    pub language: Option<String>,
    /// Detected system language, used when neither `--lang` nor the file sets one.
    /// 检测到的系统语言，当 `--lang` 和配置文件都未设置语言时使用。
    pub system_language: Option<String>,
}

/// Merges the configuration file at `options.config` with the flags.
/// The language is taken from `--lang`, then the file, then the system, and
/// mapped onto a shipped locale.
///
/// 将 `options.config` 处的配置文件与命令行参数合并。
/// 语言依次取自 `--lang`、配置文件和系统，并映射到已提供的语言区域。
pub fn resolve_config(options: &ReportOptions) -> Result<ReporterConfig> {
    let mut config = ReporterConfig::load(&options.config)?;
    if let Some(reporter) = options.reporter {
        config.reporter = reporter;
    }
    if let Some(base_path) = &options.base_path {
        config.base_path = expand_path(base_path);
    }
    if options.verbose {
        config.verbose = true;
    }
    let language = options
        .language
        .clone()
        .or_else(|| config.language.take())
        .or_else(|| options.system_language.clone());
    config.language = language.map(|language| resolve_locale(&language));
    Ok(config)
}

/// Executes the report command with the provided options.
///
/// # Returns
/// The replay outcome, used by the caller to pick the exit status.
pub fn execute(options: ReportOptions) -> Result<ReplayOutcome> {
    let config = resolve_config(&options)?;
    tracing::debug!(reporter = %config.reporter, base_path = %config.base_path.display(), "starting report");

    let mut reporter = build_reporter(config);
    match &options.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open event stream: {}", path.display()))?;
            replay(reporter.as_mut(), BufReader::new(file))
        }
        None => replay(reporter.as_mut(), io::stdin().lock()),
    }
}
