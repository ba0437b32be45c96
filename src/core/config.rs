//! # Configuration Module / 配置模块
//!
//! Reporter configuration, loaded from an optional `xavier.toml` and
//! overridden by command-line flags.
//!
//! 报告器配置，从可选的 `xavier.toml` 加载，并可被命令行参数覆盖。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The default configuration file name / 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "xavier.toml";

/// The fallback message language / 回退的消息语言
pub const DEFAULT_LANGUAGE: &str = "en";

/// Which reporter renders the run / 渲染运行结果的报告器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    /// Colourised transcript on the error stream / 输出到错误流的彩色记录
    #[default]
    Console,
    /// JUnit-style XML on standard output / 输出到标准输出的 JUnit 风格 XML
    Xml,
}

impl FromStr for ReporterKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(ReporterKind::Console),
            "xml" | "junit" => Ok(ReporterKind::Xml),
            other => bail!("unknown reporter '{}'", other),
        }
    }
}

impl fmt::Display for ReporterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReporterKind::Console => write!(f, "console"),
            ReporterKind::Xml => write!(f, "xml"),
        }
    }
}

/// How a flat, space-delimited title is split into XML suite/class/case names.
///
/// Titles follow the runner's `"<group> <separator> <subgroup> ... <leaf>"`
/// convention. Titles of any other shape produce odd grouping, not errors.
///
/// 如何将扁平的、以空格分隔的标题拆分为 XML 的套件/类/用例名称。
///
/// 标题遵循运行器的 `"<分组> <分隔符> <子分组> ... <叶子>"` 约定。
/// 其他形状的标题只会产生奇怪的分组，而不会报错。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleGroups {
    /// token 0 is the suite, token 2 the classname, the last token the case.
    /// 第 0 个词为套件，第 2 个词为类名，最后一个词为用例名。
    #[default]
    Three,
    /// token 0 is both suite and classname, the last token the case.
    /// 第 0 个词既是套件也是类名，最后一个词为用例名。
    Two,
}

/// Settings shared by both reporters.
/// 两个报告器共享的设置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReporterConfig {
    /// The language for console messages (e.g., "en", "zh-CN"). Unset means
    /// the system language when run from the CLI, English otherwise.
    /// 控制台消息的语言（例如 "en", "zh-CN"）。未设置时，通过 CLI 运行则使用系统语言，否则使用英语。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub reporter: ReporterKind,

    /// Directory that source locations in error reports are relative to.
    /// 错误报告中源码位置所相对的目录。
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    /// Append a full JSON dump of each error to XML failures.
    /// 在 XML 失败信息中附加每个错误的完整 JSON 转储。
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub title_groups: TitleGroups,

    /// Name of the error type the runner raises for its own failures.
    /// 运行器为自身失败所引发的错误类型名称。
    #[serde(default = "default_internal_error_name")]
    pub internal_error_name: String,

    /// Passing tests slower than this many milliseconds show their duration.
    /// 耗时超过此毫秒数的通过测试会显示其耗时。
    #[serde(default = "default_duration_threshold")]
    pub duration_threshold_ms: f64,
}

fn default_base_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_internal_error_name() -> String {
    "AvaError".to_string()
}

fn default_duration_threshold() -> f64 {
    100.0
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            language: None,
            reporter: ReporterKind::default(),
            base_path: default_base_path(),
            verbose: false,
            title_groups: TitleGroups::default(),
            internal_error_name: default_internal_error_name(),
            duration_threshold_ms: default_duration_threshold(),
        }
    }
}

impl ReporterConfig {
    /// Parses a configuration from TOML text.
    /// 从 TOML 文本解析配置。
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: ReporterConfig =
            toml::from_str(content).context("Failed to parse reporter configuration")?;
        config.base_path = expand_path(&config.base_path);
        Ok(config)
    }

    /// Loads the configuration at `path`. A missing file yields the defaults;
    /// an unreadable or malformed one is an error.
    ///
    /// 加载 `path` 处的配置。文件不存在时返回默认值；
    /// 文件不可读或格式错误时返回错误。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), reporter = %config.reporter, "loaded configuration");
        Ok(config)
    }

    /// The locale messages are rendered in / 渲染消息所使用的语言区域
    pub fn locale(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Serializes the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize reporter configuration")
    }
}

/// Expands a leading `~` in a configured path.
/// 展开配置路径中开头的 `~`。
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}
