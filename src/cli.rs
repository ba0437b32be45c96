//! # CLI Module / 命令行模块
//!
//! Builds the localised command-line interface and dispatches the `report`
//! and `init` commands.
//!
//! 构建本地化的命令行接口，并分发 `report` 和 `init` 命令。

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, process::ExitCode};

use crate::core::config::{DEFAULT_CONFIG_FILE, DEFAULT_LANGUAGE, ReporterKind};
use crate::infra::t;

pub mod commands;

use commands::report::ReportOptions;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It accepts both `--lang <VALUE>` and `--lang=<VALUE>`.
pub fn pre_parse_language(args: &[String]) -> Option<String> {
    args.iter().enumerate().find_map(|(pos, arg)| {
        if arg == "--lang" {
            args.get(pos + 1).cloned()
        } else {
            arg.strip_prefix("--lang=").map(str::to_string)
        }
    })
}

/// Maps a raw locale onto one the crate ships translations for: the full
/// locale first (e.g. "zh-CN", case-insensitive, `_` or `-`), then any
/// shipped locale with the same language part (e.g. "zh" or "zh-Hans-CN"
/// to "zh-CN"), then "en".
///
/// 将原始语言区域映射到本 crate 提供翻译的语言区域：先匹配完整区域
/// （如 "zh-CN"，不区分大小写，`_` 或 `-` 均可），再匹配语言部分相同的已提供区域
/// （如 "zh" 或 "zh-Hans-CN" 映射到 "zh-CN"），最后回退到 "en"。
pub fn resolve_locale(raw: &str) -> String {
    let available = rust_i18n::available_locales!();
    let normalized = raw.trim().replace('_', "-");
    if let Some(exact) = available.iter().find(|l| l.eq_ignore_ascii_case(&normalized)) {
        return exact.to_string();
    }

    let language = normalized.split('-').next().unwrap_or_default();
    available
        .iter()
        .find(|l| l.split('-').next().is_some_and(|part| part.eq_ignore_ascii_case(language)))
        .map(|l| l.to_string())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// The `--lang` value clap parsed for a subcommand, resolved to a shipped locale.
fn explicit_language(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("lang").map(|raw| resolve_locale(raw))
}

fn build_cli(locale: &str) -> Command {
    Command::new("xavier")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("report")
                .about(t!("cli.report_about", locale = locale).to_string())
                .arg(
                    Arg::new("input")
                        .help(t!("cli.arg_input", locale = locale).to_string())
                        .value_name("INPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("reporter")
                        .short('r')
                        .long("reporter")
                        .help(t!("cli.arg_reporter", locale = locale).to_string())
                        .value_name("REPORTER")
                        .value_parser(["console", "xml"])
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("cli.arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("base-path")
                        .long("base-path")
                        .help(t!("cli.arg_base_path", locale = locale).to_string())
                        .value_name("BASE_PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .help(t!("cli.arg_verbose", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.init_about", locale = locale).to_string())
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help(t!("cli.arg_init_path", locale = locale).to_string())
                        .value_name("PATH")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn report_options(matches: &ArgMatches, system_language: &str) -> Result<ReportOptions> {
    let reporter = matches
        .get_one::<String>("reporter")
        .map(|raw| raw.parse::<ReporterKind>())
        .transpose()?;

    Ok(ReportOptions {
        input: matches.get_one::<PathBuf>("input").cloned(),
        config: matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        reporter,
        base_path: matches.get_one::<PathBuf>("base-path").cloned(),
        verbose: matches.get_flag("verbose"),
        language: explicit_language(matches),
        system_language: Some(system_language.to_string()),
    })
}

/// Parses the command line and runs the selected command.
/// Returns the exit status the process should end with.
pub fn run() -> Result<ExitCode> {
    let system_language = resolve_locale(
        &sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
    );

    // Help text is built before clap parses, so the language is pre-parsed.
    let args: Vec<String> = env::args().collect();
    let help_language = pre_parse_language(&args)
        .map(|lang| resolve_locale(&lang))
        .unwrap_or_else(|| system_language.clone());
    rust_i18n::set_locale(&help_language);

    let matches = build_cli(&help_language).get_matches();

    match matches.subcommand() {
        Some(("report", report_matches)) => {
            let options = report_options(report_matches, &system_language)?;
            let outcome = commands::report::execute(options)?;
            if outcome.is_failure() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Some(("init", init_matches)) => {
            let explicit = explicit_language(init_matches);
            // Show language detection message if it was auto-detected
            if explicit.is_none() {
                println!(
                    "🌐 {}",
                    t!("cli.system_language_detected", locale = &system_language, lang = &system_language)
                );
            }
            let language = explicit.unwrap_or(system_language);
            let path = init_matches
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let force = init_matches.get_flag("force");
            if commands::init::execute(&path, force, &language)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        // `subcommand_required` makes clap exit before reaching here.
        _ => Ok(ExitCode::FAILURE),
    }
}

