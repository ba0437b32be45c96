//! # Terminal & Clock Module / 终端与时钟模块
//!
//! Capabilities the console reporter queries from its environment, kept
//! behind traits so rendering can be exercised without a real terminal.
//!
//! 控制台报告器从环境中查询的能力，通过 trait 抽象，
//! 使渲染可以在没有真实终端的情况下被测试。

use chrono::{Local, NaiveTime};

/// The width used when the terminal cannot be queried.
/// 无法查询终端时使用的宽度。
pub const DEFAULT_WIDTH: usize = 80;

/// Reports the column width of the attached terminal, if any.
/// 报告所连接终端的列宽（如果有）。
pub trait TerminalSize: Send + Sync {
    fn width(&self) -> Option<usize>;

    fn width_or_default(&self) -> usize {
        self.width().filter(|w| *w > 0).unwrap_or(DEFAULT_WIDTH)
    }
}

/// Queries the process's standard output terminal.
/// 查询进程的标准输出终端。
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessTerminal;

impl TerminalSize for ProcessTerminal {
    fn width(&self) -> Option<usize> {
        console::Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
    }
}

/// A fixed answer, for tests and non-interactive use.
/// 固定的宽度，用于测试和非交互场景。
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedWidth(pub Option<usize>);

impl TerminalSize for FixedWidth {
    fn width(&self) -> Option<usize> {
        self.0
    }
}

/// Source of the wall-clock time stamped on the run summary.
/// 运行摘要上所标记的挂钟时间来源。
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
