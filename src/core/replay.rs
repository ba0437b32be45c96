//! # Replay Module / 回放模块
//!
//! Drives a [`Reporter`] through the lifecycle encoded in an event stream,
//! writing every fragment it renders.
//!
//! 按照事件流中编码的生命周期驱动 [`Reporter`]，并写出其渲染的每个片段。

use anyhow::{Context, Result};
use std::io::BufRead;

use crate::core::events::Event;
use crate::core::models::RunStatus;
use crate::reporting::Reporter;

/// What a replayed stream amounted to.
/// 回放的事件流的结果汇总。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayOutcome {
    /// Number of events dispatched / 已分发的事件数
    pub events: usize,
    /// The status passed to the last `finish`, if the stream had one.
    /// 传递给最后一次 `finish` 的状态（如果流中有的话）。
    pub final_status: Option<RunStatus>,
    /// Number of `unhandled_error` events in the stream.
    /// 流中 `unhandled_error` 事件的数量。
    pub unhandled_errors: usize,
}

impl ReplayOutcome {
    /// A run failed when its final status reports failures or when the
    /// stream carried unhandled errors.
    ///
    /// 当最终状态报告了失败，或流中携带了未处理错误时，运行即为失败。
    pub fn is_failure(&self) -> bool {
        self.unhandled_errors > 0
            || self.final_status.as_ref().is_some_and(RunStatus::has_failures)
    }
}

/// Dispatches one event to `reporter`, writing any rendered fragment.
/// 将一个事件分发给 `reporter`，并写出渲染得到的片段。
pub fn dispatch(reporter: &mut dyn Reporter, event: &Event) -> Result<()> {
    let fragment = match event {
        Event::Start => Some(reporter.start()),
        Event::Test { result, status } => reporter.test(result, status),
        Event::UnhandledError { error } => Some(reporter.unhandled_error(error)),
        Event::Section => reporter.section(),
        Event::Finish { status } => Some(reporter.finish(status)),
        Event::Stdout { data } => {
            reporter.stdout(data.as_bytes()).context("Failed to forward test stdout")?;
            None
        }
        Event::Stderr { data } => {
            reporter.stderr(data.as_bytes()).context("Failed to forward test stderr")?;
            None
        }
    };

    if let Some(text) = fragment {
        reporter
            .write(&text)
            .with_context(|| format!("Failed to write {} output", event.name()))?;
    }
    Ok(())
}

/// Reads newline-delimited events from `input` and replays them through
/// `reporter`. Blank lines are ignored; a malformed line aborts the replay
/// with an error naming its line number.
///
/// 从 `input` 读取换行分隔的事件并通过 `reporter` 回放。
/// 空行会被忽略；格式错误的行会中止回放，并返回指明其行号的错误。
pub fn replay(reporter: &mut dyn Reporter, input: impl BufRead) -> Result<ReplayOutcome> {
    let mut outcome = ReplayOutcome::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read event stream at line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let event = Event::parse_line(&line, line_no)?;
        tracing::trace!(line = line_no, event = event.name(), "dispatching event");
        dispatch(reporter, &event)?;

        outcome.events += 1;
        match event {
            Event::UnhandledError { .. } => outcome.unhandled_errors += 1,
            Event::Finish { status } => outcome.final_status = Some(status),
            _ => {}
        }
    }

    tracing::debug!(
        events = outcome.events,
        finished = outcome.final_status.is_some(),
        "event stream replayed"
    );
    Ok(outcome)
}
