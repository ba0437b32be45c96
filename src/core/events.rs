//! # Events Module / 事件模块
//!
//! The newline-delimited JSON encoding of the reporter lifecycle. Each line
//! is one call a runner would otherwise make on a reporter directly.
//!
//! 报告器生命周期的换行分隔 JSON 编码。每一行对应运行器原本会直接对报告器进行的一次调用。
//!
//! ```text
//! {"type":"start"}
//! {"type":"test","result":{"title":"math › adds","duration":3},"status":{"fileCount":1}}
//! {"type":"unhandled_error","error":{"type":"rejection","name":"Error","message":"boom"}}
//! {"type":"finish","status":{"passCount":1,"testCount":1,"fileCount":1}}
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::models::{RunStatus, TestResult, UnhandledError};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Start,
    Test {
        result: TestResult,
        #[serde(default)]
        status: RunStatus,
    },
    UnhandledError {
        error: UnhandledError,
    },
    Section,
    Stdout {
        data: String,
    },
    Stderr {
        data: String,
    },
    Finish {
        #[serde(default)]
        status: RunStatus,
    },
}

impl Event {
    /// Parses one line of the event stream. `line_no` is one-based and only
    /// used for the error message.
    ///
    /// 解析事件流中的一行。`line_no` 从 1 开始，仅用于错误消息。
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        serde_json::from_str(line).with_context(|| format!("Invalid event on line {}", line_no))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::Test { .. } => "test",
            Event::UnhandledError { .. } => "unhandled_error",
            Event::Section => "section",
            Event::Stdout { .. } => "stdout",
            Event::Stderr { .. } => "stderr",
            Event::Finish { .. } => "finish",
        }
    }
}
