//! # Commands Module / 命令模块
//!
//! - `report` - Replay an event stream through a reporter
//! - `init` - Write a default configuration file
//!
//! - `report` - 通过报告器回放事件流
//! - `init` - 写入默认配置文件

pub mod init;
pub mod report;
