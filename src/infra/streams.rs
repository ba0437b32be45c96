//! # Output Streams Module / 输出流模块
//!
//! The pair of writers a reporter emits to: the primary output (standard
//! output) and the diagnostics stream (standard error).
//!
//! 报告器输出的一对写入器：主输出（标准输出）和诊断流（标准错误）。

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

pub struct Streams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Streams {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self { out, err }
    }

    /// The process's own standard output and standard error.
    /// 进程自身的标准输出和标准错误。
    pub fn process() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }

    /// Writes `text` and a newline to standard output.
    pub fn line_out(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Writes `text` and a newline to standard error.
    pub fn line_err(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.err, "{}", text)?;
        self.err.flush()
    }

    /// Writes raw bytes to standard error.
    pub fn raw_err(&mut self, data: &[u8]) -> io::Result<()> {
        self.err.write_all(data)?;
        self.err.flush()
    }
}

impl Default for Streams {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for Streams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}

/// A cloneable in-memory sink; every clone appends to the same buffer.
/// 可克隆的内存输出；每个克隆都追加到同一个缓冲区。
#[derive(Debug, Clone, Default)]
pub struct MemoryStream(Arc<Mutex<Vec<u8>>>);

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl Write for MemoryStream {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .0
            .lock()
            .map_err(|_| io::Error::other("memory stream lock poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
