// Shared test helpers for integration tests
#![allow(dead_code)]

use chrono::NaiveTime;
use quick_xml::Reader;
use quick_xml::events::Event as XmlEvent;
use xavier::config::ReporterConfig;
use xavier::infra::streams::{MemoryStream, Streams};
use xavier::infra::terminal::{FixedClock, FixedWidth};
use xavier::infra::text::strip_ansi;
use xavier::models::{ErrorInfo, RunStatus, TestResult};
use xavier::{ConsoleReporter, XmlReporter};

pub fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 34, 56).unwrap()
}

/// A console reporter with a fixed clock and an 80-column terminal, writing
/// into the returned in-memory streams (stdout, stderr).
pub fn console_with(config: ReporterConfig) -> (ConsoleReporter, MemoryStream, MemoryStream) {
    let out = MemoryStream::new();
    let err = MemoryStream::new();
    let reporter = ConsoleReporter::new(config)
        .with_clock(FixedClock(noon()))
        .with_terminal(FixedWidth(Some(80)))
        .with_streams(Streams::new(Box::new(out.clone()), Box::new(err.clone())));
    (reporter, out, err)
}

pub fn console() -> ConsoleReporter {
    console_with(ReporterConfig::default()).0
}

pub fn xml_with(config: ReporterConfig) -> (XmlReporter, MemoryStream, MemoryStream) {
    let out = MemoryStream::new();
    let err = MemoryStream::new();
    let reporter =
        XmlReporter::new(config).with_streams(Streams::new(Box::new(out.clone()), Box::new(err.clone())));
    (reporter, out, err)
}

pub fn xml() -> XmlReporter {
    xml_with(ReporterConfig::default()).0
}

/// Rendered text with colours removed.
pub fn plain(text: &str) -> String {
    strip_ansi(text)
}

pub fn status() -> RunStatus {
    RunStatus {
        file_count: 2,
        test_count: 5,
        ..Default::default()
    }
}

pub fn failing_test(title: &str, message: &str) -> TestResult {
    TestResult::failed(
        title,
        ErrorInfo {
            message: message.to_string(),
            stack: Some(format!(
                "Error: {}\n    at Context.fn (test/math.js:3:5)\n    at Test.run (node_modules/ava/lib/test.js:120:10)",
                message
            )),
            ..Default::default()
        },
    )
}

/// Parses `doc` with quick-xml and asserts that it is well-formed and that
/// every element is closed.
pub fn assert_well_formed(doc: &str) {
    let mut reader = Reader::from_str(doc);
    let mut depth: i64 = 0;
    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(_)) => depth += 1,
            Ok(XmlEvent::End(_)) => depth -= 1,
            Ok(XmlEvent::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!(
                "malformed XML at position {}: {:?}\n{}",
                reader.buffer_position(),
                e,
                doc
            ),
        }
        assert!(depth >= 0, "unbalanced XML:\n{}", doc);
    }
    assert_eq!(depth, 0, "unclosed elements in:\n{}", doc);
}
