use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use xavier::config::ReporterConfig;
use xavier::infra::streams::{MemoryStream, Streams};
use xavier::infra::terminal::FixedWidth;
use xavier::models::{ErrorInfo, RunStatus, TestResult};
use xavier::{ConsoleReporter, Reporter, XmlReporter};

fn streams() -> Streams {
    Streams::new(Box::new(MemoryStream::new()), Box::new(MemoryStream::new()))
}

fn failed(index: usize) -> TestResult {
    TestResult::failed(
        format!("suite{} › group › case <{}>", index % 7, index),
        ErrorInfo {
            message: format!("expected {} & got {}", index, index + 1),
            stack: Some(format!(
                "AssertionError: mismatch\n    at case{} (test/suite.js:{}:5)\n    at Test.run (node_modules/ava/lib/test.js:120:10)",
                index,
                index + 1
            )),
            expected: Some(serde_json::json!({ "value": index })),
            actual: Some(serde_json::json!({ "value": index + 1 })),
            show_output: true,
            ..Default::default()
        },
    )
    .with_duration(index as f64)
}

fn bench_console_finish(c: &mut Criterion) {
    let reporter = ConsoleReporter::new(ReporterConfig::default())
        .with_terminal(FixedWidth(Some(100)))
        .with_streams(streams());
    let tests: Vec<TestResult> = (0..200).map(failed).collect();
    let status = RunStatus {
        fail_count: tests.len(),
        file_count: 7,
        test_count: tests.len(),
        tests,
        ..Default::default()
    };

    c.bench_function("console_finish_200_failures", |b| {
        b.iter(|| reporter.finish(black_box(&status)));
    });
}

fn bench_xml_tests(c: &mut Criterion) {
    let reporter = XmlReporter::new(ReporterConfig::default()).with_streams(streams());
    let results: Vec<TestResult> = (0..200).map(failed).collect();
    let status = RunStatus::default();

    c.bench_function("xml_test_fragments_200", |b| {
        b.iter(|| {
            for result in &results {
                black_box(reporter.test(result, &status));
            }
        });
    });
}

criterion_group!(benches, bench_console_finish, bench_xml_tests);
criterion_main!(benches);
