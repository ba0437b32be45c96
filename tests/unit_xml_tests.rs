//! # XML Reporter Unit Tests / XML 报告器单元测试
//!
//! Tests for the JUnit-style fragments of `XmlReporter`: name resolution,
//! attributes, failure bodies, escaping and stream routing.
//!
//! 测试 `XmlReporter` 的 JUnit 风格片段：名称解析、属性、失败内容、转义以及流路由。

mod common;

use common::*;
use serde_json::json;
use xavier::config::{ReporterConfig, TitleGroups};
use xavier::models::{ErrorInfo, RunStatus, TestResult, UnhandledError, UnhandledKind};
use xavier::reporting::xml::CaseNames;
use xavier::Reporter;

#[cfg(test)]
mod name_resolution_tests {
    use super::*;

    #[test]
    fn test_three_group_title() {
        let names = CaseNames::from_flat_title("Group · Sub · Case", TitleGroups::Three);
        assert_eq!(names.suite, "Group");
        assert_eq!(names.classname, "Sub");
        assert_eq!(names.name, "Case");
    }

    #[test]
    fn test_two_group_title() {
        let names = CaseNames::from_flat_title("Group · Case", TitleGroups::Two);
        assert_eq!(names.suite, "Group");
        assert_eq!(names.classname, "Group");
        assert_eq!(names.name, "Case");
    }

    #[test]
    fn test_single_word_title_degrades() {
        let names = CaseNames::from_flat_title("lonely", TitleGroups::Three);
        assert_eq!(names.suite, "lonely");
        assert_eq!(names.classname, "");
        assert_eq!(names.name, "lonely");
    }

    #[test]
    fn test_ansi_is_stripped_before_splitting() {
        let names = CaseNames::from_flat_title("\u{1b}[31mGroup\u{1b}[39m › Sub › Case", TitleGroups::Three);
        assert_eq!(names.suite, "Group");
        assert_eq!(names.classname, "Sub");
    }

    #[test]
    fn test_title_path_takes_precedence() {
        let result = TestResult {
            title_path: Some(vec!["api".into(), "users".into(), "creates a user".into()]),
            ..TestResult::passed("api users creates a user")
        };
        let names = CaseNames::resolve(&result, TitleGroups::Three);
        assert_eq!(
            names,
            CaseNames {
                suite: "api".into(),
                classname: "users".into(),
                name: "creates a user".into(),
            }
        );
    }

    #[test]
    fn test_empty_title_path_falls_back_to_title() {
        let result = TestResult {
            title_path: Some(vec![]),
            ..TestResult::passed("a - b - c")
        };
        assert_eq!(CaseNames::resolve(&result, TitleGroups::Three).classname, "b");
    }
}

#[cfg(test)]
mod fragment_tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let reporter = xml();
        assert_eq!(
            reporter.start(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites name=\"tests\">"
        );
        assert_eq!(reporter.finish(&RunStatus::default()), "</testsuites>");
    }

    #[test]
    fn test_passing_case_without_duration() {
        let fragment = xml()
            .test(&TestResult::passed("Group · Sub · Case"), &RunStatus::default())
            .unwrap();
        assert_eq!(
            fragment,
            [
                r#"<testsuite tests="1" failures="0" errors="0" name="Group" time="">"#,
                r#"  <testcase classname="Sub" name="Case" time="">"#,
                "  </testcase>",
                "</testsuite>",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_duration_in_seconds() {
        let fragment = xml()
            .test(&TestResult::passed("Group · Sub · Case").with_duration(250.0), &RunStatus::default())
            .unwrap();
        assert!(fragment.contains(r#"name="Group" time="0.25">"#));
        assert!(fragment.contains(r#"<testcase classname="Sub" name="Case" time="0.25">"#));
    }

    #[test]
    fn test_zero_duration_is_blank() {
        let fragment = xml()
            .test(&TestResult::passed("a - b - c").with_duration(0.0), &RunStatus::default())
            .unwrap();
        assert!(fragment.contains(r#"time="">"#));
        assert!(!fragment.contains(r#"time="0""#));
    }

    #[test]
    fn test_skipped_and_todo_attributes() {
        let skipped = TestResult {
            skip: true,
            ..TestResult::passed("a - b - c")
        };
        let todo = TestResult {
            todo: true,
            ..TestResult::passed("a - b - d")
        };
        let skipped = xml().test(&skipped, &RunStatus::default()).unwrap();
        let todo = xml().test(&todo, &RunStatus::default()).unwrap();

        assert!(skipped.contains(r#"failures="0" skipped="1" errors="0""#));
        assert!(skipped.contains("    <skipped/>"));
        assert!(todo.contains(r#"failures="0" todo="1" errors="0""#));
        assert!(todo.contains(r#"<skipped message="todo"/>"#));
    }

    #[test]
    fn test_failure_body() {
        let result = TestResult {
            file: Some("test/math.js".to_string()),
            ..TestResult::failed(
                "math - division - rounds",
                ErrorInfo {
                    message: "not equal".to_string(),
                    operator: Some("===".to_string()),
                    expected: Some(json!(2)),
                    actual: Some(json!(3)),
                    assertion: Some("is".to_string()),
                    stack: Some("Error: not equal\n    at rounds (test/math.js:4:7)".to_string()),
                    ..Default::default()
                },
            )
            .with_duration(12.0)
        };
        let fragment = xml().test(&result, &RunStatus::default()).unwrap();

        assert!(fragment.contains(r#"<testsuite tests="1" failures="1" errors="0" name="math" time="0.012">"#));
        let expected_body = [
            "    <failure>",
            "      ---",
            "        message: not equal",
            "        operator: ===",
            "        expected: 2",
            "        actual: 3",
            "        assertion: is",
            "        duration_ms: 12",
            "        at: at rounds (test/math.js:4:7)",
            "        file: test/math.js",
            "      ...",
            "    </failure>",
            "  </testcase>",
        ]
        .join("\n");
        assert!(fragment.contains(&expected_body), "{}", fragment);
    }

    #[test]
    fn test_failure_omits_missing_fields() {
        let fragment = xml()
            .test(&TestResult::failed("a - b - c", ErrorInfo::new(" ")), &RunStatus::default())
            .unwrap();
        assert!(fragment.contains("    <failure>\n      ---\n      ...\n    </failure>"));
        assert!(!fragment.contains("undefined"));
    }

    #[test]
    fn test_verbose_dump_is_escaped() {
        let config = ReporterConfig {
            verbose: true,
            ..Default::default()
        };
        let (reporter, _, _) = xml_with(config);
        let fragment = reporter
            .test(&TestResult::failed("a - b - c", ErrorInfo::new("bad")), &RunStatus::default())
            .unwrap();
        assert!(fragment.contains("        dump: {&quot;message&quot;:&quot;bad&quot;"));
    }
}

#[cfg(test)]
mod escaping_tests {
    use super::*;

    #[test]
    fn test_markup_in_titles_and_messages_is_escaped() {
        let result = TestResult::failed(
            "a<b & c>d",
            ErrorInfo {
                message: "expected <div> & got </div>".to_string(),
                ..Default::default()
            },
        );
        let fragment = xml().test(&result, &RunStatus::default()).unwrap();

        assert!(fragment.contains(r#"name="a&lt;b""#));
        assert!(fragment.contains(r#"classname="c&gt;d""#));
        assert!(fragment.contains("message: expected &lt;div&gt; &amp; got &lt;/div&gt;"));
        assert!(!fragment.contains("<div>"));
        assert!(!fragment.contains("a<b"));
    }

    #[test]
    fn test_anonymous_frames_are_escaped() {
        let result = TestResult::failed(
            "a - b - c",
            ErrorInfo {
                message: "x".to_string(),
                stack: Some("Error: x\n    at <anonymous> (test/a.js:1:1)".to_string()),
                ..Default::default()
            },
        );
        let fragment = xml().test(&result, &RunStatus::default()).unwrap();
        assert!(fragment.contains("at: at &lt;anonymous&gt; (test/a.js:1:1)"));
        assert!(!fragment.contains("<anonymous>"));
    }

    #[test]
    fn test_ansi_and_control_characters_are_removed() {
        let result = TestResult::failed(
            "a - b - c",
            ErrorInfo::new("\u{1b}[31mred\u{1b}[39m\u{0007} text"),
        );
        let fragment = xml().test(&result, &RunStatus::default()).unwrap();
        assert!(fragment.contains("message: red text"));
        assert!(!fragment.contains('\u{1b}'));
        assert!(!fragment.contains('\u{0007}'));
    }

    #[test]
    fn test_noncharacters_are_removed() {
        let result = TestResult::failed(
            "a b c\u{FFFF}",
            ErrorInfo::new("bad\u{FFFE} value"),
        );
        let fragment = xml().test(&result, &RunStatus::default()).unwrap();
        assert!(fragment.contains(r#"<testcase classname="c" name="c" time="">"#));
        assert!(fragment.contains("message: bad value"));
        assert!(!fragment.contains('\u{FFFF}'));
        assert!(!fragment.contains('\u{FFFE}'));
    }

    #[test]
    fn test_document_is_well_formed() {
        let reporter = xml();
        let status = RunStatus::default();
        let mut doc = reporter.start();
        for result in [
            TestResult::passed("Group · Sub · <Case> & \"quotes\""),
            TestResult {
                skip: true,
                ..TestResult::passed("Group · Sub · skipped")
            },
            failing_test("Group · Sub · fails", "1 < 2 && 3 > 2"),
        ] {
            doc.push('\n');
            doc.push_str(&reporter.test(&result, &status).unwrap());
        }
        doc.push('\n');
        doc.push_str(&reporter.unhandled_error(&UnhandledError {
            kind: UnhandledKind::Rejection,
            name: "Error".to_string(),
            message: "<boom>".to_string(),
            stack: Some("Error: <boom>\n    at <anonymous>".to_string()),
            file: None,
        }));
        doc.push('\n');
        doc.push_str(&reporter.finish(&status));

        assert!(doc.starts_with("<?xml"));
        assert!(doc.ends_with("</testsuites>"));
        assert_well_formed(&doc);
    }
}

#[cfg(test)]
mod unhandled_error_tests {
    use super::*;

    fn error(kind: UnhandledKind, name: &str) -> UnhandledError {
        UnhandledError {
            kind,
            name: name.to_string(),
            message: "boom".to_string(),
            stack: Some("TypeError: boom\n    at load (test/io.js:2:9)".to_string()),
            file: Some("test/io.js".to_string()),
        }
    }

    #[test]
    fn test_internal_error_has_message_only() {
        let fragment = xml().unhandled_error(&error(UnhandledKind::Exception, "AvaError"));
        assert_eq!(
            fragment,
            [
                r#"<testsuite tests="1" failures="1" errors="1">"#,
                "  <error>",
                "    boom",
                "  </error>",
                "</testsuite>",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_other_errors_include_details() {
        let fragment = xml().unhandled_error(&error(UnhandledKind::Exception, "TypeError"));
        assert!(fragment.contains("    boom\n  ---\n    name: TypeError\n    at: at load (test/io.js:2:9)\n"));
        assert!(fragment.contains("    file: test/io.js\n  ...\n  </error>"));
        assert!(!fragment.contains("dump:"));
    }

    #[test]
    fn test_rejections_are_never_internal() {
        let fragment = xml().unhandled_error(&error(UnhandledKind::Rejection, "AvaError"));
        assert!(fragment.contains("name: AvaError"));
    }

    #[test]
    fn test_verbose_adds_dump() {
        let config = ReporterConfig {
            verbose: true,
            ..Default::default()
        };
        let (reporter, _, _) = xml_with(config);
        let fragment = reporter.unhandled_error(&error(UnhandledKind::Rejection, "Error"));
        assert!(fragment.contains("    dump: {&quot;type&quot;:&quot;rejection&quot;"));
    }
}

#[cfg(test)]
mod stream_tests {
    use super::*;

    #[test]
    fn test_report_goes_to_stdout_and_test_output_to_stderr() {
        let (mut reporter, out, err) = xml_with(ReporterConfig::default());
        reporter.write("<testsuites name=\"tests\">").unwrap();
        reporter.stdout(b"console.log output").unwrap();
        reporter.stderr(b"\nconsole.error output").unwrap();

        assert_eq!(out.contents(), "<testsuites name=\"tests\">\n");
        assert_eq!(err.contents(), "console.log output\nconsole.error output");
    }

    #[test]
    fn test_xml_has_no_section_rule() {
        assert!(xml().section().is_none());
    }
}
