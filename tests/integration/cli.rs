//! End-to-end tests that run the compiled binary.

use std::path::Path;
use std::process::{Command, Output};

use crate::common::{json_lines, page_texts, page_marker, temp_dir, write_pdf};

fn pdfstitch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdfstitch"))
        .args(args)
        .output()
        .expect("Failed to run pdfstitch")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn test_info_missing_file_exits_zero_with_error_line() {
    let dir = temp_dir();
    let missing = dir.path().join("absent.pdf");

    let output = pdfstitch(&["info", path_str(&missing)]);

    assert_eq!(output.status.code(), Some(0));
    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert!(lines[0]["error"].as_str().unwrap().contains("absent.pdf"));
}

#[test]
fn test_merge_reports_progress_then_success() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a", 3);
    let b = write_pdf(dir.path(), "b", 5);
    let out = dir.path().join("merged.pdf");

    let inputs = serde_json::to_string(&[path_str(&a), path_str(&b)]).unwrap();
    let output = pdfstitch(&["merge", &inputs, path_str(&out)]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let lines = json_lines(&output.stdout);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], serde_json::json!({"type": "progress", "value": 50}));
    assert_eq!(lines[1], serde_json::json!({"type": "progress", "value": 100}));
    assert_eq!(lines[2], serde_json::json!({"type": "success", "path": path_str(&out)}));

    let texts = page_texts(&out);
    assert_eq!(texts.len(), 8);
    assert!(texts[0].contains(&page_marker("a", 1)));
    assert!(texts[3].contains(&page_marker("b", 1)));
    assert!(texts[7].contains(&page_marker("b", 5)));
}

#[test]
fn test_merge_empty_list_is_usage_error() {
    let dir = temp_dir();
    let out = dir.path().join("out.pdf");

    let output = pdfstitch(&["merge", "[]", path_str(&out)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!out.exists());
}

#[test]
fn test_merge_malformed_json_is_usage_error() {
    let output = pdfstitch(&["merge", "a.pdf,b.pdf", "out.pdf"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid input list"));
}

#[test]
fn test_merge_missing_input_fails_without_success() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a", 1);
    let missing = dir.path().join("missing.pdf");
    let out = dir.path().join("out.pdf");

    let inputs = serde_json::to_string(&[path_str(&a), path_str(&missing)]).unwrap();
    let output = pdfstitch(&["merge", &inputs, path_str(&out)]);

    assert_eq!(output.status.code(), Some(3));
    assert!(json_lines(&output.stdout).iter().all(|line| line["type"] != "success"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.pdf"));
    assert!(!out.exists());
}

#[test]
fn test_unknown_command_fails() {
    let output = pdfstitch(&["split", "a.pdf"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_arguments_fails() {
    let output = pdfstitch(&[]);

    assert!(!output.status.success());
}

#[test]
fn test_merge_missing_output_argument_fails() {
    let output = pdfstitch(&["merge", r#"["a.pdf"]"#]);

    assert_eq!(output.status.code(), Some(2));
}
