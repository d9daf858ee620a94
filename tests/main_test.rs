use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const LAYOUT_JSON: &str = r#"{
    "modules": {
        "cpu": {
            "key": "CPU",
            "format": "{1} ({2})",
            "args": [
                {"type": "string", "value": "Ryzen"},
                {"type": "uint16", "value": 16}
            ],
            "help": ["Name", "Threads"]
        },
        "os": {
            "args": [{"type": "string", "value": "Linux"}]
        }
    }
}"#;

fn fetchfmt(cwd: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fetchfmt"))
        .current_dir(cwd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            // The child may exit before reading, e.g. on a usage error.
            let _ = child_stdin.write_all(input.as_bytes());
        }
    }

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn layout_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("fetchfmt.json"), LAYOUT_JSON).unwrap();
    temp_dir
}

#[test]
fn test_renders_format_with_text_args() {
    let temp_dir = TempDir::new().unwrap();
    let output = fetchfmt(temp_dir.path(), &["{1} ({2})", "Ryzen", "16"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Ryzen (16)\x1b[0m\n");
}

#[test]
fn test_no_newline() {
    let temp_dir = TempDir::new().unwrap();
    let output = fetchfmt(temp_dir.path(), &["-n", "x{1}", "y"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "xy\x1b[0m");
}

#[test]
fn test_stdin_args_follow_text_args() {
    let temp_dir = TempDir::new().unwrap();
    let output = fetchfmt(
        temp_dir.path(),
        &["--stdin", "{1}-{2}-{3}", "a"],
        Some(r#"[{"type": "uint8", "value": 7}, {"type": "bool", "value": false}]"#),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "a-7-false\x1b[0m\n");
}

#[test]
fn test_invalid_stdin_args_fail() {
    let temp_dir = TempDir::new().unwrap();
    let output = fetchfmt(
        temp_dir.path(),
        &["-s", "{1}"],
        Some(r#"[{"type": "uint8", "value": 300}]"#),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Argument error"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_renders_layout_from_current_dir() {
    let temp_dir = layout_dir();
    let output = fetchfmt(temp_dir.path(), &[], None);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "CPU: Ryzen (16)\x1b[0m\nos: Linux\x1b[0m\n"
    );
}

#[test]
fn test_renders_layout_from_config_flag() {
    let temp_dir = layout_dir();
    let cwd = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("fetchfmt.json");
    let output = fetchfmt(cwd.path(), &["-c", config_path.to_str().unwrap()], None);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("CPU: Ryzen (16)"));
}

#[test]
fn test_format_help() {
    let temp_dir = layout_dir();
    let output = fetchfmt(temp_dir.path(), &["--format-help"], None);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "CPU format:\n  default: {1} ({2})\n  {1}: Name\n  {2}: Threads\nos format:\n  default: {}\n"
    );
}

#[test]
fn test_nothing_to_render() {
    let temp_dir = TempDir::new().unwrap();
    let output = fetchfmt(temp_dir.path(), &[], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Nothing to render"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_layout_without_modules() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("fetchfmt.yml"), "separator: \" | \"\n").unwrap();
    let output = fetchfmt(temp_dir.path(), &[], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Nothing to render"));
}

#[test]
fn test_stdin_without_format_is_rejected() {
    let temp_dir = layout_dir();
    let output = fetchfmt(temp_dir.path(), &["--stdin"], Some("[]"));

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unsupported_kind_is_reported_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("fetchfmt.json"),
        r#"{"modules": {"dev": {"format": "[{1}]", "args": [{"type": "pointer"}]}}}"#,
    )
    .unwrap();
    let output = fetchfmt(temp_dir.path(), &[], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "dev: []\x1b[0m\n");
    assert!(stderr(&output).contains("pointer"));
}
