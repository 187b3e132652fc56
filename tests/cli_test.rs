//! Tests for the `rtfhtml` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;

use tempfile::TempDir;

const EVENTS: &str = r#"[
    {"event": "text", "format": [{"OutlineLevel": 0}], "text": "Title"},
    {"event": "break", "format": [{"OutlineLevel": 0}], "kind": "Paragraph"},
    {"event": "text", "format": ["Bold"], "text": "Bold text"}
]"#;

fn rtfhtml() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rtfhtml"))
}

#[test]
fn test_cli_writes_fragment() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.json");
    let output = dir.path().join("out.html");
    fs::write(&input, EVENTS).unwrap();

    let status = rtfhtml().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(
        html,
        "<div><h1>Title</h1><p><strong>Bold text</strong></p></div>"
    );
}

#[test]
fn test_cli_document_with_default_font() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.json");
    fs::write(&input, EVENTS).unwrap();

    let out = rtfhtml()
        .arg(&input)
        .args(["--font", "Arial", "--font-family", "swiss", "--font-size", "10"])
        .args(["-d", "Report"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let html = String::from_utf8(out.stdout).unwrap();
    assert!(html.starts_with("<!DOCTYPE html><html><head>"));
    assert!(html.contains("<title>Report</title>"));
    assert!(html.contains("<div style=\"font-family:Arial,sans-serif;font-size:10pt;\">"));
}

#[test]
fn test_cli_rejects_bad_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.json");
    fs::write(&input, "{not json").unwrap();

    let out = rtfhtml().arg(&input).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: JSON error"));
}
