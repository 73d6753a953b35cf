// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn glyphtree() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glyphtree"))
}

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("trees").join(name)
}

#[test]
fn demo_prints_sample_tree() {
    let output = glyphtree().arg("--demo").output().expect("run glyphtree");
    assert!(output.status.success());

    let expected = std::fs::read_to_string(fixture_path("sample.txt")).expect("read fixture");
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), expected);
}

#[test]
fn renders_json_file_argument() {
    let output = glyphtree().arg(fixture_path("left_only.json")).output().expect("run glyphtree");
    assert!(output.status.success());

    let expected = std::fs::read_to_string(fixture_path("left_only.txt")).expect("read fixture");
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), expected);
}

#[test]
fn reads_tree_from_stdin() {
    let mut child = glyphtree()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn glyphtree");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"{"value": "5"}"#)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait glyphtree");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("  ___\n /   \\\n|  5  |\n \\___/\n"), "{stdout}");
}

#[test]
fn invalid_json_exits_with_error() {
    let mut child = glyphtree()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn glyphtree");
    child.stdin.take().expect("stdin").write_all(b"{\"left\": 1}").expect("write stdin");
    let output = child.wait_with_output().expect("wait glyphtree");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.starts_with("glyphtree: invalid tree json:"), "{stderr}");
}

#[test]
fn bad_usage_exits_with_usage() {
    let output = glyphtree().args(["--demo", "tree.json"]).output().expect("run glyphtree");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}
