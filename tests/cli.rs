//! Integration test: binary exit codes and the fixed diagnostic.
//!
//! Only failure paths are exercised; a successful start needs a real TTY.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphview"))
        .args(args)
        // Keep log files out of the user's state directory
        .env("GLYPHVIEW_CONFIG", "/nonexistent/glyphview/config.toml")
        .env("XDG_STATE_HOME", std::env::temp_dir().join("glyphview_cli_state"))
        .output()
        .expect("Failed to execute binary")
}

fn assert_fixed_diagnostic(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert_eq!(
        stderr,
        "glyphview: unable to display image\nusage: glyphview <IMAGE>\n"
    );
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    assert_fixed_diagnostic(&run(&[]));
}

#[test]
fn missing_file_prints_usage_and_fails() {
    assert_fixed_diagnostic(&run(&["/nonexistent/glyphview/image.png"]));
}

#[test]
fn undecodable_file_prints_usage_and_fails() {
    let path = std::env::temp_dir().join("glyphview_cli_not_an_image.png");
    std::fs::write(&path, b"definitely not a png").expect("write file");

    assert_fixed_diagnostic(&run(&[path.to_str().expect("utf-8 temp path")]));

    std::fs::remove_file(path).ok();
}

#[test]
fn invalid_zoom_prints_usage_and_fails() {
    assert_fixed_diagnostic(&run(&["--zoom", "0", "cat.png"]));
}

#[test]
fn binary_prints_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected version in output, got: {}",
        stdout
    );
}
