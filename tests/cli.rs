use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

const BIN: &str = env!("CARGO_BIN_EXE_shield-codec");

const EXPECTED: &str =
    r#"{"to":"0x0000000000000000000000000000000000000000","value":0,"data":"abcd1234"}"#;

fn sample_hex() -> String {
    format!("{}abcd1234", "00".repeat(32))
}

fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn shield-codec");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_cli_argument_with_prefix() {
    let output = Command::new(BIN)
        .arg(format!("0x{}", sample_hex()))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{EXPECTED}\n"));
}

#[test]
fn test_cli_stdin_with_whitespace() {
    let output = run_with_stdin(&format!("  {}\n", sample_hex()));

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{EXPECTED}\n"));
}

#[test]
fn test_cli_invalid_hex_fails() {
    let output = Command::new(BIN).arg("zz").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Input is not valid hex"), "stderr: {stderr}");
}

#[test]
fn test_cli_short_buffer_fails() {
    let output = Command::new(BIN).arg("00".repeat(32)).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("too short for payload"), "stderr: {stderr}");
}
