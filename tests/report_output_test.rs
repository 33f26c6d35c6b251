use chrono::{DateTime, Utc};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kc-repo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run kc-repo")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_report() {
    let before = Utc::now();
    let output = run_binary(&[]);
    let after = Utc::now();

    assert_eq!(output.status.code(), Some(0));

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 8);

    assert_eq!(lines[0], "Hello, World! From Golang.");
    assert_eq!(
        lines
            .iter()
            .filter(|l| *l == "Hello, World! From Golang.")
            .count(),
        1
    );

    let timestamp = lines[1]
        .strip_prefix("Current time: ")
        .expect("missing time prefix");
    let parsed = DateTime::parse_from_rfc3339(timestamp).unwrap();
    let tolerance = chrono::Duration::seconds(5);
    assert!(parsed >= before - tolerance);
    assert!(parsed <= after + tolerance);

    let counts: Vec<&str> = lines[2..7].iter().map(String::as_str).collect();
    assert_eq!(
        counts,
        vec!["Count: 1", "Count: 2", "Count: 3", "Count: 4", "Count: 5"]
    );

    assert_eq!(lines[7], "10 + 5 = 15");
}

#[test]
fn test_stdout_has_no_log_output() {
    let output = run_binary(&["--verbose"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[7], "10 + 5 = 15");
}

#[test]
fn test_report_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            br#"
[greeting]
message = "Hi there"

[counter]
start = 1
end = 2

[addition]
a = 40
b = 2
"#,
        )
        .unwrap();

    let path = temp_file.path().to_str().unwrap().to_string();
    let output = run_binary(&["--config", &path]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Hi there");
    assert!(lines[1].starts_with("Current time: "));
    assert_eq!(lines[2], "Count: 1");
    assert_eq!(lines[3], "Count: 2");
    assert_eq!(lines[4], "40 + 2 = 42");
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[counter]\nstart = 9\nend = 1\n")
        .unwrap();

    let path = temp_file.path().to_str().unwrap().to_string();
    let output = run_binary(&["--config", &path]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_missing_config_exits_non_zero() {
    let output = run_binary(&["--config", "/nonexistent/kc-repo.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_stdout_write_failure_exits_non_zero() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_kc-repo"))
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run kc-repo");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("❌ IO error:"));
    assert!(stderr.contains("💡 Check that standard output is writable"));
}
