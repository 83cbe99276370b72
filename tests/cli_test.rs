use regex::Regex;
use std::process::Command;
use tempfile::TempDir;

fn line_gen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line-gen"))
}

#[test]
fn test_defaults_write_test_rows_in_cwd() {
    let temp_dir = TempDir::new().unwrap();

    let output = line_gen()
        .arg("--quiet")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let content = std::fs::read_to_string(temp_dir.path().join("test_rows.txt")).unwrap();
    assert_eq!(content.lines().count(), 1_000);
}

#[test]
fn test_rows_flag() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("three.txt");

    let status = line_gen()
        .args(["--quiet", "-n", "3", "--file"])
        .arg(&target)
        .status()
        .unwrap();

    assert!(status.success());
    let pattern =
        Regex::new(r"^(Springfield|Hogwarts|Sodor|Whiterun|Falador);-?\d{1,3}\.\d$").unwrap();
    let content = std::fs::read_to_string(&target).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| pattern.is_match(line)));
}

#[test]
fn test_directory_destination_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = line_gen()
        .args(["--quiet", "--file", "."])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("directory"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unparseable_rows_exits_with_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = line_gen()
        .args(["--rows", "many"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("test_rows.txt").exists());
}
