use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mycli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mycli").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn greet_prints_greeting() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .args(["greet", "Ada"])
        .assert()
        .success()
        .stdout("Hello, Ada! 🥳\n");
}

#[test]
fn interact_reads_name_from_stdin() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .arg("interact")
        .write_stdin("Grace\n")
        .assert()
        .success()
        .stdout("What is your name?\nNice to meet you, Grace! 🎉\n");
}

#[test]
fn interact_without_input_fails() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .arg("interact")
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Nice to meet you").not());
}

#[test]
fn sysinfo_lists_all_fields_in_order() {
    let dir = TempDir::new().unwrap();
    let output = mycli(&dir).arg("sysinfo").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "🖥️  System Information:");

    let labels = [
        "- Hostname      : ",
        "- OS Type       : ",
        "- Platform      : ",
        "- Architecture  : ",
        "- CPUs          : ",
        "- Total Memory  : ",
        "- Free Memory   : ",
        "- Uptime        : ",
    ];
    assert_eq!(lines.len(), labels.len() + 1);
    for (line, label) in lines[1..].iter().zip(labels) {
        let value = line
            .strip_prefix(label)
            .unwrap_or_else(|| panic!("expected {label:?}, got {line:?}"));
        assert!(!value.trim().is_empty(), "empty value for {label:?}");
    }
    assert!(lines[5].ends_with(" cores"));

    if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
        assert!(lines[6].ends_with(" GB"), "total memory: {:?}", lines[6]);
        assert!(lines[7].ends_with(" GB"), "free memory: {:?}", lines[7]);
        assert!(lines[8].ends_with(" minutes"), "uptime: {:?}", lines[8]);
    }
}

#[test]
fn mkdir_twice_reports_existing_folder() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("photos");

    mycli(&dir)
        .args(["mkdir", "photos"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "✅ Folder created: {}",
            target.display()
        )));

    mycli(&dir)
        .args(["mkdir", "photos"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "⚠️ Folder already exists: {}",
            target.display()
        )));

    assert!(target.is_dir());
}

#[test]
fn mkdir_with_missing_parent_fails() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .args(["mkdir", "a/b/c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create folder"));
}

#[test]
fn touch_twice_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("empty.txt");

    mycli(&dir)
        .args(["touch", "empty.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "✅ File created: {}",
            target.display()
        )));
    assert_eq!(fs::metadata(&target).unwrap().len(), 0);

    fs::write(&target, "keep").unwrap();
    mycli(&dir)
        .args(["touch", "empty.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "⚠️ File already exists: {}",
            target.display()
        )));
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
}

// `write` has always been described as overwriting, but it appends.
#[test]
fn write_appends_instead_of_overwriting() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("notes.txt");

    for _ in 0..2 {
        mycli(&dir)
            .args(["write", "notes.txt", "a", "b", "c"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "➕ Appended text to file: {}",
                target.display()
            )));
    }

    assert_eq!(fs::read_to_string(&target).unwrap(), "a b c\na b c\n");
}

#[test]
fn write_failure_is_reported_without_failing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("folder")).unwrap();

    let output = mycli(&dir).args(["write", "folder", "hello"]).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "unexpected stderr: {stderr:?}");
    assert!(stderr.starts_with("❌ Failed to append:"));
}

#[test]
fn read_after_write_prints_contents() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .args(["write", "hello.txt", "hello"])
        .assert()
        .success();

    mycli(&dir)
        .args(["read", "hello.txt"])
        .assert()
        .success()
        .stdout("📄 Contents of hello.txt:\n\nhello\n\n");
}

#[test]
fn read_missing_file_reports_not_found() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .args(["read", "missing.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "❌ File not found: {}",
            dir.path().join("missing.txt").display()
        )));
}

#[test]
fn read_decodes_invalid_utf8_with_replacement() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("latin1.txt"), b"caf\xe9\n").unwrap();

    mycli(&dir)
        .args(["read", "latin1.txt"])
        .assert()
        .success()
        .stdout("📄 Contents of latin1.txt:\n\ncaf\u{fffd}\n\n")
        .stderr("");
}

#[test]
fn read_failure_is_reported_without_failing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("folder")).unwrap();

    let output = mycli(&dir).args(["read", "folder"]).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "unexpected stderr: {stderr:?}");
    assert!(stderr.starts_with("❌ Error reading file:"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .arg("explode")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .arg("greet")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn version_flag_prints_version() {
    let dir = TempDir::new().unwrap();
    mycli(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout("mycli 1.0.0\n");
}
