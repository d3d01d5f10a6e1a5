use std::{path::Path, process::Command};

use crate::common::{team, write_sheet};

fn processor(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_scrim-roster"));
    command.current_dir(dir).env("RUST_LOG", "error");
    command
}

/// Test that a valid sheet produces both reports at the default paths
#[test]
fn test_writes_default_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_sheet(
        &dir.path().join("signups.csv"),
        &[team("TeamName", "Americas", "PC (Battle.net)", "Tag#1", 4000)]
    );

    let output = processor(dir.path())
        .arg("signups.csv")
        .output()
        .expect("Failed to execute processor");

    assert!(
        output.status.success(),
        "Process failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let pretty = std::fs::read_to_string(dir.path().join("pretty-output.txt")).unwrap();
    let importable = std::fs::read_to_string(dir.path().join("importable-output.txt")).unwrap();
    assert!(pretty.contains("========== NA - PC =========\nTeamName\t"));
    assert!(importable.contains("TeamName\tTeamName-captain\t4000\tNA - PC\nTag#1\tTeamName-disc\t4000\n"));
}

/// Test that explicit output paths are honoured
#[test]
fn test_writes_named_outputs() {
    let dir = tempfile::tempdir().unwrap();
    write_sheet(
        &dir.path().join("signups.csv"),
        &[team("Alpha", "Europe", "Playstation 4", "Tag#1", 2000)]
    );

    let output = processor(dir.path())
        .args(["signups.csv", "readable.txt", "import.tsv"])
        .output()
        .expect("Failed to execute processor");

    assert!(output.status.success());
    assert!(dir.path().join("readable.txt").exists());
    assert!(dir.path().join("import.tsv").exists());
    assert!(!dir.path().join("pretty-output.txt").exists());
}

/// Test that a duplicate tag aborts the run before any file is written
#[test]
fn test_duplicate_tag_exits_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_sheet(
        &dir.path().join("signups.csv"),
        &[
            team("Alpha", "Americas", "PC (Battle.net)", "Tag#1234", 1000),
            team("Beta", "Americas", "PC (Battle.net)", "Tag#1234", 2000),
        ]
    );

    let output = processor(dir.path())
        .arg("signups.csv")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate battle tag"), "Got: {}", stderr);
    assert!(!dir.path().join("pretty-output.txt").exists());
    assert!(!dir.path().join("importable-output.txt").exists());
}

/// Test that a non-numeric skill rating is fatal
#[test]
fn test_bad_skill_exits_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let row = team("Alpha", "Americas", "PC (Battle.net)", "Tag#1", 1000).player(2, "d2", "Tag#2", "lots");
    write_sheet(&dir.path().join("signups.csv"), &[row]);

    let output = processor(dir.path())
        .arg("signups.csv")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("M2"), "Got: {}", stderr);
    assert!(!dir.path().join("pretty-output.txt").exists());
}

/// Test that a sheet without teams is reported instead of crashing
#[test]
fn test_empty_sheet_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    write_sheet(&dir.path().join("signups.csv"), &[]);

    let output = processor(dir.path())
        .arg("signups.csv")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No teams found"));
    assert!(!dir.path().join("pretty-output.txt").exists());
}

/// Test that --help prints usage and writes nothing
#[test]
fn test_help_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let output = processor(dir.path())
        .arg("--help")
        .output()
        .expect("Failed to execute processor");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(!dir.path().join("pretty-output.txt").exists());
    assert!(!dir.path().join("importable-output.txt").exists());
}
