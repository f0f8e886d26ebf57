//! Runs the `cohens-h` binary against datasets on disk

use std::path::Path;
use std::process::{Command, Output};

const DATASET: &str = "\
,X,Y,Z
Proportion,0.30,0.70,0.31
Sample Size,80,90,
";

fn cohens_h(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cohens-h"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_writes_default_output_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.csv"), DATASET).unwrap();

    let out = cohens_h(dir.path(), &["data.csv"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let report = std::fs::read_to_string(dir.path().join("effect_size.csv")).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some("Group A,Group A - Proportion,Group B,Group B - Proportion,Effect Strength,Cohen's h,Summary")
    );
    assert_eq!(
        lines.next(),
        Some("Y,0.70,X,0.30,Large,0.82,Y had a meaningfully higher score than X (Cohen's h = 0.82).")
    );
    assert_eq!(report.lines().count(), 4);
    assert!(report.contains("There was no meaningful difference in score between Z and X."));
}

#[test]
fn test_missing_sample_size_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.csv"), DATASET).unwrap();

    let out = cohens_h(dir.path(), &["data.csv", "--ci"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error #4"), "{stderr}");
    assert!(stderr.contains('Z'));
    assert!(!dir.path().join("effect_size.csv").exists());
}

#[test]
fn test_stdout_target() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.csv"), ",A,B\np,0.5,0.5\nn,10,10\n").unwrap();

    let out = cohens_h(dir.path(), &["data.csv", "--ci", "--stdout"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Group A,Group A - Proportion,Group A - Sample Size,"));
    assert!(stdout.contains("A,0.5,10,B,0.5,10,Trivial,0.00,"));
    assert!(!dir.path().join("effect_size.csv").exists());
}

#[test]
fn test_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let out = cohens_h(dir.path(), &["missing.csv"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error #1"));
}
