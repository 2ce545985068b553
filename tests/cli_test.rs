mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

use fpo_onboard::wizard::SubmissionPayload;

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fpo-onboard"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute fpo-onboard")
}

fn write_record(dir: &Path, payload: &SubmissionPayload) -> String {
    let path = dir.join("employee.json");
    fs::write(&path, serde_json::to_string_pretty(payload).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help_lists_commands() {
    let dir = tempdir().unwrap();
    let output = run(&["--help"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for command in ["init", "register", "validate", "submit"] {
        assert!(stdout.contains(command), "help should mention {}", command);
    }
}

#[test]
fn test_init_writes_template_once() {
    let dir = tempdir().unwrap();

    let output = run(&["init"], dir.path());
    assert!(output.status.success());
    let written = fs::read_to_string(dir.path().join("onboard.yaml")).unwrap();
    assert!(written.contains("kind: outbox"));

    // Second run warns but leaves the file alone
    fs::write(dir.path().join("onboard.yaml"), "presentation: embedded\n").unwrap();
    let output = run(&["init"], dir.path());
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("already exists"));
    assert_eq!(
        fs::read_to_string(dir.path().join("onboard.yaml")).unwrap(),
        "presentation: embedded\n"
    );

    let output = run(&["init", "--force"], dir.path());
    assert!(output.status.success());
    assert!(fs::read_to_string(dir.path().join("onboard.yaml"))
        .unwrap()
        .contains("kind: outbox"));
}

#[test]
fn test_validate_complete_record() {
    let dir = tempdir().unwrap();
    let record = write_record(dir.path(), &SubmissionPayload::from(&common::complete_record()));

    let output = run(&["validate", &record], dir.path());
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("all 8 steps pass"));
}

#[test]
fn test_validate_reports_failures_as_json() {
    let dir = tempdir().unwrap();
    let mut payload = SubmissionPayload::from(&common::complete_record());
    payload.contact_number = "123456789".to_string();
    payload.email = "a.com".to_string();
    let record = write_record(dir.path(), &payload);

    let output = run(&["validate", &record, "--format", "json"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report["contact"]["contactNumber"],
        "Contact number must be exactly 10 digits"
    );
    assert_eq!(report["contact"]["email"], "Enter a valid email address");
    assert!(report.get("personal").is_none());
}

#[test]
fn test_validate_text_lists_fields() {
    let dir = tempdir().unwrap();
    let mut payload = SubmissionPayload::from(&common::complete_record());
    payload.first_name.clear();
    let record = write_record(dir.path(), &payload);

    let output = run(&["validate", &record], dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Personal Details"));
    assert!(stdout.contains("firstName"));
    assert!(stdout.contains("First name is required"));
}

#[test]
fn test_submit_to_outbox_with_local_photo() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("onboard.yaml"),
        "submission:\n  kind: outbox\n  dir: sent\n",
    )
    .unwrap();
    fs::write(dir.path().join("face.jpg"), [0xff, 0xd8, 0xff]).unwrap();

    let mut payload = SubmissionPayload::from(&common::complete_record());
    payload.photo_file_name = Some("face.jpg".to_string());
    let record = write_record(dir.path(), &payload);

    let output = run(&["submit", &record], dir.path());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(output.status.success(), "submit failed: {}", stderr);
    assert!(stderr.contains("Registration submitted (outbox)"));

    let entries: Vec<_> = fs::read_dir(dir.path().join("sent"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);

    let sent: SubmissionPayload =
        serde_json::from_str(&fs::read_to_string(entries[0].join("payload.json")).unwrap())
            .unwrap();
    assert_eq!(sent.first_name, "Lakshmi");
    assert_eq!(sent.photo_file_name.as_deref(), Some("face.jpg"));
    assert_eq!(
        fs::read(entries[0].join("photo-face.jpg")).unwrap(),
        vec![0xff, 0xd8, 0xff]
    );
}

#[test]
fn test_submit_incomplete_record_fails() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("onboard.yaml"),
        "submission:\n  kind: outbox\n  dir: sent\n",
    )
    .unwrap();

    let mut payload = SubmissionPayload::from(&common::complete_record());
    payload.role = None;
    let record = write_record(dir.path(), &payload);

    let output = run(&["submit", &record], dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("incomplete"));
    assert!(!dir.path().join("sent").exists());
}

#[cfg(not(feature = "tui"))]
#[test]
fn test_register_without_tui_feature_fails() {
    let dir = tempdir().unwrap();
    let output = run(&["register", "--embedded"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("requires the 'tui' feature"));
}
