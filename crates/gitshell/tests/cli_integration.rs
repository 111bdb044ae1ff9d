//! End-to-end CLI integration tests.
//!
//! These tests verify the complete CLI workflow by:
//! 1. Creating a temporary git repository
//! 2. Running gitshell commands against it
//! 3. Checking output and exit status

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a command for the gitshell binary.
fn gitshell() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitshell"));
    cmd.env_remove("GITSHELL_DIR").env_remove("RUST_LOG");
    cmd
}

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git")
        .status;
    assert!(status.success(), "git {args:?} failed");
}

/// Creates a temporary git repository with one commit.
fn setup_git_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    git(dir, &["init"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);

    fs::write(dir.join("README.md"), "# Test\n").expect("failed to write README");
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "-m", "initial commit"]);

    temp_dir
}

#[test]
fn test_help() {
    gitshell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-branch"));
}

#[test]
fn test_status_on_clean_repo() {
    let temp_dir = setup_git_repo();

    gitshell()
        .arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("clean:     yes"))
        .stdout(predicate::str::contains("upstream:  no"));
}

#[test]
fn test_status_quiet_fails_on_dirty_repo() {
    let temp_dir = setup_git_repo();
    fs::write(temp_dir.path().join("README.md"), "# Changed\n").unwrap();

    gitshell()
        .args(["status", "--quiet"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("uncommitted changes"));
}

#[test]
fn test_dir_flag_selects_repository() {
    let temp_dir = setup_git_repo();
    let outside = TempDir::new().unwrap();

    gitshell()
        .arg("-C")
        .arg(temp_dir.path())
        .arg("default-branch")
        .current_dir(outside.path())
        .assert()
        .success()
        .stdout("main\n");
}

#[test]
fn test_config_file_working_dir() {
    let temp_dir = setup_git_repo();
    let outside = TempDir::new().unwrap();
    fs::write(
        outside.path().join("gitshell.toml"),
        format!(
            "[repository]\nworking_dir = {:?}\n",
            temp_dir.path().to_string_lossy()
        ),
    )
    .unwrap();

    gitshell()
        .arg("config")
        .arg("user.name")
        .current_dir(outside.path())
        .assert()
        .success()
        .stdout("Test User\n");
}

#[test]
fn test_add_and_commit() {
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();
    fs::write(dir.join("notes.txt"), "notes").unwrap();

    gitshell().arg("add").current_dir(dir).assert().success();

    gitshell()
        .args(["commit", "-m", "add \"notes\""])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{40}\n$").unwrap());

    let output = StdCommand::new("git")
        .args(["log", "-1", "--format=%s"])
        .current_dir(dir)
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "add \"notes\"");
}

#[test]
fn test_tag_creates_tag() {
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();

    gitshell()
        .args(["tag", "v1.0.0", "-m", "First release"])
        .current_dir(dir)
        .assert()
        .success();

    let output = StdCommand::new("git")
        .args(["tag", "--list"])
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("v1.0.0"));
}

#[test]
fn test_failed_command_reports_invocation() {
    let temp_dir = setup_git_repo();

    gitshell()
        .args(["config", "gitshell.missing"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("git config --get gitshell.missing"));
}

#[test]
fn test_push_without_remote_fails() {
    let temp_dir = setup_git_repo();

    gitshell()
        .arg("push")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("git push origin"));
}
