use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// `g3` binary running in `dir` with a clean g3 environment.
fn g3_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("g3").expect("Binary exists");
    cmd.current_dir(dir)
        .env_remove("G3_BUCKET")
        .env_remove("G3_REMOTE")
        .env_remove("RUST_LOG");
    cmd
}

fn inside_checkout(path: &Path) -> bool {
    path.ancestors()
        .take_while(|dir| dir.parent().is_some())
        .any(|dir| dir.join(".git").is_dir())
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let dir = tempdir().unwrap();
    g3_in(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let dir = tempdir().unwrap();
    g3_in(dir.path())
        .arg("pull")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn help_lists_both_subcommands() {
    let dir = tempdir().unwrap();
    g3_in(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init").and(predicate::str::contains("push")));
}

#[test]
fn missing_bucket_fails_both_commands_before_touching_disk() {
    for command in ["init", "push"] {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        g3_in(dir.path())
            .arg(command)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("please set $G3_BUCKET"));

        assert!(!dir.path().join(".g3").exists(), "{command} wrote .g3");
        assert!(
            !dir.path().join(".gitignore").exists(),
            "{command} wrote .gitignore"
        );
    }
}

#[test]
fn empty_bucket_counts_as_missing() {
    let dir = tempdir().unwrap();
    g3_in(dir.path())
        .arg("push")
        .env("G3_BUCKET", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("please set $G3_BUCKET"));
}

#[test]
fn push_in_unmanaged_directory_fails() {
    let dir = tempdir().unwrap();
    g3_in(dir.path())
        .arg("push")
        .env("G3_BUCKET", "mybucket")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "this is not a directory tracked with g3, giving up",
        ));
}

#[test]
fn init_outside_git_fails_without_writing_markers() {
    let dir = tempdir().unwrap();
    if inside_checkout(dir.path()) {
        eprintln!("temp dir lives inside a git checkout, skipping");
        return;
    }

    g3_in(dir.path())
        .arg("init")
        .env("G3_BUCKET", "mybucket")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "this is not a directory tracked in git, giving up",
        ));

    assert!(!dir.path().join(".g3").exists());
    assert!(!dir.path().join(".gitignore").exists());
}

#[test]
fn bucket_can_come_from_dotenv_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "G3_BUCKET=from-dotenv\n").unwrap();

    // Config resolves, so the failure is the missing sentinel rather than the bucket.
    g3_in(dir.path())
        .arg("push")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not a directory tracked with g3")
                .and(predicate::str::contains("G3_BUCKET").not()),
        );
}
