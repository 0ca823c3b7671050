use crate::common::{init_repository_dir, run_twig_command, stdout_of, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restore_staged_modification_back_to_head(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "1.txt", "changed");
    run_twig_command(init_repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_twig_command(init_repository_dir.path(), &["restore", "--staged", "1.txt"])
        .assert()
        .success();

    let status = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));
    assert_eq!(
        status,
        "On branch master\n\nChanges not staged for commit:\n  modified: 1.txt\n\n"
    );
}

#[rstest]
fn restore_staged_new_file_unstages_it(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "new.txt", "fresh");
    run_twig_command(init_repository_dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    run_twig_command(init_repository_dir.path(), &["restore", "--staged", "new.txt"])
        .assert()
        .success();

    let status = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));
    assert_eq!(status, "On branch master\n\nUntracked files:\n  new.txt\n\n");
}

#[rstest]
fn restore_staged_brings_back_a_removed_entry(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["rm", "--cached", "a/2.txt"])
        .assert()
        .success();

    run_twig_command(init_repository_dir.path(), &["restore", "--staged", "a"])
        .assert()
        .success();

    let status = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));
    assert_eq!(status, "On branch master\n\nnothing to commit, working tree clean\n");
}

#[rstest]
fn restore_staged_unknown_path_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["restore", "--staged", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "pathspec did not match any staged entries",
        ));
}
