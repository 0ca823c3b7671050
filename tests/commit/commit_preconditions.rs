use crate::common::{
    commit_all, init_repository_dir, repository_dir, run_twig_command, twig_commit, write_file,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_with_empty_index_fails(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    twig_commit(repository_dir.path(), "Nothing staged")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot commit: index is empty"));
}

#[rstest]
fn commit_without_message_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("commit message is required"));
}

#[rstest]
fn blank_message_is_rejected(init_repository_dir: TempDir) {
    twig_commit(init_repository_dir.path(), "   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("commit message is required"));
}

#[rstest]
fn trailing_newlines_are_dropped_from_the_message(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "4.txt", "four");
    commit_all(&init_repository_dir, "Add four\n\n");

    run_twig_command(init_repository_dir.path(), &["cat-file", "-p", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n\nAdd four\n"));
}
