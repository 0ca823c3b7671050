use crate::common::{init_repository_dir, read_file, run_twig_command, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

const DIRTY: &str = "cannot checkout with local changes";

#[rstest]
fn checkout_with_modified_file_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();
    write_file(&init_repository_dir, "1.txt", "local edit");

    run_twig_command(init_repository_dir.path(), &["checkout", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(DIRTY));

    assert_eq!(read_file(&init_repository_dir, "1.txt"), "local edit");
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join(".git/HEAD")).unwrap(),
        "ref: refs/heads/master\n"
    );
}

#[rstest]
fn checkout_with_untracked_file_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();
    write_file(&init_repository_dir, "scratch.txt", "notes");

    run_twig_command(init_repository_dir.path(), &["checkout", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(DIRTY));
}
