use crate::common::{init_repository_dir, repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "your current branch does not have any commits yet",
        ));
}

#[rstest]
fn show_log_from_nonexistent_branch(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["log", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown revision 'nope'"));
}
