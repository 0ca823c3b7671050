use crate::common::{init_repository_dir, run_twig_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files(init_repository_dir: TempDir) {
    std::fs::remove_file(init_repository_dir.path().join("a/2.txt")).unwrap();

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));

    assert_eq!(
        stdout,
        "On branch master\n\nChanges not staged for commit:\n  deleted:  a/2.txt\n\n"
    );
}

#[rstest]
fn report_files_in_deleted_directories(init_repository_dir: TempDir) {
    std::fs::remove_dir_all(init_repository_dir.path().join("a")).unwrap();

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));

    assert_eq!(
        stdout,
        "On branch master\n\nChanges not staged for commit:\n  deleted:  a/2.txt\n  deleted:  a/b/3.txt\n\n"
    );
}

#[rstest]
fn modified_files_are_listed_before_deleted_ones(init_repository_dir: TempDir) {
    std::fs::remove_file(init_repository_dir.path().join("1.txt")).unwrap();
    crate::common::write_file(&init_repository_dir, "a/b/3.txt", "changed");

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));

    assert_eq!(
        stdout,
        "On branch master\n\nChanges not staged for commit:\n  modified: a/b/3.txt\n  deleted:  1.txt\n\n"
    );
}
