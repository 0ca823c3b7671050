use crate::common::{init_repository_dir, run_twig_command, stdout_of, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_nothing_when_clean(init_repository_dir: TempDir) {
    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["diff"]));

    assert_eq!(stdout, "");
}

#[rstest]
fn untracked_and_deleted_files_are_not_diffed(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "new.txt", "untracked");
    std::fs::remove_file(init_repository_dir.path().join("1.txt")).unwrap();

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["diff"]));

    assert_eq!(stdout, "");
}

#[rstest]
fn staged_changes_are_not_diffed(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "1.txt", "staged");
    run_twig_command(init_repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["diff"]));

    assert_eq!(stdout, "");
}
