use crate::common::{init_repository_dir, repository_dir, run_twig_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const CLEAN: &str = "On branch master\n\nnothing to commit, working tree clean\n";

#[rstest]
fn empty_repository_is_clean(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let stdout = stdout_of(run_twig_command(repository_dir.path(), &["status"]));

    assert_eq!(stdout, CLEAN);
}

#[rstest]
fn print_nothing_when_no_files_are_changed(init_repository_dir: TempDir) {
    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));

    assert_eq!(stdout, CLEAN);
}

#[rstest]
fn rewriting_identical_content_is_not_a_change(init_repository_dir: TempDir) {
    std::thread::sleep(std::time::Duration::from_millis(20));
    crate::common::write_file(&init_repository_dir, "1.txt", "one");

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));

    assert_eq!(stdout, CLEAN);
}

#[rstest]
fn empty_directories_are_not_listed(init_repository_dir: TempDir) {
    std::fs::create_dir_all(init_repository_dir.path().join("outer/inner")).unwrap();

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["status"]));

    assert_eq!(stdout, CLEAN);
}
