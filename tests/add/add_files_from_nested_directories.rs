use crate::common::{random_content, repository_dir, run_twig_command, stdout_of, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(&repository_dir, "top.txt", &random_content());
    write_file(&repository_dir, "src/lib.rs", &random_content());
    write_file(&repository_dir, "src/nested/mod.rs", &random_content());

    run_twig_command(repository_dir.path(), &["add", "src"])
        .assert()
        .success();

    let stdout = stdout_of(run_twig_command(repository_dir.path(), &["ls-files"]));
    assert_eq!(stdout, "src/lib.rs\nsrc/nested/mod.rs\n");
}

#[rstest]
fn add_resolves_paths_against_the_working_directory(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(&repository_dir, "top.txt", &random_content());
    write_file(&repository_dir, "src/lib.rs", &random_content());

    run_twig_command(&repository_dir.path().join("src"), &["add", "lib.rs", "../top.txt"])
        .assert()
        .success();

    let stdout = stdout_of(run_twig_command(repository_dir.path(), &["ls-files"]));
    assert_eq!(stdout, "src/lib.rs\ntop.txt\n");
}

#[rstest]
fn re_adding_unchanged_files_keeps_the_index(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(&repository_dir, "a.txt", "stable");

    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    let first = stdout_of(run_twig_command(repository_dir.path(), &["ls-files", "-s"]));
    run_twig_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    let second = stdout_of(run_twig_command(repository_dir.path(), &["ls-files", "-s"]));

    assert_eq!(first, second);
}
