use crate::common::{init_repository_dir, run_twig_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

const ORIGIN_URL: &str = "https://example.com/origin.git";

#[rstest]
fn list_is_empty_without_remotes(init_repository_dir: TempDir) {
    assert_eq!(stdout_of(run_twig_command(init_repository_dir.path(), &["remote"])), "");
}

#[rstest]
fn bare_remote_lists_names(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["remote", "add", "origin", ORIGIN_URL])
        .assert()
        .success();

    assert_eq!(stdout_of(run_twig_command(dir, &["remote"])), "origin\n");
}

#[rstest]
fn add_list_and_get_url(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["remote", "add", "origin", ORIGIN_URL])
        .assert()
        .success();
    run_twig_command(dir, &["remote", "add", "backup", "/srv/backup.git"])
        .assert()
        .success();

    assert_eq!(
        stdout_of(run_twig_command(dir, &["remote", "list"])),
        "backup\norigin\n"
    );
    assert_eq!(
        stdout_of(run_twig_command(dir, &["remote", "list", "-v"])),
        format!(
            "backup\t/srv/backup.git (fetch)\nbackup\t/srv/backup.git (push)\n\
             origin\t{ORIGIN_URL} (fetch)\norigin\t{ORIGIN_URL} (push)\n"
        )
    );
    assert_eq!(
        stdout_of(run_twig_command(dir, &["remote", "get-url", "origin"])),
        format!("{ORIGIN_URL}\n")
    );
}

#[rstest]
fn remove_remote(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["remote", "add", "origin", ORIGIN_URL])
        .assert()
        .success();

    run_twig_command(dir, &["remote", "remove", "origin"])
        .assert()
        .success();

    assert_eq!(stdout_of(run_twig_command(dir, &["remote"])), "");
    run_twig_command(dir, &["remote", "get-url", "origin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote 'origin' does not exist"));
}

#[rstest]
fn duplicate_remote_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["remote", "add", "origin", ORIGIN_URL])
        .assert()
        .success();

    run_twig_command(dir, &["remote", "add", "origin", "elsewhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote 'origin' already exists"));
}
