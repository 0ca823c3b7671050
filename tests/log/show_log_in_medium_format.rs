use crate::common::{init_repository_dir, rev_parse, run_twig_command, stdout_of, twig_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_single_commit_in_medium_format(init_repository_dir: TempDir) {
    let head = rev_parse(init_repository_dir.path(), "HEAD");

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["log"]));

    assert_eq!(
        stdout,
        format!(
            "commit {head}\n\
             Author: fake_user <fake_email@email.com>\n\
             Date:   Sun Jan 1 12:00:00 2023 +0000\n\
             \n\
             \x20   Initial commit\n\
             \n"
        )
    );
}

#[rstest]
fn multi_line_messages_are_indented(init_repository_dir: TempDir) {
    twig_commit(init_repository_dir.path(), "Subject line\n\nBody text")
        .assert()
        .success();

    let stdout = stdout_of(run_twig_command(
        init_repository_dir.path(),
        &["log", "-n", "1"],
    ));

    assert!(
        stdout.ends_with("\n    Subject line\n    \n    Body text\n\n"),
        "unexpected log output: {stdout}"
    );
}
