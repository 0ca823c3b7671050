use crate::common::{commit_all, init_repository_dir, rev_parse, run_twig_command, stdout_of, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_branches_marks_the_current_one(init_repository_dir: TempDir) {
    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["branch"]));

    assert_eq!(stdout, "* master\n");
}

#[rstest]
fn create_branch_at_head(init_repository_dir: TempDir) {
    let head = rev_parse(init_repository_dir.path(), "HEAD");

    let stdout = stdout_of(run_twig_command(
        init_repository_dir.path(),
        &["branch", "feature"],
    ));

    assert_eq!(stdout, format!("branch 'feature' created at {}\n", &head[..7]));
    assert_eq!(rev_parse(init_repository_dir.path(), "feature"), head);
    assert_eq!(
        stdout_of(run_twig_command(init_repository_dir.path(), &["branch"])),
        "  feature\n* master\n"
    );
}

#[rstest]
#[case::parent("HEAD^")]
#[case::ancestor("master~1")]
fn create_branch_from_revision(init_repository_dir: TempDir, #[case] start_point: &str) {
    let first = rev_parse(init_repository_dir.path(), "HEAD");
    write_file(&init_repository_dir, "1.txt", "second");
    commit_all(&init_repository_dir, "Second commit");

    run_twig_command(
        init_repository_dir.path(),
        &["branch", "topic/older", start_point],
    )
    .assert()
    .success();

    assert_eq!(rev_parse(init_repository_dir.path(), "topic/older"), first);
    assert!(
        init_repository_dir
            .path()
            .join(".git/refs/heads/topic/older")
            .is_file()
    );
}
