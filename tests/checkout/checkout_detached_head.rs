use crate::common::{
    commit_all, init_repository_dir, read_file, rev_parse, run_twig_command, stdout_of, write_file,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_commit_detaches_head(init_repository_dir: TempDir) {
    let first = rev_parse(init_repository_dir.path(), "HEAD");
    write_file(&init_repository_dir, "1.txt", "uno");
    commit_all(&init_repository_dir, "Second commit");

    let stdout = stdout_of(run_twig_command(
        init_repository_dir.path(),
        &["checkout", "HEAD^"],
    ));

    assert_eq!(stdout, format!("HEAD is now at {}\n", &first[..7]));
    assert_eq!(read_file(&init_repository_dir, "1.txt"), "one");
    assert_eq!(
        std::fs::read_to_string(init_repository_dir.path().join(".git/HEAD")).unwrap(),
        format!("{first}\n")
    );
    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["branch"]));
    assert_eq!(stdout, "  master\n");
}

#[rstest]
fn checkout_unknown_target_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["checkout", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown revision 'nope'"));
}
