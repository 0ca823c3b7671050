use crate::common::{
    commit_all, init_repository_dir, read_file, rev_parse, run_twig_command, stdout_of, write_file,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// Second commit changing `1.txt`; returns the first commit's id
#[fixture]
fn two_commits(init_repository_dir: TempDir) -> (TempDir, String) {
    let first = rev_parse(init_repository_dir.path(), "HEAD");
    write_file(&init_repository_dir, "1.txt", "uno");
    commit_all(&init_repository_dir, "Second commit");

    (init_repository_dir, first)
}

#[rstest]
fn soft_reset_keeps_the_index(two_commits: (TempDir, String)) {
    let (dir, first) = two_commits;

    let stdout = stdout_of(run_twig_command(dir.path(), &["reset", "--soft", "HEAD^"]));

    assert_eq!(stdout, format!("reset master to {} (soft)\n", &first[..7]));
    assert_eq!(rev_parse(dir.path(), "master"), first);
    assert_eq!(read_file(&dir, "1.txt"), "uno");
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["status"])),
        "On branch master\n\nChanges to be committed:\n  staged:   1.txt\n\n"
    );
}

#[rstest]
fn mixed_reset_rewrites_the_index(two_commits: (TempDir, String)) {
    let (dir, first) = two_commits;

    let stdout = stdout_of(run_twig_command(dir.path(), &["reset", &first[..7]]));

    assert_eq!(stdout, format!("reset master to {} (mixed)\n", &first[..7]));
    assert_eq!(read_file(&dir, "1.txt"), "uno");
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["status"])),
        "On branch master\n\nChanges not staged for commit:\n  modified: 1.txt\n\n"
    );
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["ls-files", "-s"])).lines().next(),
        Some("100644 43dd47ea691c90a5fa7827892c70241913351963 0\t1.txt")
    );
}

#[rstest]
fn mixed_reset_replaces_a_corrupt_index(two_commits: (TempDir, String)) {
    let (dir, first) = two_commits;
    let index_path = dir.path().join(".git/index");
    let mut data = std::fs::read(&index_path).expect("Failed to read index");
    data[20] ^= 0xff;
    std::fs::write(&index_path, data).expect("Failed to write index");

    run_twig_command(dir.path(), &["reset", &first]).assert().success();

    assert_eq!(rev_parse(dir.path(), "master"), first);
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["ls-files", "-s"])).lines().next(),
        Some("100644 43dd47ea691c90a5fa7827892c70241913351963 0\t1.txt")
    );
}

#[rstest]
fn reset_to_a_non_commit_fails(two_commits: (TempDir, String)) {
    let (dir, _) = two_commits;
    let head_before = rev_parse(dir.path(), "HEAD");

    run_twig_command(
        dir.path(),
        &["reset", "43dd47ea691c90a5fa7827892c70241913351963"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not resolve to a commit"));

    assert_eq!(rev_parse(dir.path(), "HEAD"), head_before);
}

#[rstest]
fn soft_and_mixed_flags_conflict(two_commits: (TempDir, String)) {
    let (dir, _) = two_commits;

    run_twig_command(dir.path(), &["reset", "--soft", "--mixed", "HEAD^"])
        .assert()
        .failure();
}
