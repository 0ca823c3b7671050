use crate::common::{commit_all, init_repository_dir, rev_parse, run_twig_command, stdout_of, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// Three commits on master, oldest first
#[fixture]
fn linear_history(init_repository_dir: TempDir) -> (TempDir, Vec<String>) {
    let first = rev_parse(init_repository_dir.path(), "HEAD");
    write_file(&init_repository_dir, "1.txt", "second");
    let second = commit_all(&init_repository_dir, "Second commit");
    write_file(&init_repository_dir, "1.txt", "third");
    let third = commit_all(&init_repository_dir, "Third commit");

    (init_repository_dir, vec![first, second, third])
}

fn short(oid: &str) -> &str {
    &oid[..7]
}

#[rstest]
fn show_multiple_commits_newest_first(linear_history: (TempDir, Vec<String>)) {
    let (dir, commits) = linear_history;

    let stdout = stdout_of(run_twig_command(dir.path(), &["log", "--oneline"]));

    assert_eq!(
        stdout,
        format!(
            "{} Third commit\n{} Second commit\n{} Initial commit\n",
            short(&commits[2]),
            short(&commits[1]),
            short(&commits[0])
        )
    );
}

#[rstest]
fn max_count_limits_the_walk(linear_history: (TempDir, Vec<String>)) {
    let (dir, commits) = linear_history;

    let stdout = stdout_of(run_twig_command(
        dir.path(),
        &["log", "--oneline", "-n", "2"],
    ));

    assert_eq!(
        stdout,
        format!(
            "{} Third commit\n{} Second commit\n",
            short(&commits[2]),
            short(&commits[1])
        )
    );
}

#[rstest]
fn show_log_from_middle_of_history(linear_history: (TempDir, Vec<String>)) {
    let (dir, commits) = linear_history;

    let stdout = stdout_of(run_twig_command(dir.path(), &["log", "--oneline", "HEAD^"]));

    assert_eq!(
        stdout,
        format!(
            "{} Second commit\n{} Initial commit\n",
            short(&commits[1]),
            short(&commits[0])
        )
    );
}

#[rstest]
fn show_log_from_abbreviated_id(linear_history: (TempDir, Vec<String>)) {
    let (dir, commits) = linear_history;

    let stdout = stdout_of(run_twig_command(
        dir.path(),
        &["log", "--oneline", short(&commits[0])],
    ));

    assert_eq!(stdout, format!("{} Initial commit\n", short(&commits[0])));
}
