use crate::common::{
    commit_all, init_repository_dir, read_file, run_twig_command, stdout_of, write_file,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `feature` at the initial commit; master one commit ahead with a changed
/// file, an added file and a removed one
#[fixture]
fn diverged_repository(init_repository_dir: TempDir) -> TempDir {
    run_twig_command(init_repository_dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(&init_repository_dir, "1.txt", "uno");
    write_file(&init_repository_dir, "c/4.txt", "four");
    run_twig_command(init_repository_dir.path(), &["rm", "a/b/3.txt"])
        .assert()
        .success();
    commit_all(&init_repository_dir, "Second commit");

    init_repository_dir
}

#[rstest]
fn checkout_branch_successfully(diverged_repository: TempDir) {
    let dir = diverged_repository;

    let stdout = stdout_of(run_twig_command(dir.path(), &["checkout", "feature"]));

    assert_eq!(stdout, "switched to branch 'feature'\n");
    assert_eq!(read_file(&dir, "1.txt"), "one");
    assert_eq!(read_file(&dir, "a/b/3.txt"), "three");
    assert!(!dir.path().join("c/4.txt").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join(".git/HEAD")).unwrap(),
        "ref: refs/heads/feature\n"
    );
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["status"])),
        "On branch feature\n\nnothing to commit, working tree clean\n"
    );
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["ls-files"])),
        "1.txt\na/2.txt\na/b/3.txt\n"
    );
}

#[rstest]
fn checkout_back_restores_the_newer_tree(diverged_repository: TempDir) {
    let dir = diverged_repository;
    run_twig_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    run_twig_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    assert_eq!(read_file(&dir, "1.txt"), "uno");
    assert_eq!(read_file(&dir, "c/4.txt"), "four");
    assert!(!dir.path().join("a/b/3.txt").exists());
    assert_eq!(
        stdout_of(run_twig_command(dir.path(), &["status"])),
        "On branch master\n\nnothing to commit, working tree clean\n"
    );
}
