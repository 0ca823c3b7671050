use crate::common::{init_repository_dir, run_twig_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_tree_matches_the_committed_tree(init_repository_dir: TempDir) {
    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["write-tree"]));

    assert_eq!(stdout, "88484bd9e7919fa9b7dfeb008fb8f6c85743d171\n");
    assert!(
        init_repository_dir
            .path()
            .join(".git/objects/20/2bc192d34beb85d0301ec8c8940cd0252cc48a")
            .is_file()
    );
}
