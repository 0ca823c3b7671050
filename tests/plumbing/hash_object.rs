use crate::common::{repository_dir, run_twig_command, stdout_of, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::{fixture, rstest};

const HELLO_BLOB_ID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

#[fixture]
fn hello_repository(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(&repository_dir, "hello.txt", "hello\n");

    repository_dir
}

fn object_path(dir: &TempDir, oid: &str) -> std::path::PathBuf {
    dir.path().join(".git/objects").join(&oid[..2]).join(&oid[2..])
}

#[rstest]
fn hash_without_write_leaves_the_store_untouched(hello_repository: TempDir) {
    let stdout = stdout_of(run_twig_command(
        hello_repository.path(),
        &["hash-object", "hello.txt"],
    ));

    assert_eq!(stdout, format!("{HELLO_BLOB_ID}\n"));
    assert!(!object_path(&hello_repository, HELLO_BLOB_ID).exists());
}

#[rstest]
fn write_blob_object_successfully(hello_repository: TempDir) {
    let stdout = stdout_of(run_twig_command(
        hello_repository.path(),
        &["hash-object", "-w", "hello.txt"],
    ));

    assert_eq!(stdout, format!("{HELLO_BLOB_ID}\n"));
    assert!(object_path(&hello_repository, HELLO_BLOB_ID).is_file());
}

#[rstest]
fn hashing_a_missing_file_fails(hello_repository: TempDir) {
    run_twig_command(hello_repository.path(), &["hash-object", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found: missing.txt"));
}

#[rstest]
fn unknown_object_kind_is_rejected(hello_repository: TempDir) {
    run_twig_command(
        hello_repository.path(),
        &["hash-object", "-t", "tag", "hello.txt"],
    )
    .assert()
    .failure();
}
