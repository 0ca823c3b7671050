use crate::common::{
    commit_all, init_repository_dir, repository_dir, run_twig_command, stdout_of, write_file,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sha1::{Digest, Sha1};
use std::collections::HashMap;

fn blob_id(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("blob {}\0", content.len()));
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Two payloads whose blob ids share the first four hex characters
fn colliding_contents() -> (String, String, String) {
    let mut seen = HashMap::new();
    for i in 0.. {
        let content = format!("payload {i}");
        let prefix = blob_id(&content)[..4].to_string();
        if let Some(previous) = seen.insert(prefix.clone(), content.clone()) {
            return (previous, content, prefix);
        }
    }
    unreachable!()
}

#[rstest]
fn resolve_head_branch_and_abbreviations(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "1.txt", "second");
    let head = commit_all(&init_repository_dir, "Second commit");

    let resolve = |revision: &str| {
        stdout_of(run_twig_command(
            init_repository_dir.path(),
            &["rev-parse", revision],
        ))
    };

    assert_eq!(resolve("HEAD"), format!("{head}\n"));
    assert_eq!(resolve("master"), format!("{head}\n"));
    assert_eq!(resolve(&head[..7]), format!("{head}\n"));
    assert_ne!(resolve("HEAD^"), format!("{head}\n"));
    assert_eq!(resolve("HEAD^"), resolve("master~1"));
}

#[rstest]
fn ambiguous_prefix_is_reported(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let (first, second, prefix) = colliding_contents();
    write_file(&repository_dir, "first.txt", &first);
    write_file(&repository_dir, "second.txt", &second);
    for file in ["first.txt", "second.txt"] {
        run_twig_command(repository_dir.path(), &["hash-object", "-w", file])
            .assert()
            .success();
    }

    run_twig_command(repository_dir.path(), &["rev-parse", &prefix])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous"));

    let first_id = blob_id(&first);
    let stdout = stdout_of(run_twig_command(
        repository_dir.path(),
        &["rev-parse", &first_id[..12]],
    ));
    assert_eq!(stdout, format!("{first_id}\n"));
}

#[rstest]
#[case::unknown_branch("nope")]
#[case::past_the_root("HEAD~5")]
#[case::too_short_prefix("abc")]
fn unresolvable_revisions_fail(init_repository_dir: TempDir, #[case] revision: &str) {
    run_twig_command(init_repository_dir.path(), &["rev-parse", revision])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "));
}
