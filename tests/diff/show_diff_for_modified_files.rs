use crate::common::{
    init_repository_dir, repository_dir, run_twig_command, stdout_of, twig_commit, write_file,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
fn diff_hunks_output() -> String {
    "@@ -1,9 +1,6 @@\n fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n@@ -13,7 +10,9 @@\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n"
    .to_string()
}

#[rstest]
fn show_diff_for_file_with_modified_content(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "1.txt", "modified one");

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["diff"]));

    assert_eq!(
        stdout,
        "diff --git a/1.txt b/1.txt\n\
         index 43dd47e..ba9bbba 100644\n\
         --- a/1.txt\n\
         +++ b/1.txt\n\
         @@ -1 +1 @@\n\
         -one\n\
         +modified one\n"
    );
}

#[rstest]
fn show_separate_hunks_for_distant_changes(
    repository_dir: TempDir,
    file_a: String,
    file_b: String,
    diff_hunks_output: String,
) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(&repository_dir, "main.rs", &file_a);
    run_twig_command(repository_dir.path(), &["add", "main.rs"])
        .assert()
        .success();
    twig_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();
    write_file(&repository_dir, "main.rs", &file_b);

    let stdout = stdout_of(run_twig_command(repository_dir.path(), &["diff"]));

    assert_eq!(
        stdout,
        format!(
            "diff --git a/main.rs b/main.rs\n\
             index 6143f6e..e0b1c3b 100644\n\
             --- a/main.rs\n\
             +++ b/main.rs\n\
             {diff_hunks_output}"
        )
    );
}

#[rstest]
fn show_diffs_in_path_order(init_repository_dir: TempDir) {
    write_file(&init_repository_dir, "a/2.txt", "two\nand more");
    write_file(&init_repository_dir, "1.txt", "");

    let stdout = stdout_of(run_twig_command(init_repository_dir.path(), &["diff"]));

    assert_eq!(
        stdout,
        "diff --git a/1.txt b/1.txt\n\
         index 43dd47e..e69de29 100644\n\
         --- a/1.txt\n\
         +++ b/1.txt\n\
         @@ -1 +0,0 @@\n\
         -one\n\
         diff --git a/a/2.txt b/a/2.txt\n\
         index 64c5e58..f2fe43e 100644\n\
         --- a/a/2.txt\n\
         +++ b/a/2.txt\n\
         @@ -1 +1,2 @@\n\
         \x20two\n\
         +and more\n"
    );
}
