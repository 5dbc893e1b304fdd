#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clangfmt"))
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "int x;\n").unwrap();
}

/// Writes an executable stub standing in for clang-format. The stub records
/// its argument vector to `args.txt` and exits with the given code.
fn write_stub(root: &Path, exit_code: i32) -> String {
    let stub = root.join("stub-clang-format");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\nexit {}\n",
        root.join("args.txt").display(),
        exit_code
    );
    fs::write(&stub, script).unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
    stub.to_str().unwrap().to_string()
}

fn setup_repo(root: &Path) {
    fs::write(root.join(".clang-format"), "BasedOnStyle: LLVM\n").unwrap();
    touch(&root.join("src/a.cpp"));
}

#[test]
fn successful_run_reports_formatted_count() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    setup_repo(root);
    let stub = write_stub(root, 0);

    let output = bin()
        .current_dir(root)
        .args(["-c", &stub, "src"])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Formatted 1 file(s)."));

    let args = fs::read_to_string(root.join("args.txt")).unwrap();
    let mut lines = args.lines();
    assert_eq!(lines.next(), Some("-i"));
    assert!(lines.next().unwrap().ends_with("src/a.cpp"));
}

#[test]
fn no_in_place_switches_to_replacement_report() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    setup_repo(root);
    let stub = write_stub(root, 0);

    let output = bin()
        .current_dir(root)
        .args(["--no-in-place", "-c", &stub, "src"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let args = fs::read_to_string(root.join("args.txt")).unwrap();
    assert_eq!(args.lines().next(), Some("--output-replacements-xml"));
}

#[test]
fn formatter_exit_code_is_propagated() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    setup_repo(root);
    let stub = write_stub(root, 3);

    let output = bin()
        .current_dir(root)
        .args(["-c", &stub, "src"])
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Formatted"));
}

#[test]
fn dry_run_never_launches_the_formatter() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    setup_repo(root);
    let stub = write_stub(root, 0);

    let output = bin()
        .current_dir(root)
        .args(["--dry-run", "-c", &stub, "src"])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    assert!(!root.join("args.txt").exists());
}
