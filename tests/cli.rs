use std::io::Write;
use std::process::{Command, Output};

fn resolute(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resolute"))
        .args(args)
        .output()
        .expect("failed to run the binary")
}

fn write_formula(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn unsatisfiable() {
    let file = write_formula("p r\n!p r\n!r\n");
    let output = resolute(&[file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Formula is UNSATISFIABLE"));
}

#[test]
fn satisfiable() {
    let file = write_formula("p\n!p q\np r\n");
    let output = resolute(&[file.path().to_str().unwrap(), "--unit-propagation"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unit propagation fixed 2 symbols and removed 1 clauses\n"));
    assert!(stdout.contains("Formula is SATISFIABLE"));
}

#[test]
fn propagation_conflict_is_printed() {
    let file = write_formula("p\n!p q\n!q\n");
    let output = resolute(&[file.path().to_str().unwrap(), "--unit-propagation"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(", finding a conflict"));
    assert!(stdout.contains("Formula is UNSATISFIABLE"));
}

#[test]
fn clause_limit_warns() {
    let file = write_formula("p r\n!p r\n!r s\n");
    let output = resolute(&[file.path().to_str().unwrap(), "--clause-limit", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Formula is SATISFIABLE"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Warning"));
}

#[test]
fn missing_argument() {
    assert_eq!(resolute(&[]).status.code(), Some(1));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.cnf");
    let output = resolute(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn bad_symbol() {
    let file = write_formula("p q\n1x y\n");
    let output = resolute(&[file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}
