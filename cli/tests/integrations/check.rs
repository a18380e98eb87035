use crate::workspace;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cli_check_valid_file() {
    let (temp_dir, dictionary) = workspace();
    let file = temp_dir.path().join("good.ieml");
    fs::write(
        &file,
        "# words\n[([wa.])]\n\n[([A:])]<a literal>\n{/[([wa.])]//[([wo.])]/}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary").arg(&dictionary).arg("check").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Checked 3 expression(s) in 1 file(s), 0 failed",
        ));
}

#[test]
fn test_cli_check_reports_failing_lines() {
    let (temp_dir, dictionary) = workspace();
    let file = temp_dir.path().join("bad.ieml");
    fs::write(&file, "[([wa.])]\n[([nope.])]\n[([A:])]*\n").unwrap();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary").arg(&dictionary).arg("check").arg(&file);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("bad.ieml:2"))
        .stdout(predicate::str::contains("bad.ieml:3"))
        .stdout(predicate::str::contains("2 failed"))
        .stderr(predicate::str::contains("unknown term 'nope.'"))
        .stderr(predicate::str::contains("2 expression(s) failed validation"));
}

#[test]
fn test_cli_check_walks_directories() {
    let (temp_dir, dictionary) = workspace();
    let nested = temp_dir.path().join("corpus").join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp_dir.path().join("corpus").join("a.ieml"), "[([wa.])]\n").unwrap();
    fs::write(nested.join("b.ieml"), "[([wo.])]\n[([wu.])]\n").unwrap();
    fs::write(nested.join("notes.txt"), "not an expression\n").unwrap();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("check")
        .arg(temp_dir.path().join("corpus"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Checked 3 expression(s) in 2 file(s), 0 failed",
        ));
}
