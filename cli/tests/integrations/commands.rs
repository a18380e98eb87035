use crate::workspace;
use assert_cmd::Command;
use predicates::prelude::*;

const SENTENCE: &str = "[([([A:])]*[([S:])]*[([E:])])+([([A:])]*[([B:])]*[([E:])])+([([B:])]*[([T:])]*[([E:])])]";

#[test]
fn test_cli_parse_word() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("parse")
        .arg("[([wa.])]<to act>");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("word (rank 2)"))
        .stdout(predicate::str::contains("canonical: [([wa.])]"))
        .stdout(predicate::str::contains("written:   [([wa.])]<to act>"))
        .stdout(predicate::str::contains("verb"));
}

#[test]
fn test_cli_parse_sorts_clauses() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("parse").arg(SENTENCE).env("IEML_DICTIONARY", &dictionary);

    cmd.assert().success().stdout(predicate::str::contains(
        "canonical: [([([A:])]*[([B:])]*[([E:])])+([([A:])]*[([S:])]*[([E:])])+([([B:])]*[([T:])]*[([E:])])]",
    ));
}

#[test]
fn test_cli_parse_json() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("parse")
        .arg("--json")
        .arg(SENTENCE);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "sentence""#))
        .stdout(predicate::str::contains(r#""root": "[([A:])]""#));
}

#[test]
fn test_cli_parse_unknown_term() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("parse")
        .arg("[([zz.])]");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown term 'zz.'"));
}

#[test]
fn test_cli_parse_invalid_tree() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("parse")
        .arg("[([([A:])]*[([B:])]*[([E:])])+([([B:])]*[([A:])]*[([E:])])]");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Sentence tree"))
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn test_cli_max_nodes() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("--max-nodes")
        .arg("3")
        .arg("parse")
        .arg(SENTENCE);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Size limit exceeded"))
        .stderr(predicate::str::contains("--max-nodes"));
}

#[test]
fn test_cli_missing_dictionary() {
    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.env_remove("IEML_DICTIONARY").arg("parse").arg("[([wa.])]");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no dictionary given"));
}

#[test]
fn test_cli_graph() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("graph")
        .arg(SENTENCE);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[([A:])]\n"))
        .stdout(predicate::str::contains("├─ [([B:])]  (mode [([E:])])"))
        .stdout(predicate::str::contains("│  └─ [([T:])]  (mode [([E:])])"))
        .stdout(predicate::str::contains("└─ [([S:])]  (mode [([E:])])"));
}

#[test]
fn test_cli_graph_rejects_words() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary")
        .arg(&dictionary)
        .arg("graph")
        .arg("[([wa.])]");

    cmd.assert().failure().stderr(predicate::str::contains(
        "needs a sentence or a super-sentence, got a word",
    ));
}

#[test]
fn test_cli_terms() {
    let (_temp_dir, dictionary) = workspace();

    let mut cmd = Command::cargo_bin("ieml").unwrap();
    cmd.arg("--dictionary").arg(&dictionary).arg("terms");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("test-2016-11-02 with 25 terms"))
        .stdout(predicate::str::contains("E:.-O:.T:M:.-l.-'"))
        .stdout(predicate::str::contains("auxiliary"));
}
