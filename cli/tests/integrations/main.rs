mod check;
mod commands;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding the fixture dictionary
pub fn workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let dictionary = temp_dir.path().join("dictionary.json");
    fs::write(
        &dictionary,
        include_str!("../../../ieml/tests/fixtures/dictionary.json"),
    )
    .unwrap();
    (temp_dir, dictionary)
}
