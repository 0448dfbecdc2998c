use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn shelf(home: &Path, file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("NO_COLOR", "1")
        .arg("--file")
        .arg(file)
        .arg("--lang")
        .arg("en");
    cmd
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.json");

    shelf(dir.path(), &file)
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (ID 0): Dune"));

    shelf(dir.path(), &file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune, Frank Herbert (1965)"))
        .stdout(predicate::str::contains("in stock"));
}

#[test]
fn invalid_year_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.json");

    shelf(dir.path(), &file)
        .args(["add", "Old", "Author", "1799"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year must be between 1800 and"));

    let raw = fs::read_to_string(&file).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn status_and_search() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.json");
    fs::write(
        &file,
        r#"[{"id": 0, "title": "Book1", "author": "Author1", "year": 2000, "status": 0},
            {"id": 1, "title": "Book2", "author": "Author2", "year": 2001, "status": 0}]"#,
    )
    .unwrap();

    shelf(dir.path(), &file)
        .args(["status", "1", "issued"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status updated (ID 1): issued"));

    shelf(dir.path(), &file)
        .args(["search", "--year", "2001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 book(s)."))
        .stdout(predicate::str::contains("Book2"))
        .stdout(predicate::str::contains("Book1").not());
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.json");

    shelf(dir.path(), &file)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No book with ID 5"));
}

#[test]
fn unsupported_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.csv");

    shelf(dir.path(), &file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only .json files are supported"));
}

#[test]
fn menu_session_over_stdin() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.json");

    shelf(dir.path(), &file)
        .arg("menu")
        .write_stdin("1\nEmma\nJane Austen\n1815\n5\n0\n1\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (ID 0): Emma"))
        .stdout(predicate::str::contains("Status updated (ID 0): issued"))
        .stdout(predicate::str::contains("Status: issued"));

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(raw[0]["status"], 1);
}

#[test]
fn menu_asks_for_new_path_when_file_is_bad() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("books.txt");
    let good = dir.path().join("other.json");

    shelf(dir.path(), &bad)
        .write_stdin(format!("{}\n4\n6\n", good.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsupported file type"))
        .stdout(predicate::str::contains("No books."));

    assert!(good.exists());
}

#[test]
fn russian_labels_in_menu() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("books.json");
    fs::write(
        &file,
        r#"[{"id": 0, "title": "Мы", "author": "Замятин", "year": 1920, "status": 1}]"#,
    )
    .unwrap();

    Command::cargo_bin("shelf")
        .unwrap()
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("NO_COLOR", "1")
        .args(["--lang", "ru", "--file"])
        .arg(&file)
        .write_stdin("4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Статус: Выдана"));
}

#[test]
fn config_data_file_is_used_without_flag() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("configured.json");
    let bare = || {
        let mut cmd = Command::cargo_bin("shelf").unwrap();
        cmd.env("XDG_CONFIG_HOME", dir.path().join("config"))
            .env("XDG_DATA_HOME", dir.path().join("data"))
            .env("NO_COLOR", "1");
        cmd
    };

    bare()
        .args(["config", "data-file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to"));

    bare()
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success();
    assert!(fs::read_to_string(&file).unwrap().contains("Dune"));

    bare()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = en"));

    bare()
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}
