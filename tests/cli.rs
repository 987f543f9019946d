//! End-to-end tests for the `gastos` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gastos(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gastos").unwrap();
    cmd.env("GASTOS_DATA_DIR", dir)
        .env_remove("RUST_LOG")
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY");
    cmd
}

fn init() -> TempDir {
    let dir = TempDir::new().unwrap();
    gastos(dir.path()).arg("init").assert().success();
    dir
}

fn add(dir: &Path, args: &[&str]) {
    gastos(dir).arg("add").args(args).assert().success();
}

fn stored_expenses(dir: &Path) -> Vec<serde_json::Value> {
    let contents = fs::read_to_string(dir.join("data").join("gastos_app_data.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();

    gastos(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercado"))
        .stdout(predicate::str::contains("Limpieza"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("gastos_app_categories.json").exists());

    gastos(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Existing data kept."));
}

#[test]
fn add_then_list_month() {
    let dir = init();
    add(
        dir.path(),
        &["45.50", "-c", "mercado", "-s", "Comida", "-d", "2024-06-15", "-m", "Leche"],
    );
    add(dir.path(), &["12", "-c", "Movilidad", "-d", "2024-05-02"]);

    gastos(dir.path())
        .args(["list", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leche"))
        .stdout(predicate::str::contains("$45.50"))
        .stdout(predicate::str::contains("Movilidad").not());

    let stored = stored_expenses(dir.path());
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["category"], "Movilidad");
    assert_eq!(stored[1]["category"], "Mercado");
    assert_eq!(stored[1]["amount"], 45.5);
}

#[test]
fn add_rejects_bad_input() {
    let dir = init();

    gastos(dir.path())
        .args(["add", "10", "-c", "Viajes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Viajes"));

    gastos(dir.path())
        .args(["add", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));

    gastos(dir.path())
        .args(["add", "10", "-c", "Mercado", "-s", "Taxis"])
        .assert()
        .failure();

    assert!(!dir.path().join("data").join("gastos_app_data.json").exists());
}

#[test]
fn summary_breaks_down_by_category() {
    let dir = init();
    add(dir.path(), &["100", "-c", "Mercado", "-d", "2024-06-01"]);
    add(dir.path(), &["50", "-c", "Mercado", "-d", "2024-06-10"]);
    add(dir.path(), &["50", "-c", "Gustos", "-d", "2024-06-20"]);

    gastos(dir.path())
        .args(["summary", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: $200.00"))
        .stdout(predicate::str::contains("Expenses: 3"))
        .stdout(predicate::str::contains("75.0%"));

    gastos(dir.path())
        .args(["summary", "--month", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded for this month."));
}

#[test]
fn delete_asks_for_confirmation() {
    let dir = init();
    add(dir.path(), &["20", "-c", "Gustos", "-d", "2024-06-01"]);
    let id = stored_expenses(dir.path())[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    gastos(dir.path())
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."));
    assert_eq!(stored_expenses(dir.path()).len(), 1);

    gastos(dir.path())
        .args(["delete", &id[..8], "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));
    assert!(stored_expenses(dir.path()).is_empty());
}

#[test]
fn export_then_import_into_fresh_directory() {
    let source = init();
    add(source.path(), &["30", "-c", "Mercado", "-d", "2024-06-01", "-m", "Pan"]);
    gastos(source.path())
        .args(["recurring", "add", "300", "-c", "Cristopher", "-s", "Colegio"])
        .assert()
        .success();

    let backup = source.path().join("backup.json");
    gastos(source.path())
        .args(["export", "json"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:           1"));

    let target = init();
    gastos(target.path())
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Restored 1 expenses, 7 categories, 1 recurring expenses",
        ));

    gastos(target.path())
        .args(["list", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pan"));

    let safety_backups = fs::read_dir(target.path().join("backups")).unwrap().count();
    assert_eq!(safety_backups, 1);
}

#[test]
fn import_declined_writes_nothing() {
    let dir = init();
    let backup = dir.path().join("other.json");
    fs::write(
        &backup,
        r#"{"expenses": [], "categories": [{"id": "x", "name": "HogarImportado"}]}"#,
    )
    .unwrap();

    gastos(dir.path())
        .arg("import")
        .arg(&backup)
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import cancelled."));

    gastos(dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercado"))
        .stdout(predicate::str::contains("HogarImportado").not());
}

#[test]
fn import_rejects_invalid_file() {
    let dir = init();
    add(dir.path(), &["15", "-c", "Gustos", "-d", "2024-06-01"]);

    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"expenses": []}"#).unwrap();

    gastos(dir.path())
        .arg("import")
        .arg(&bad)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    fs::write(&bad, "not json").unwrap();
    gastos(dir.path())
        .arg("import")
        .arg(&bad)
        .arg("--yes")
        .assert()
        .failure();

    assert_eq!(stored_expenses(dir.path()).len(), 1);
}

#[test]
fn recurring_generate_records_expenses() {
    let dir = init();
    gastos(dir.path())
        .args(["recurring", "add", "300", "-c", "Cristopher", "-s", "Colegio"])
        .assert()
        .success();
    gastos(dir.path())
        .args(["recurring", "add", "15.99", "-c", "Entretenimiento", "-m", "Netflix"])
        .assert()
        .success();

    gastos(dir.path())
        .args(["recurring", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly total: $315.99"));

    gastos(dir.path())
        .args(["recurring", "generate", "--date", "2024-07-01", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 2 expense(s)"));

    gastos(dir.path())
        .args(["list", "--month", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gasto Fijo Mensual"))
        .stdout(predicate::str::contains("Netflix"));
}

#[test]
fn report_without_credentials_prints_fallback() {
    let dir = init();
    add(dir.path(), &["20", "-c", "Gustos", "-d", "2024-06-01"]);

    gastos(dir.path())
        .args(["report", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API Key no configurada"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = init();
    add(dir.path(), &["9.5", "-c", "Limpieza", "-d", "2024-06-03", "-m", "Jabón"]);

    gastos(dir.path())
        .args(["export", "csv", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,date,category,subcategory,description,amount\n",
        ))
        .stdout(predicate::str::contains("2024-06-03,Limpieza"))
        .stdout(predicate::str::contains("Jabón,9.50"));
}
