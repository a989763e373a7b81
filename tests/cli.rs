use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pluvio(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pluvio").unwrap();
    cmd.env("PLUVIO_DATA_DIR", data_dir.path())
        .env_remove("PLUVIO_LOG");
    cmd
}

#[test]
fn test_log_then_list() {
    let dir = TempDir::new().unwrap();

    pluvio(&dir)
        .args(["log", "5,5", "--date", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pluviométrie enregistrée avec succès"));
    pluvio(&dir)
        .args(["log", "12", "--date", "2026-01-16"])
        .assert()
        .success();

    let output = pluvio(&dir).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newer = stdout.find("16/01/2026").unwrap();
    let older = stdout.find("15/01/2026").unwrap();
    assert!(newer < older);
    assert!(stdout.contains("5.5 mm"));
    assert!(stdout.contains("12.0 mm"));
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucune donnée enregistrée"));
}

#[test]
fn test_negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .args(["log", "-5", "--date", "2026-01-15"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Saisie invalide"))
        .stderr(predicate::str::contains("négative"));

    pluvio(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucune donnée enregistrée"));
}

#[test]
fn test_bad_date_is_rejected() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .args(["log", "3", "--date", "15/01/2026"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_same_day_is_updated() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .args(["log", "5", "--date", "2026-01-15"])
        .assert()
        .success();
    pluvio(&dir)
        .args(["log", "8", "--date", "2026-01-15"])
        .assert()
        .success();

    pluvio(&dir)
        .args(["show", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.0 mm"))
        .stdout(predicate::str::contains("5.0 mm").not());
}

#[test]
fn test_show_missing_date() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .args(["show", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucune donnée enregistrée pour le 2026-01-15"));
}

#[test]
fn test_range_is_inclusive() {
    let dir = TempDir::new().unwrap();
    for (date, amount) in [("2026-01-10", "1"), ("2026-01-15", "2"), ("2026-01-20", "3")] {
        pluvio(&dir)
            .args(["log", amount, "--date", date])
            .assert()
            .success();
    }

    pluvio(&dir)
        .args(["range", "2026-01-10", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10/01/2026"))
        .stdout(predicate::str::contains("15/01/2026"))
        .stdout(predicate::str::contains("20/01/2026").not());
}

#[test]
fn test_chart_empty() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucune donnée à afficher"));
}

#[test]
fn test_export_to_stdout() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .args(["log", "12.5", "--date", "2026-01-17"])
        .assert()
        .success();

    let output = pluvio(&dir).args(["export", "--stdout"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\u{FEFF}Date;Quantité (mm);Localisation;Notes\n2026-01-17;12.5;;"
    );
}

#[test]
fn test_export_to_default_file() {
    let dir = TempDir::new().unwrap();
    pluvio(&dir)
        .args(["log", "3", "--date", "2026-01-17"])
        .assert()
        .success();

    pluvio(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("pluvio-export-"));

    let exports: Vec<_> = std::fs::read_dir(dir.path().join("exports"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(exports.len(), 1);

    let text = std::fs::read_to_string(&exports[0]).unwrap();
    assert!(text.starts_with('\u{FEFF}'));
    assert!(text.ends_with("2026-01-17;3;;"));
}

#[test]
fn test_data_dir_flag_overrides_environment() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    pluvio(&env_dir)
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["log", "1", "--date", "2026-01-17"])
        .assert()
        .success();

    assert!(flag_dir.path().join("pluvio.db").exists());
    assert!(!env_dir.path().join("pluvio.db").exists());
}

#[test]
fn test_config_shows_paths_and_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");
    assert!(!settings_file.exists());

    pluvio(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("pluvio.db"))
        .stdout(predicate::str::contains("%d/%m/%Y"));

    let saved = std::fs::read_to_string(&settings_file).unwrap();
    assert!(saved.contains("\"chart_width\": 40"));
}

#[test]
fn test_config_keeps_existing_settings_file() {
    let dir = TempDir::new().unwrap();
    let settings_file = dir.path().join("config.json");
    std::fs::write(&settings_file, r#"{"chart_width": 25}"#).unwrap();

    pluvio(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("25"));

    assert_eq!(
        std::fs::read_to_string(&settings_file).unwrap(),
        r#"{"chart_width": 25}"#
    );
}

#[test]
fn test_oversized_chart_width_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"chart_width": 70000}"#).unwrap();

    pluvio(&dir)
        .arg("chart")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("chart_width"));
}

#[test]
fn test_storage_failure_exits_with_one() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("pluvio.db")).unwrap();

    pluvio(&dir)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("base de données"));
}
