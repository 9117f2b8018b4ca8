use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bracescan(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("bracescan").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_path_mismatched_example() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "a{b}c{d").unwrap();

    bracescan(&tmp)
        .assert()
        .success()
        .stdout("Braces: {: 2, }: 1\nMismatched braces!\nScan complete.\n");
}

#[test]
fn missing_file_single_error_line_exit_zero() {
    let tmp = TempDir::new().unwrap();

    bracescan(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error reading file: "))
        .stdout(predicate::str::contains("app.js"))
        .stdout(predicate::str::contains("Braces:").not())
        .stdout(predicate::str::contains("Scan complete.").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn default_run_writes_nothing_to_stderr() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "{ 'año': 1 }").unwrap();

    bracescan(&tmp)
        .assert()
        .success()
        .stdout("Braces: {: 1, }: 1\nScan complete.\n")
        .stderr(predicate::str::is_empty());

    fs::write(tmp.path().join("app.js"), b"{\xff").unwrap();
    bracescan(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error reading file: "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn null_bytes_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), b"let a = {};\0").unwrap();

    bracescan(&tmp)
        .assert()
        .success()
        .stdout("Found NULL bytes in file!\nBraces: {: 1, }: 1\nScan complete.\n");
}

#[test]
fn accented_text_does_not_change_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("plain.js"), "alert('Guardado'); { }").unwrap();
    fs::write(tmp.path().join("accented.js"), "alert('Guardado con éxito'); { }").unwrap();

    let plain = bracescan(&tmp).arg("plain.js").output().unwrap();
    let accented = bracescan(&tmp).arg("accented.js").output().unwrap();
    assert!(plain.status.success());
    assert_eq!(plain.stdout, accented.stdout);
}

#[test]
fn invalid_utf8_is_read_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), b"{\xff}").unwrap();

    bracescan(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error reading file: invalid utf-8"))
        .stdout(predicate::str::contains("Braces:").not());
}

#[test]
fn max_file_size_exceeded() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "{}{}{}").unwrap();

    bracescan(&tmp)
        .args(["--max-file-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds maximum size of 2 bytes"));
}

#[test]
fn json_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "{{}").unwrap();

    bracescan(&tmp)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"open_braces\":2"))
        .stdout(predicate::str::contains("\"close_braces\":1"))
        .stdout(predicate::str::contains("\"balanced\":false"));
}

#[test]
fn cli_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("from_config.js"), "{").unwrap();
    fs::write(tmp.path().join("from_cli.js"), "{}").unwrap();
    fs::write(tmp.path().join("bracescan.toml"), "path = \"from_config.js\"\nformat = \"json\"\n").unwrap();

    bracescan(&tmp)
        .args(["--config", "bracescan.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"open_braces\":1"))
        .stdout(predicate::str::contains("\"close_braces\":0"));

    bracescan(&tmp)
        .args(["from_cli.js", "--config", "bracescan.toml", "--format", "text"])
        .assert()
        .success()
        .stdout("Braces: {: 1, }: 1\nScan complete.\n");
}

#[test]
fn broken_config_is_cli_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bracescan.toml"), "path = [").unwrap();

    bracescan(&tmp)
        .args(["--config", "bracescan.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}

#[test]
fn repeated_runs_identical() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "const t = { título: 'sí' };").unwrap();

    let first = bracescan(&tmp).output().unwrap();
    let second = bracescan(&tmp).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logs_without_color_when_stderr_is_piped() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "{ 'canción' }").unwrap();

    bracescan(&tmp)
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Braces: {: 1, }: 1\nScan complete.\n")
        .stderr(predicate::str::contains("check finished"))
        .stderr(predicate::str::contains("non_ascii=1"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
