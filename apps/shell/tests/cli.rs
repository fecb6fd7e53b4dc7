use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const DOC: &str = r#"[
  { "id": "r-1", "code": "G1", "name": "Associate", "unitId": "u-1", "order": 1, "modifier": null },
  { "id": "r-2", "unitId": "u-1", "unit": { "id": "u-3", "name": "Ops" } }
]"#;

fn rankctl() -> Command {
    let mut cmd = Command::cargo_bin("rankctl").expect("binary is built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    rankctl().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn check_reads_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("ranks.json");
    fs::write(&path, DOC)?;

    rankctl()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("#0\tid=r-1\tcode=G1\tname=Associate"))
        .stdout(predicate::str::contains("stale: unitId is 'u-1' but embedded unit has id 'u-3'"))
        .stdout(predicate::str::contains("2 rank(s), 1 stale embed(s)"));
    Ok(())
}

#[test]
fn normalize_reads_stdin_and_drops_nulls() {
    rankctl()
        .args(["normalize", "-"])
        .write_stdin(r#"{ "name": "Lead", "code": null, "order": 3 }"#)
        .assert()
        .success()
        .stdout("[{\"name\":\"Lead\",\"order\":3}]\n");
}

#[test]
fn config_file_controls_output_style() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("central.toml");
    fs::write(&config, "[codec]\npretty = true\nreport_stale_embeds = false\n")?;

    rankctl()
        .args(["--config"])
        .arg(&config)
        .args(["input", "-"])
        .write_stdin(r#"{ "id": "r-9", "unit": { "id": "u-1" } }"#)
        .assert()
        .success()
        .stdout("[\n  {\n    \"id\": \"r-9\"\n  }\n]\n");
    Ok(())
}

#[test]
fn malformed_documents_fail() {
    rankctl()
        .args(["check", "-"])
        .write_stdin(r#"{ "id": "r-1", "level": 2 }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid rank document"))
        .stderr(predicate::str::contains("unknown field `level`"));
}

#[test]
fn missing_config_file_fails() {
    rankctl()
        .args(["--config", "does-not-exist.toml", "check", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn environment_overrides_config() {
    rankctl()
        .env("CENTRAL__CODEC__REPORT_STALE_EMBEDS", "false")
        .arg("check")
        .arg("-")
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout(predicate::str::contains("stale:").not())
        .stdout(predicate::str::contains("2 rank(s), 0 stale embed(s)"));
}

#[test]
fn default_config_is_read_from_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("central.toml"), "[codec]\npretty = true\n")?;

    rankctl()
        .current_dir(dir.path())
        .args(["normalize", "-"])
        .write_stdin(r#"{ "id": "r-3", "order": 2.0 }"#)
        .assert()
        .success()
        .stdout("[\n  {\n    \"id\": \"r-3\",\n    \"order\": 2\n  }\n]\n");
    Ok(())
}

#[test]
fn logs_stay_off_stdout() {
    rankctl()
        .env("NO_COLOR", "1")
        .args(["--verbose", "normalize", "-"])
        .write_stdin(r#"{ "id": "r-4" }"#)
        .assert()
        .success()
        .stdout("[{\"id\":\"r-4\"}]\n")
        .stderr(predicate::str::contains("Document decoded"));
}
