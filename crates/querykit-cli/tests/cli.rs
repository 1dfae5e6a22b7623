use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const OWNER: &str = "6f1c2d3e-4a5b-4c6d-8e7f-901a2b3c4d5e";
const OTHER: &str = "11111111-2222-4333-8444-555555555555";

fn querykit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("querykit").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("QUERYKIT_LOG")
        .env_remove("QUERYKIT_DEFAULT_PAGE_SIZE")
        .env_remove("QUERYKIT_MAX_PAGE_SIZE")
        .env_remove("QUERYKIT_MAX_KEY_LENGTH")
        .env_remove("QUERYKIT_MAX_KEYWORD_LENGTH");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn records(dir: &TempDir) -> PathBuf {
    let rows = format!(
        r#"[
  {{"id": "00000000-0000-4000-8000-000000000001", "entity_id": "{owner}", "external_id": "royalty",
    "group": "economics", "type": "Decimal", "decimal": "7.5", "created_at": "2024-01-01T00:00:00Z"}},
  {{"id": "00000000-0000-4000-8000-000000000002", "entity_id": "{owner}", "external_id": "color",
    "group": "style", "type": "Text", "text": "Crimson", "created_at": "2024-01-02T00:00:00Z"}},
  {{"id": "00000000-0000-4000-8000-000000000003", "entity_id": "{owner}", "external_id": "edition",
    "type": "Integer", "integer": 12, "created_at": "2024-01-03T00:00:00Z"}},
  {{"id": "00000000-0000-4000-8000-000000000004", "entity_id": "{other}", "external_id": "color",
    "group": "style", "type": "Text", "text": "Ocean", "created_at": "2024-01-04T00:00:00Z"}}
]"#,
        owner = OWNER,
        other = OTHER
    );
    write(dir, "records.json", &rows)
}

#[test]
fn validate_accepts_a_complete_filter() {
    let dir = TempDir::new().unwrap();
    let filter = write(
        &dir,
        "filter.json",
        &format!(r#"{{"entity_id": "{}", "type": "Text", "group": "style", "page_size": 5}}"#, OWNER),
    );

    querykit(&dir)
        .arg("validate")
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::diff("valid\n"));
}

#[test]
fn validate_reports_field_errors() {
    let dir = TempDir::new().unwrap();
    let filter = write(&dir, "filter.json", r#"{"page_number": 0, "external_id": "bad key"}"#);

    querykit(&dir)
        .arg("validate")
        .arg(&filter)
        .assert()
        .failure()
        .stdout(predicate::str::contains("entity_id: is required"))
        .stdout(predicate::str::contains("external_id: contains invalid character ' '"))
        .stdout(predicate::str::contains("page_number: must be greater than or equal to 1"))
        .stderr(predicate::str::contains("3 validation error(s)"));
}

#[test]
fn query_prints_the_requested_page() {
    let dir = TempDir::new().unwrap();
    let records = records(&dir);
    let filter = write(
        &dir,
        "filter.json",
        &format!(
            r#"{{"entity_id": "{}", "order_by": ["external_id desc"], "page_size": 2}}"#,
            OWNER
        ),
    );

    let output = querykit(&dir)
        .arg("query")
        .arg("--records")
        .arg(&records)
        .arg("--filter")
        .arg(&filter)
        .output()
        .unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["total_count"], 3);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["has_next_page"], true);
    let keys: Vec<&str> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["external_id"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["royalty", "edition"]);
}

#[test]
fn query_rejects_rows_with_conflicting_values() {
    let dir = TempDir::new().unwrap();
    let records = write(
        &dir,
        "records.json",
        &format!(
            r#"[{{"id": "00000000-0000-4000-8000-000000000009", "entity_id": "{}",
                "external_id": "royalty", "type": "Decimal", "decimal": "1.5", "text": "oops"}}]"#,
            OWNER
        ),
    );
    let filter = write(&dir, "filter.json", &format!(r#"{{"entity_id": "{}"}}"#, OWNER));

    querykit(&dir)
        .args(["query", "-r"])
        .arg(&records)
        .arg("-f")
        .arg(&filter)
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 0"))
        .stderr(predicate::str::contains("also carries values for: Text"));
}

#[test]
fn config_file_limits_apply_to_validation() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "querykit.toml", "max_page_size = 20\ndefault_page_size = 5\n");
    let filter = write(
        &dir,
        "filter.json",
        &format!(r#"{{"entity_id": "{}", "page_size": 50}}"#, OWNER),
    );

    querykit(&dir)
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(&filter)
        .assert()
        .failure()
        .stdout(predicate::str::contains("page_size: must be between 1 and 20"));
}

#[test]
fn config_prints_effective_settings() {
    let dir = TempDir::new().unwrap();
    querykit(&dir)
        .env("QUERYKIT_MAX_PAGE_SIZE", "250")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_page_size = 250"))
        .stdout(predicate::str::contains("default_page_size = 10"));
}

#[test]
fn schema_uses_host_and_base_path() {
    let dir = TempDir::new().unwrap();
    querykit(&dir)
        .args(["schema", "--host", "api.example.com", "--base-path", "/v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"server\": \"https://api.example.com/v2\""))
        .stdout(predicate::str::contains("/v2/extended-attributes"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    querykit(&dir)
        .env("QUERYKIT_LOG", "debug")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration loaded").not())
        .stderr(predicate::str::contains("configuration loaded"));
}

#[test]
fn missing_filter_file_is_reported() {
    let dir = TempDir::new().unwrap();
    querykit(&dir)
        .args(["validate", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading absent.json"));
}
