use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_students, run_seed, seeder, setup_test_db, temp_out};

const REFERENCE: &str = "2024-06-01";

#[test]
fn export_csv_contains_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");

    init_db_with_students(&db_path, 1);
    run_seed(&db_path, 3, REFERENCE);

    seeder()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,student,start,end,meal,notes,attendance")
    );
    assert_eq!(lines.count(), 36);
    assert!(content.contains("Test Student 01"));
}

#[test]
fn export_json_is_valid_and_complete() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");

    init_db_with_students(&db_path, 1);
    run_seed(&db_path, 3, REFERENCE);

    seeder()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of rows");

    assert_eq!(rows.len(), 36);
    assert_eq!(rows[0]["student"], "Test Student 01");
    assert!(rows[0]["start"].is_string());
    assert!(rows[0]["attendance"].is_boolean());
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");

    init_db_with_students(&db_path, 1);
    run_seed(&db_path, 3, REFERENCE);

    fs::write(&out, "sentinel").unwrap();

    seeder()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "sentinel");

    seeder()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,student"));
}
