#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn seeder() -> Command {
    cargo_bin_cmd!("schedseed")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schedseed.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB and insert `students` synthetic students
pub fn init_db_with_students(db_path: &str, students: usize) {
    seeder()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    seeder()
        .args([
            "--db",
            db_path,
            "--test",
            "students",
            "--count",
            &students.to_string(),
        ])
        .assert()
        .success();
}

/// Run a deterministic seed pass against a fixed reference date
pub fn run_seed(db_path: &str, seed: u64, reference: &str) {
    seeder()
        .args([
            "--db",
            db_path,
            "--test",
            "seed",
            "--seed",
            &seed.to_string(),
            "--reference",
            reference,
        ])
        .assert()
        .success();
}
