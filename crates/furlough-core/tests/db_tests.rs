use furlough_core::{Database, Storage};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.get_snapshot("missing").expect("Failed to query"), None);
}

#[test]
fn test_put_and_get_snapshot() {
    let (_temp_file, mut db) = create_test_db();

    db.put_snapshot("plan", r#"{"holidays":[]}"#)
        .expect("Failed to store snapshot");

    let stored = db
        .get_snapshot("plan")
        .expect("Failed to get snapshot")
        .expect("Snapshot should exist");
    assert_eq!(stored, r#"{"holidays":[]}"#);
}

#[test]
fn test_put_replaces_previous_value() {
    let (_temp_file, mut db) = create_test_db();

    db.put_snapshot("plan", "first").expect("Failed to store");
    db.put_snapshot("plan", "second").expect("Failed to replace");
    db.put_snapshot("other", "untouched").expect("Failed to store");

    assert_eq!(db.get_snapshot("plan").unwrap().as_deref(), Some("second"));
    assert_eq!(
        db.get_snapshot("other").unwrap().as_deref(),
        Some("untouched")
    );
}

#[test]
fn test_updated_at_is_recorded() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.snapshot_updated_at("plan").unwrap().is_none());

    let before = jiff::Timestamp::now();
    db.put_snapshot("plan", "{}").expect("Failed to store");
    let saved = db
        .updated_at("plan")
        .expect("Failed to read timestamp")
        .expect("Timestamp should exist");
    assert!(saved >= before);
}

#[test]
fn test_snapshot_survives_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        db.save("plan", "persisted").expect("Failed to store");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.load("plan").unwrap().as_deref(), Some("persisted"));
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().expect("Failed to open in-memory database");
    db.save("plan", "{}").expect("Failed to store");
    assert_eq!(db.load("plan").unwrap().as_deref(), Some("{}"));
}

#[test]
fn test_unparseable_updated_at_reads_as_unknown() {
    let (temp_file, mut db) = create_test_db();
    db.put_snapshot("plan", "{}").expect("Failed to store");

    let raw = rusqlite::Connection::open(temp_file.path()).expect("Failed to open raw connection");
    raw.execute(
        "UPDATE snapshots SET updated_at = 'yesterday-ish' WHERE key = 'plan'",
        [],
    )
    .expect("Failed to corrupt timestamp");

    assert!(db
        .snapshot_updated_at("plan")
        .expect("Failed to read timestamp")
        .is_none());
    assert_eq!(db.get_snapshot("plan").unwrap().as_deref(), Some("{}"));
}
