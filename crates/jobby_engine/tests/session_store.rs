use std::fs;

use chrono::{Duration, TimeZone, Utc};
use jobby_engine::{CredentialStore, FileCredentialStore, StoreError, SESSION_FILENAME};
use tempfile::TempDir;

fn store_at(dir: &TempDir, now: chrono::DateTime<Utc>) -> FileCredentialStore {
    FileCredentialStore::new(dir.path().join("data"), Duration::days(30)).with_clock(move || now)
}

#[test]
fn missing_file_means_no_session() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp, Utc::now());
    assert_eq!(store.load().unwrap(), None);
    // Clearing nothing is fine.
    store.clear().unwrap();
}

#[test]
fn saved_token_loads_back_and_creates_dir() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp, Utc::now());
    store.save("jwt-1").unwrap();
    assert!(temp.path().join("data").join(SESSION_FILENAME).is_file());
    assert_eq!(store.load().unwrap().as_deref(), Some("jwt-1"));

    store.save("jwt-2").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("jwt-2"));
}

#[test]
fn token_expires_after_thirty_days() {
    let temp = TempDir::new().unwrap();
    let saved_at = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    store_at(&temp, saved_at).save("jwt").unwrap();

    let day_29 = store_at(&temp, saved_at + Duration::days(29));
    assert_eq!(day_29.load().unwrap().as_deref(), Some("jwt"));

    let day_30 = store_at(&temp, saved_at + Duration::days(30));
    assert_eq!(day_30.load().unwrap(), None);
    assert!(!day_30.path().exists());
}

#[test]
fn clear_removes_the_token() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp, Utc::now());
    store.save("jwt").unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn garbage_file_is_reported_as_corrupt() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp, Utc::now());
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(store.path(), "not json").unwrap();
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
}

#[test]
fn data_dir_that_is_a_file_fails_to_save() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("data");
    fs::write(&file_path, "x").unwrap();

    let store = FileCredentialStore::new(file_path, Duration::days(30));
    assert!(matches!(store.save("jwt"), Err(StoreError::DataDir(_))));
}
