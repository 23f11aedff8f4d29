use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::database::{self, dictionary};
use crate::Error;

fn build_store(dir: &Path) -> PathBuf {
    let path = dir.join("dictionary.db");

    let conn = rusqlite::Connection::open(&path).expect("create store");
    conn.execute_batch(
        "CREATE TABLE entries (
            word TEXT NOT NULL,
            lang TEXT NOT NULL,
            pos TEXT NOT NULL,
            ipa TEXT,
            definition TEXT NOT NULL
        );
        INSERT INTO entries VALUES ('star', 'English', 'noun', 'stɑːr', 'a luminous celestial body');
        INSERT INTO entries VALUES ('star', 'French', 'nom', NULL, 'une étoile');
        INSERT INTO entries VALUES ('galaxy', 'English', 'noun', 'ˈɡæləksi', 'a system of stars');
        INSERT INTO entries VALUES ('nebula', 'English', 'noun', '', 'a cloud of gas and dust');",
    )
    .expect("seed store");

    path
}

fn empty_store(dir: &Path) -> PathBuf {
    let path = dir.join("empty.db");

    let conn = rusqlite::Connection::open(&path).expect("create store");
    conn.execute_batch(
        "CREATE TABLE entries (
            word TEXT NOT NULL,
            lang TEXT NOT NULL,
            pos TEXT NOT NULL,
            ipa TEXT,
            definition TEXT NOT NULL
        );",
    )
    .expect("create schema");

    path
}

#[tokio::test]
async fn open_fails_for_missing_file() {
    let dir = TempDir::new().unwrap();

    let result = database::open_store(dir.path().join("missing.db")).await;

    assert!(matches!(result, Err(Error::StoreUnavailable(_))));
}

#[tokio::test]
async fn open_fails_for_non_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.db");
    std::fs::write(&path, "this is not a database").unwrap();

    let result = database::open_store(path).await;

    assert!(matches!(result, Err(Error::StoreUnavailable(_))));
}

#[tokio::test]
async fn open_fails_without_entries_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute("CREATE TABLE cards (id INTEGER PRIMARY KEY)", [])
        .unwrap();
    drop(conn);

    let result = database::open_store(path).await;

    match result {
        Err(Error::StoreUnavailable(message)) => {
            assert!(message.contains("entries"), "got: {message}")
        }
        Err(other) => panic!("expected StoreUnavailable, got {other}"),
        Ok(_) => panic!("expected StoreUnavailable, got an open store"),
    }
}

#[tokio::test]
async fn lists_languages_alphabetically_with_counts() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(build_store(dir.path())).await.unwrap();

    let languages = dictionary::list_languages(&conn).await.unwrap();

    let summary: Vec<(&str, i64)> = languages
        .iter()
        .map(|count| (count.language.as_str(), count.entries))
        .collect();
    assert_eq!(summary, vec![("English", 3), ("French", 1)]);
}

#[tokio::test]
async fn lists_no_languages_for_empty_store() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(empty_store(dir.path())).await.unwrap();

    let languages = dictionary::list_languages(&conn).await.unwrap();

    assert!(languages.is_empty());
}

#[tokio::test]
async fn finds_entries_across_languages() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(build_store(dir.path())).await.unwrap();

    let entries = dictionary::find_entries(&conn, String::from("star"), None)
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].word, "star");
    assert_eq!(entries[0].language, "English");
    assert_eq!(entries[0].part_of_speech, "noun");
    assert_eq!(entries[0].ipa.as_deref(), Some("stɑːr"));
    assert_eq!(entries[0].definition, "a luminous celestial body");
    assert_eq!(entries[1].language, "French");
    assert_eq!(entries[1].ipa, None);
    assert_eq!(entries[1].definition, "une étoile");
}

#[tokio::test]
async fn filters_entries_by_language() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(build_store(dir.path())).await.unwrap();

    let entries = dictionary::find_entries(&conn, String::from("star"), Some(String::from("French")))
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].language, "French");
    assert_eq!(entries[0].definition, "une étoile");
}

#[tokio::test]
async fn matching_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(build_store(dir.path())).await.unwrap();

    let entries = dictionary::find_entries(&conn, String::from("Star"), None)
        .await
        .unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn does_not_trim_the_word() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(build_store(dir.path())).await.unwrap();

    let entries = dictionary::find_entries(&conn, String::from(" star"), None)
        .await
        .unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn empty_transcription_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let conn = database::open_store(build_store(dir.path())).await.unwrap();

    let entries = dictionary::find_entries(&conn, String::from("nebula"), None)
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ipa, None);
}
