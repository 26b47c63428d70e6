use bookhub_core::store::migrations::latest_version;
use bookhub_core::{
    open_store, open_store_in_memory, BlobStore, SqliteBlobStore, StoreError,
};
use rusqlite::Connection;

#[test]
fn open_store_in_memory_applies_all_migrations() {
    let conn = open_store_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "blobs");
}

#[test]
fn opening_same_store_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookhub.sqlite3");

    let conn_first = open_store(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_store(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "blobs");
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_store(&path).unwrap_err();
    match err {
        StoreError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blob_store_rejects_uninitialized_connections() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteBlobStore::try_new(&conn).map(|_| ()) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        other => panic!("expected UninitializedConnection, got {other:?}"),
    }
}

#[test]
fn write_blob_replaces_prior_values() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteBlobStore::try_new(&conn).unwrap();

    assert_eq!(store.read_blob("k").unwrap(), None);

    store.write_blob("k", "first").unwrap();
    assert_eq!(store.read_blob("k").unwrap().as_deref(), Some("first"));

    store.write_blob("k", "second").unwrap();
    assert_eq!(store.read_blob("k").unwrap().as_deref(), Some("second"));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
