use serde_json::json;

use gotoguys_core::errors::CoreError;
use gotoguys_core::storage::{
    load_versioned, save_versioned, JsonStore, PersistencePort, TEAM_CODES_KEY, USER_INFO_KEY,
};

fn store_in_tempdir() -> (tempfile::TempDir, JsonStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(Some(dir.path().to_path_buf())).unwrap();
    (dir, store)
}

#[test]
fn set_get_remove_round_trip() {
    let (_dir, store) = store_in_tempdir();

    assert!(store.get(USER_INFO_KEY).unwrap().is_none());
    store
        .set(USER_INFO_KEY, json!({"display_name": "Jane"}))
        .unwrap();
    let value = store.get(USER_INFO_KEY).unwrap().unwrap();
    assert_eq!(value["display_name"], "Jane");

    store.remove(USER_INFO_KEY).unwrap();
    assert!(store.get(USER_INFO_KEY).unwrap().is_none());
}

#[test]
fn keys_lists_written_entries_sorted() {
    let (_dir, store) = store_in_tempdir();
    store.set(TEAM_CODES_KEY, json!({})).unwrap();
    store.set(USER_INFO_KEY, json!({})).unwrap();

    assert_eq!(
        store.keys().unwrap(),
        vec![TEAM_CODES_KEY.to_string(), USER_INFO_KEY.to_string()]
    );
}

#[test]
fn store_files_land_under_the_store_directory() {
    let (dir, store) = store_in_tempdir();
    store.set(USER_INFO_KEY, json!({"display_name": "Jane"})).unwrap();

    let path = dir.path().join("store").join("user_info.json");
    assert!(path.exists());
    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.contains("Jane"));
}

#[test]
fn versioned_envelope_round_trips_typed_records() {
    let (_dir, store) = store_in_tempdir();

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Record {
        name: String,
    }

    let record = Record {
        name: "Blitz Brigade".into(),
    };
    save_versioned(&store, "record", &record).unwrap();
    let loaded: Record = load_versioned(&store, "record").unwrap().unwrap();
    assert_eq!(loaded, record);

    // The raw file carries the schema envelope.
    let raw = store.get("record").unwrap().unwrap();
    assert_eq!(raw["schema_version"], 1);
}

#[test]
fn schema_version_mismatch_is_rejected() {
    let (_dir, store) = store_in_tempdir();
    store
        .set("record", json!({"schema_version": 99, "data": {"name": "x"}}))
        .unwrap();

    #[derive(serde::Deserialize, Debug)]
    struct Record {
        #[allow(dead_code)]
        name: String,
    }

    let err = load_versioned::<Record>(&store, "record").expect_err("wrong version");
    assert!(matches!(
        err,
        CoreError::SchemaVersion {
            expected: 1,
            found: 99
        }
    ));
}
