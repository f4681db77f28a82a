use tutorlms::storage::DARK_MODE_KEY;
use tutorlms::{FileStorage, KeyValueStorage, NewNotification, NotificationKind, Store, UiState};

#[test]
fn dark_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = Store::new(FileStorage::new(&path));
    assert!(!store.dark_mode());
    store.set_dark_mode(true);

    // Fresh read of the persisted flag
    let storage = FileStorage::new(&path);
    assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

    let restarted = Store::new(FileStorage::new(&path));
    assert!(restarted.dark_mode());
}

#[test]
fn set_dark_mode_persists_exact_literal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let mut store = Store::new(FileStorage::new(&path));

    for value in [true, false, true, false] {
        store.set_dark_mode(value);
        let persisted = FileStorage::new(&path).get(DARK_MODE_KEY).unwrap();
        assert_eq!(persisted, Some(value.to_string()));
    }
}

#[test]
fn unwritable_storage_does_not_crash() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail
    let path = dir.path().join("storage.json");
    std::fs::create_dir_all(&path).unwrap();

    let mut store = Store::new(FileStorage::new(&path));
    assert!(!store.dark_mode());
    store.toggle_dark_mode();
    assert!(store.dark_mode());
}

#[test]
fn end_to_end_session_with_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let mut store = Store::new(FileStorage::new(&path));
    assert_eq!(store.state(), UiState::default());

    store.toggle_dark_mode();
    assert!(store.dark_mode());
    assert_eq!(
        FileStorage::new(&path).get(DARK_MODE_KEY).unwrap().as_deref(),
        Some("true")
    );

    store.add_notification(NewNotification::new(NotificationKind::Success, "Saved", "Done"));
    assert_eq!(store.notifications().len(), 1);

    store.clear_notifications();
    assert!(store.notifications().is_empty());
    assert!(store.dark_mode());
}
