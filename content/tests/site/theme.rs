use content::{
    MemoryStorage, PreferenceStorage, StorageError, THEME_STORAGE_KEY,
    ThemeStore,
};

#[test]
fn defaults_to_light_without_a_stored_value() {
    let store = ThemeStore::init(MemoryStorage::new());
    assert!(!store.get());
    assert_eq!(store.storage().read(THEME_STORAGE_KEY), None);
}

#[test]
fn loads_stored_value() {
    let store =
        ThemeStore::init(MemoryStorage::with_entry(THEME_STORAGE_KEY, "true"));
    assert!(store.get());

    let store = ThemeStore::init(MemoryStorage::with_entry(
        THEME_STORAGE_KEY,
        "false",
    ));
    assert!(!store.get());
}

#[test]
fn malformed_value_falls_back_to_light() {
    for raw in ["", "dark", "1", "\"true\"", "{}", "True"] {
        let store =
            ThemeStore::init(MemoryStorage::with_entry(THEME_STORAGE_KEY, raw));
        assert!(!store.get(), "{raw:?} should read as light");
    }
}

#[test]
fn toggle_twice_restores_and_persists_each_step() {
    let mut store = ThemeStore::init(MemoryStorage::new());

    assert!(store.toggle());
    assert!(store.get());
    assert_eq!(
        store.storage().read(THEME_STORAGE_KEY).as_deref(),
        Some("true")
    );

    assert!(!store.toggle());
    assert!(!store.get());
    assert_eq!(
        store.storage().read(THEME_STORAGE_KEY).as_deref(),
        Some("false")
    );
}

#[test]
fn persisted_value_survives_reinit() {
    let mut store = ThemeStore::init(MemoryStorage::new());
    store.toggle();

    let reloaded = ThemeStore::init(store.storage().clone());
    assert_eq!(reloaded.get(), store.get());
}

#[derive(Default)]
struct ReadOnlyStorage {
    writes_attempted: usize,
}

impl PreferenceStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> Option<String> {
        Some("true".to_string())
    }

    fn write(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes_attempted += 1;
        Err(StorageError::WriteRejected {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }
}

#[test]
fn failed_write_still_flips_in_memory() {
    let mut store = ThemeStore::init(ReadOnlyStorage::default());
    assert!(store.get());
    assert!(!store.toggle());
    assert!(!store.get());
    assert_eq!(store.storage().writes_attempted, 1);
}
