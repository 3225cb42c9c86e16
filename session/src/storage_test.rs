use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryCredentialStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_save_then_clear() {
    let store = MemoryCredentialStore::default();
    store.save("tok-1").expect("save");
    assert_eq!(store.load(), Some("tok-1".to_owned()));
    store.clear();
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.raw(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryCredentialStore::default();
    let reloaded = store.clone();
    store.save("tok-2").expect("save");
    assert_eq!(reloaded.load(), Some("tok-2".to_owned()));
}

#[test]
fn memory_store_hides_blank_tokens() {
    let store = MemoryCredentialStore::with_token("   ");
    assert_eq!(store.load(), None);
    assert_eq!(store.raw(), Some("   ".to_owned()));
}
