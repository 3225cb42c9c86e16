use super::*;

#[test]
fn load_missing_file_is_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileCredentialStore::new(dir.path().join("token"));
    assert_eq!(store.load(), None);
}

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileCredentialStore::new(dir.path().join("nested").join("token"));

    store.save("tok-1").expect("save");

    assert_eq!(store.load().as_deref(), Some("tok-1"));
}

#[test]
fn blank_file_counts_as_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("token");
    fs::write(&path, "  \n").expect("write");
    assert_eq!(FileCredentialStore::new(path).load(), None);
}

#[test]
fn clear_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileCredentialStore::new(dir.path().join("token"));
    store.save("tok-1").expect("save");

    store.clear();
    store.clear();

    assert_eq!(store.load(), None);
    assert!(!store.path().exists());
}

#[cfg(unix)]
#[test]
fn saved_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileCredentialStore::new(dir.path().join("token"));
    store.save("tok-1").expect("save");

    let mode = fs::metadata(store.path()).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn overwriting_loose_file_tightens_mode_and_truncates() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("token");
    fs::write(&path, "a-much-longer-previous-token").expect("write");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");
    let store = FileCredentialStore::new(path.clone());

    store.save("tok-2").expect("save");

    assert_eq!(fs::metadata(&path).expect("metadata").permissions().mode() & 0o777, 0o600);
    assert_eq!(fs::read_to_string(&path).expect("read"), "tok-2");
}
