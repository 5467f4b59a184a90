use super::*;
use crate::net::types::Role;

fn subject(name: &str, role: Role) -> Subject {
    Subject { name: name.to_owned(), role, email: None }
}

fn memory_store() -> MemorySessionStore {
    MemorySessionStore::default()
}

/// Backend that accepts the user record but rejects the credential write.
#[derive(Default)]
struct RejectTokenWrites {
    inner: MemoryStorage,
}

impl StorageBackend for RejectTokenWrites {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == TOKEN_KEY {
            return Err(StorageError::WriteRejected { key: key.to_owned() });
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

// =============================================================
// save / read
// =============================================================

#[test]
fn read_on_empty_store_is_absent() {
    assert_eq!(memory_store().read(), None);
}

#[test]
fn save_then_read_returns_saved_pair() {
    let store = memory_store();
    let sam = subject("Sam", Role::Donor);
    store.save("abc", &sam);
    assert_eq!(store.read(), Some(Session { credential: "abc".to_owned(), subject: sam }));
}

#[test]
fn save_overwrites_prior_session() {
    let store = memory_store();
    store.save("abc", &subject("Sam", Role::Donor));
    store.save("xyz", &subject("Ada", Role::Admin));
    let session = store.read().unwrap();
    assert_eq!(session.credential, "xyz");
    assert_eq!(session.subject.name, "Ada");
    assert_eq!(session.subject.role, Role::Admin);
}

#[test]
fn save_writes_subject_as_json_under_user_key() {
    let store = memory_store();
    store.save("abc", &subject("Sam", Role::Donor));
    assert_eq!(store.backend().get_item(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(
        store.backend().get_item(USER_KEY).as_deref(),
        Some(r#"{"name":"Sam","role":"donor"}"#)
    );
}

#[test]
fn rejected_write_leaves_no_partial_session() {
    let store = KeyValueSessionStore::new(RejectTokenWrites::default());
    store.save("abc", &subject("Sam", Role::Donor));
    assert_eq!(store.read(), None);
    assert_eq!(store.backend().get_item(USER_KEY), None);
    assert_eq!(store.backend().get_item(TOKEN_KEY), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_both_keys() {
    let store = memory_store();
    store.save("abc", &subject("Sam", Role::Donor));
    store.clear();
    assert_eq!(store.read(), None);
    assert_eq!(store.backend().get_item(TOKEN_KEY), None);
    assert_eq!(store.backend().get_item(USER_KEY), None);
}

#[test]
fn clear_twice_stays_absent() {
    let store = memory_store();
    store.save("abc", &subject("Sam", Role::Donor));
    store.clear();
    assert_eq!(store.read(), None);
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clear_on_empty_store_is_noop() {
    let store = memory_store();
    store.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// Corrupted / partial state
// =============================================================

#[test]
fn unparsable_user_record_reads_as_absent() {
    let store = memory_store();
    store.save("abc", &subject("Sam", Role::Donor));
    store.backend().set_item(USER_KEY, "{not json").unwrap();
    assert_eq!(store.read(), None);
}

#[test]
fn literal_undefined_user_record_reads_as_absent() {
    let store = memory_store();
    store.backend().set_item(TOKEN_KEY, "abc").unwrap();
    store.backend().set_item(USER_KEY, "undefined").unwrap();
    assert_eq!(store.read(), None);
}

#[test]
fn unknown_role_reads_as_absent() {
    let store = memory_store();
    store.backend().set_item(TOKEN_KEY, "abc").unwrap();
    store.backend().set_item(USER_KEY, r#"{"name":"Eve","role":"root"}"#).unwrap();
    assert_eq!(store.read(), None);
}

#[test]
fn credential_without_user_reads_as_absent() {
    let store = memory_store();
    store.backend().set_item(TOKEN_KEY, "abc").unwrap();
    assert_eq!(store.read(), None);
}

#[test]
fn user_without_credential_reads_as_absent() {
    let store = memory_store();
    store.backend().set_item(USER_KEY, r#"{"name":"Sam","role":"donor"}"#).unwrap();
    assert_eq!(store.read(), None);
}

#[test]
fn empty_credential_reads_as_absent() {
    assert_eq!(
        decode_session(Some(String::new()), Some(r#"{"name":"Sam","role":"donor"}"#.to_owned())),
        None
    );
}

#[test]
fn decode_session_accepts_extra_user_fields() {
    let session = decode_session(
        Some("abc".to_owned()),
        Some(r#"{"_id":"1","name":"Ada","role":"admin","email":"ada@example.com"}"#.to_owned()),
    )
    .unwrap();
    assert_eq!(session.subject.role, Role::Admin);
    assert_eq!(session.subject.email.as_deref(), Some("ada@example.com"));
}

// =============================================================
// Browser backend outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_and_rejects_writes_off_browser() {
    let store = BrowserSessionStore::default();
    store.save("abc", &subject("Sam", Role::Donor));
    assert_eq!(store.read(), None);
    store.clear();
    assert_eq!(LocalStorage.set_item(TOKEN_KEY, "abc"), Err(StorageError::Unavailable));
}
