use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use secrecy::{ExposeSecret, SecretString};

use crate::StorageError;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_EMAIL_KEY: &str = "user_email";

/// Durable string key/value storage backing the session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-process storage. Used in tests and on targets without browser storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Narrow get/set/clear contract over the persisted `access_token` and
/// `user_email` entries. Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// Writes both entries or neither: a failed email write rolls the token
    /// back so a half-written session never passes the guard.
    pub fn set_session(&self, token: &SecretString, user_label: &str) -> Result<(), StorageError> {
        self.storage.set(ACCESS_TOKEN_KEY, token.expose_secret())?;
        if let Err(error) = self.storage.set(USER_EMAIL_KEY, user_label) {
            self.storage.remove(ACCESS_TOKEN_KEY);
            return Err(error);
        }
        Ok(())
    }

    pub fn token(&self) -> Option<SecretString> {
        self.storage
            .get(ACCESS_TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .map(SecretString::from)
    }

    pub fn user_label(&self) -> Option<String> {
        self.storage.get(USER_EMAIL_KEY)
    }

    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(USER_EMAIL_KEY);
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.token().is_some())
            .finish()
    }
}

// Stores are equal when they share a backend, which is all Dioxus props need.
impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

pub(crate) mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::new("quota exceeded"))
        }

        fn remove(&self, _key: &str) {}
    }

    /// Accepts the first write, then reports the quota as exhausted.
    #[derive(Default)]
    struct QuotaStorage {
        inner: MemoryStorage,
        writes: std::cell::Cell<usize>,
    }

    impl SessionStorage for QuotaStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let writes = self.writes.get() + 1;
            self.writes.set(writes);
            if writes > 1 {
                return Err(StorageError::new("quota exceeded"));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    fn token(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn set_session_writes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.set_session(&token("abc"), "admin@befit.com").unwrap();

        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(storage.get(USER_EMAIL_KEY).as_deref(), Some("admin@befit.com"));
        assert_eq!(store.token().unwrap().expose_secret(), "abc");
        assert_eq!(store.user_label().as_deref(), Some("admin@befit.com"));
    }

    #[test]
    fn clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.set_session(&token("abc"), "admin@befit.com").unwrap();

        store.clear();

        assert!(storage.is_empty());
        assert!(store.token().is_none());
        assert!(store.user_label().is_none());
    }

    #[test]
    fn empty_token_is_absent() {
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "").unwrap();

        assert!(SessionStore::new(storage).token().is_none());
    }

    #[test]
    fn token_is_opaque() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(&token("not a jwt at all"), "x").unwrap();

        assert_eq!(store.token().unwrap().expose_secret(), "not a jwt at all");
    }

    #[test]
    fn failed_write_surfaces_error() {
        let store = SessionStore::new(ReadOnlyStorage);
        let err = store.set_session(&token("abc"), "a@b.c").unwrap_err();

        assert_eq!(err.message, "quota exceeded");
        assert!(store.token().is_none());
    }

    #[test]
    fn failed_email_write_rolls_back_token() {
        let storage = QuotaStorage::default();
        let inner = storage.inner.clone();
        let store = SessionStore::new(storage);

        let err = store.set_session(&token("abc"), "a@b.c").unwrap_err();

        assert_eq!(err.message, "quota exceeded");
        assert!(store.token().is_none());
        assert!(store.user_label().is_none());
        assert!(inner.is_empty());
    }

    #[test]
    fn clones_share_backend() {
        let store = SessionStore::new(MemoryStorage::new());
        let other = store.clone();
        store.set_session(&token("abc"), "a@b.c").unwrap();

        assert_eq!(store, other);
        assert!(other.token().is_some());
        assert_ne!(store, SessionStore::new(MemoryStorage::new()));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(&token("supersecret"), "a@b.c").unwrap();

        assert!(!format!("{store:?}").contains("supersecret"));
    }
}
