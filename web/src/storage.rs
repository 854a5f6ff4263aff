use types::{MemoryStorage, SessionStore};

/// The session store for this page: `window.localStorage` when the browser
/// offers it, otherwise a store that lives only as long as the page.
pub fn session_store() -> SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local::LocalStorage::open() {
            return SessionStore::new(storage);
        }
    }

    tracing::warn!("browser storage unavailable, session will not survive a reload");
    SessionStore::new(MemoryStorage::new())
}

#[cfg(target_arch = "wasm32")]
mod local {
    use types::{SessionStorage, StorageError};
    use web_sys::Storage;

    pub struct LocalStorage {
        storage: Storage,
    }

    impl LocalStorage {
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok()??;
            Some(Self { storage })
        }
    }

    impl SessionStorage for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::new(format!("{e:?}")))
        }

        fn remove(&self, key: &str) {
            if let Err(error) = self.storage.remove_item(key) {
                tracing::warn!(?error, key, "failed to remove session entry");
            }
        }
    }
}
