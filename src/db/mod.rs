//! Persistence of the audio session across page loads.

mod session;

pub use session::{display_name, file_name, format_position, qualify, SessionState};

use crate::config::StorageKeys;
use crate::error::SiteError;
use std::cell::RefCell;
use std::collections::HashMap;

/// String key-value storage with browser `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        (**self).set(key, value)
    }
}

/// Page-lifetime store, used when the browser refuses local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{open_store, AnyStore};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, MemoryStore};
    use crate::error::SiteError;
    use gloo_storage::{LocalStorage, Storage as _};
    use web_sys::{window, Storage};

    /// `window.localStorage`, holding plain strings so the entries stay
    /// readable by the legacy page script.
    pub struct BrowserStore {
        storage: Storage,
    }

    impl BrowserStore {
        /// `LocalStorage::raw` throws when storage is disabled, so check first.
        pub fn open() -> Option<Self> {
            window()?.local_storage().ok()??;
            Some(Self {
                storage: LocalStorage::raw(),
            })
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| SiteError::Storage(SiteError::from(err).to_string()))
        }
    }

    pub enum AnyStore {
        Browser(BrowserStore),
        Memory(MemoryStore),
    }

    impl KeyValueStore for AnyStore {
        fn get(&self, key: &str) -> Option<String> {
            match self {
                AnyStore::Browser(store) => store.get(key),
                AnyStore::Memory(store) => store.get(key),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
            match self {
                AnyStore::Browser(store) => store.set(key, value),
                AnyStore::Memory(store) => store.set(key, value),
            }
        }
    }

    /// Local storage when available, otherwise an in-memory fallback.
    pub fn open_store() -> AnyStore {
        match BrowserStore::open() {
            Some(store) => AnyStore::Browser(store),
            None => AnyStore::Memory(MemoryStore::default()),
        }
    }
}

/// Reads and writes the three session entries.
pub struct SessionStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn load(&self) -> SessionState {
        SessionState::decode(
            self.store.get(&self.keys.source),
            self.store.get(&self.keys.time),
            self.store.get(&self.keys.playing),
        )
    }

    /// An explicit play request always starts the file from zero.
    pub fn save_trigger(&self, source: &str) -> Result<(), SiteError> {
        self.store.set(&self.keys.source, source)?;
        self.store.set(&self.keys.playing, "true")?;
        self.store.set(&self.keys.time, &format_position(0.0))
    }

    pub fn save_progress(&self, position: f64, current_src: &str) -> Result<(), SiteError> {
        self.store.set(&self.keys.time, &format_position(position))?;
        self.store.set(&self.keys.source, file_name(current_src))
    }

    pub fn save_unload(
        &self,
        position: f64,
        paused: bool,
        current_src: &str,
    ) -> Result<(), SiteError> {
        self.store.set(&self.keys.time, &format_position(position))?;
        self.store
            .set(&self.keys.playing, if paused { "false" } else { "true" })?;
        self.store.set(&self.keys.source, file_name(current_src))
    }

    #[cfg(test)]
    pub fn raw(&self) -> &S {
        &self.store
    }
}
