//! Preference stores: browser `localStorage` and an in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::controller::PreferenceStore;
use crate::error::ThemeError;

/// `window.localStorage`. Reads nothing and writes nothing outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::StorageUnavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(ThemeError::StorageUnavailable),
        Err(e) => Err(ThemeError::Storage(super::js_error_message(&e))),
    }
}

impl PreferenceStore for LocalStorage {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| ThemeError::Storage(super::js_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| ThemeError::Storage(super::js_error_message(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
