//! Persistence boundary. Screens reach `localStorage` only through the stores here.

pub mod brand;
pub mod scores;

pub use brand::BrandStore;
pub use scores::ScoreStore;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("writing {key:?} failed: {detail}")]
    Write { key: String, detail: String },
    #[error("could not encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Keeps the browser's own message (`QuotaExceededError` and friends) rather than the raw value.
    fn write(key: &str, err: &JsValue) -> Self {
        let detail = err
            .as_string()
            .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{err:?}"));
        Self::Write {
            key: key.to_string(),
            detail,
        }
    }
}

/// String key/value backend. Reads never fail; a missing or broken backend reads as empty.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Browser `localStorage`, or nothing when the page has it disabled.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage unavailable; scores and brand will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.inner.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::write(key, &e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::write(key, &e))
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::{KeyValueStore, StoreError};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Test backend; clones share the same map.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStorage {
        /// Rejects every write, like a full or disabled `localStorage`.
        pub fn read_only() -> Self {
            Self {
                read_only: true,
                ..Default::default()
            }
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.raw(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.read_only {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    detail: "QuotaExceededError".into(),
                });
            }
            self.put_raw(key, value);
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            if self.read_only {
                return Err(StoreError::Unavailable);
            }
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}
