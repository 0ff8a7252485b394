use super::{KeyValueStore, StoreError};

pub const BRAND_KEY: &str = "user-brand-logo";

/// Holds the single uploaded header image as a data URL. No history.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandStore<S> {
    backend: S,
}

impl<S: KeyValueStore> BrandStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn get(&self) -> Option<String> {
        self.backend.read(BRAND_KEY).filter(|v| !v.is_empty())
    }

    /// Replaces whatever was stored before.
    pub fn set(&self, data_url: &str) -> Result<(), StoreError> {
        self.backend.write(BRAND_KEY, data_url)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(BRAND_KEY)
    }
}
