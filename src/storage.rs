use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use leptos::logging::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Minimal key-value persistence seam the review store is built against.
/// Backends hold whole serialized blobs; there is no partial update.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl StorageBackend for Box<dyn StorageBackend> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// `window.localStorage`, the durable origin-scoped store the site runs on.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Fails when the origin's storage quota is exhausted
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
    }
}

/// In-memory backend used by tests and by server-side rendering. Clones
/// share the same underlying map, so several store handles can point at one
/// backing store the way several tabs share one `localStorage`.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend the running application uses: browser local storage on wasm,
/// memory everywhere else (server-side rendering never persists reviews).
#[cfg(target_arch = "wasm32")]
pub fn default_backend() -> Box<dyn StorageBackend> {
    match LocalStorageBackend::new() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            warn!("[STORAGE] {e}; reviews will not survive a reload");
            Box::new(MemoryBackend::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_backend() -> Box<dyn StorageBackend> {
    Box::new(MemoryBackend::new())
}
