//! Where the session mirror lives on each platform.
//!
//! In the browser that is `window.localStorage`; everywhere else (server
//! render, desktop) an in-process map that starts empty.

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage as PlatformStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use access::MemoryStorage as PlatformStorage;

pub fn platform_storage() -> PlatformStorage {
    PlatformStorage::default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use access::KeyValueStore;
    use shared_types::StorageError;
    use wasm_bindgen::JsValue;

    /// `window.localStorage`. Every operation re-acquires the handle, so a
    /// storage that is unavailable (private mode, sandboxed iframe) behaves
    /// as empty and rejects writes.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn local() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    fn describe(value: JsValue) -> String {
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"))
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::local()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = Self::local().ok_or_else(|| StorageError {
                key: key.to_string(),
                message: "localStorage is unavailable".into(),
            })?;
            storage.set_item(key, value).map_err(|e| StorageError {
                key: key.to_string(),
                message: describe(e),
            })
        }

        fn remove(&mut self, key: &str) {
            if let Some(storage) = Self::local() {
                if let Err(e) = storage.remove_item(key) {
                    tracing::warn!(key, error = %describe(e), "Failed to remove storage key");
                }
            }
        }
    }
}
