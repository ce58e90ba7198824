use chroma_core::{ChromaError, SettingsStore};
use web_sys as web;

/// `SettingsStore` backed by `window.localStorage`. Reads fall back to
/// `None` when storage is unavailable (private mode, sandboxed iframes).
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl SettingsStore for LocalStorageStore {
    fn read_raw(&self) -> Option<String> {
        local_storage()?.get_item(self.key).ok().flatten()
    }

    fn write_raw(&mut self, json: &str) -> chroma_core::Result<()> {
        let storage = local_storage()
            .ok_or_else(|| ChromaError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(self.key, json)
            .map_err(|e| ChromaError::Storage(format!("{:?}", e)))
    }
}

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}
