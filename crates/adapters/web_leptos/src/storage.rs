//! `localStorage`-backed preference store.

use themeswitch_app::ports::PreferenceStore;
use themeswitch_domain::error::ThemeSwitchError;

use crate::error::WebError;

/// Preference store over the window's `localStorage`.
///
/// When storage is disabled or sandboxed, reads report nothing persisted and
/// writes fail with [`WebError::StorageUnavailable`].
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Open the current window's `localStorage`.
    pub fn local() -> Self {
        let store = Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        };
        if !store.is_available() {
            tracing::debug!("localStorage unavailable, theme choices will not persist");
        }
        store
    }

    /// Whether writes can reach a backing store.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeSwitchError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|err| WebError::js(&err).into_domain())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeSwitchError> {
        let Some(storage) = &self.storage else {
            return Err(WebError::StorageUnavailable.into_domain());
        };
        storage
            .set_item(key, value)
            .map_err(|err| WebError::js(&err).into_domain())
    }
}
