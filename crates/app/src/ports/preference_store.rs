//! Preference store port — durable client-local key/value storage.

use std::rc::Rc;

use themeswitch_domain::error::ThemeSwitchError;

/// Durable string storage surviving page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Storage`] when the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeSwitchError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeSwitchError::Storage`] when the backing store rejects the
    /// write (disabled, sandboxed, or over quota).
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeSwitchError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeSwitchError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeSwitchError> {
        (**self).save(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeSwitchError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeSwitchError> {
        (**self).save(key, value)
    }
}
