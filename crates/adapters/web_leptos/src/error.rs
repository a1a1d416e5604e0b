//! Browser adapter error types.

use themeswitch_app::settings::SettingsError;
use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::icon::ThemeIcon;
use wasm_bindgen::JsValue;

/// Which part of the page markup an element plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// The document's root element carrying the theme attribute.
    Root,
    /// The clickable control flipping the theme.
    Toggle,
    /// One of the two toggle icons.
    Icon(ThemeIcon),
}

impl std::fmt::Display for ElementRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => f.write_str("root element"),
            Self::Toggle => f.write_str("theme toggle"),
            Self::Icon(icon) => std::fmt::Display::fmt(icon, f),
        }
    }
}

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// A required element is absent from the page.
    #[error("{role} not found (selector {selector:?})")]
    MissingElement {
        role: ElementRole,
        selector: String,
    },

    /// `localStorage` is disabled or sandboxed.
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),

    /// The page carries unusable settings.
    #[error("invalid page settings")]
    Settings(#[from] SettingsError),
}

impl WebError {
    /// Capture a thrown JS value.
    pub fn js(value: &JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }

    /// Convert into a [`ThemeSwitchError::Storage`] for propagation across port
    /// boundaries.
    pub fn into_domain(self) -> ThemeSwitchError {
        ThemeSwitchError::Storage(Box::new(self))
    }
}

impl From<WebError> for ThemeSwitchError {
    fn from(err: WebError) -> Self {
        err.into_domain()
    }
}
