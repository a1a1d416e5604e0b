//! Page-embedded settings.
//!
//! A page may override the defaults with a JSON block:
//!
//! ```html
//! <script type="application/json" id="themeswitch-settings">
//!   { "storage_key": "site-theme" }
//! </script>
//! ```

use themeswitch_app::settings::ThemeSettings;
use web_sys::Document;

use crate::error::WebError;

/// Id of the element holding page settings.
pub const SETTINGS_ELEMENT_ID: &str = "themeswitch-settings";

/// Read settings from the page, falling back to defaults when none are embedded.
///
/// # Errors
///
/// Returns [`WebError::Settings`] when the embedded JSON is malformed or invalid.
pub fn page_settings(document: &Document) -> Result<ThemeSettings, WebError> {
    let embedded = document
        .get_element_by_id(SETTINGS_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match embedded {
        Some(json) if !json.trim().is_empty() => Ok(ThemeSettings::from_json(&json)?),
        _ => Ok(ThemeSettings::default()),
    }
}
