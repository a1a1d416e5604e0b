//! Settings — storage key, DOM selectors, and the fallback theme.
//!
//! Every field has a sensible default matching the stock page markup, so
//! settings are optional. When provided they arrive as a JSON document and are
//! validated before use.

use serde::Deserialize;
use themeswitch_domain::theme::Theme;

/// Controller and DOM binding settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    /// Key under which the theme is persisted.
    pub storage_key: String,
    /// Attribute set on the root element (e.g. `data-theme`).
    pub root_attribute: String,
    /// CSS selector of the clickable toggle control.
    pub toggle_selector: String,
    /// CSS selector of the icon shown while the light theme is active.
    pub light_icon_selector: String,
    /// CSS selector of the icon shown while the dark theme is active.
    pub dark_icon_selector: String,
    /// Theme used when nothing usable is persisted.
    pub default_theme: Theme,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            root_attribute: "data-theme".to_string(),
            toggle_selector: ".theme-btn".to_string(),
            light_icon_selector: ".light-mode".to_string(),
            dark_icon_selector: ".dark-mode".to_string(),
            default_theme: Theme::Light,
        }
    }
}

impl ThemeSettings {
    /// Parse settings from JSON, then validate them.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] on malformed JSON or unknown fields,
    /// and [`SettingsError::Validation`] when a value is unusable.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every field can be used against a live document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] describing the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("root_attribute", &self.root_attribute),
            ("toggle_selector", &self.toggle_selector),
            ("light_icon_selector", &self.light_icon_selector),
            ("dark_icon_selector", &self.dark_icon_selector),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SettingsError::Validation(format!("{name} must not be empty")));
        }
        if self.root_attribute.chars().any(char::is_whitespace) {
            return Err(SettingsError::Validation(
                "root_attribute must not contain whitespace".to_string(),
            ));
        }
        if self.light_icon_selector == self.dark_icon_selector {
            return Err(SettingsError::Validation(
                "light and dark icon selectors must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// JSON parse failure.
    #[error("failed to parse theme settings")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid theme settings: {0}")]
    Validation(String),
}
