//! DOM surface — the page's root element and the two toggle icons.

use themeswitch_app::ports::ThemeSurface;
use themeswitch_app::settings::ThemeSettings;
use themeswitch_domain::icon::{ThemeIcon, Visibility};
use themeswitch_domain::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{ElementRole, WebError};

/// Theme surface bound to existing page elements.
pub struct DomSurface {
    root: Element,
    root_attribute: String,
    light_icon: HtmlElement,
    dark_icon: HtmlElement,
}

impl DomSurface {
    /// Resolve the root element and both icons.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::MissingElement`] when an icon (or the root) is absent,
    /// or [`WebError::Js`] when a selector is rejected by the browser.
    pub fn bind(document: &Document, settings: &ThemeSettings) -> Result<Self, WebError> {
        let root = document_root(document)?;
        let light_icon = find_element(
            document,
            &settings.light_icon_selector,
            ElementRole::Icon(ThemeIcon::LightMode),
        )?;
        let dark_icon = find_element(
            document,
            &settings.dark_icon_selector,
            ElementRole::Icon(ThemeIcon::DarkMode),
        )?;
        Ok(Self {
            root,
            root_attribute: settings.root_attribute.clone(),
            light_icon,
            dark_icon,
        })
    }

    fn icon(&self, icon: ThemeIcon) -> &HtmlElement {
        match icon {
            ThemeIcon::LightMode => &self.light_icon,
            ThemeIcon::DarkMode => &self.dark_icon,
        }
    }
}

impl ThemeSurface for DomSurface {
    fn apply_theme(&self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.root_attribute, theme.as_str()) {
            tracing::warn!(
                error = %WebError::js(&err),
                attribute = %self.root_attribute,
                "failed to set theme attribute"
            );
        }
    }

    fn set_icon(&self, icon: ThemeIcon, visibility: Visibility) {
        if let Err(err) = self
            .icon(icon)
            .style()
            .set_property("display", visibility.css_display())
        {
            tracing::warn!(error = %WebError::js(&err), %icon, "failed to update icon");
        }
    }
}

/// The current window's document.
pub(crate) fn window_document() -> Result<Document, WebError> {
    web_sys::window()
        .ok_or(WebError::NoWindow)?
        .document()
        .ok_or(WebError::NoDocument)
}

/// The element carrying the theme attribute.
pub(crate) fn document_root(document: &Document) -> Result<Element, WebError> {
    document
        .document_element()
        .ok_or_else(|| WebError::MissingElement {
            role: ElementRole::Root,
            selector: ":root".to_string(),
        })
}

/// Find the first element matching `selector`.
///
/// Icons are frequently inline `<svg>`; both HTML and SVG elements expose
/// `style`, so the match is not checked against `HTMLElement`.
pub(crate) fn find_element(
    document: &Document,
    selector: &str,
    role: ElementRole,
) -> Result<HtmlElement, WebError> {
    document
        .query_selector(selector)
        .map_err(|err| WebError::js(&err))?
        .map(|el| el.unchecked_into::<HtmlElement>())
        .ok_or_else(|| WebError::MissingElement {
            role,
            selector: selector.to_string(),
        })
}
