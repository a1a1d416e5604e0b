//! Click binding — wires the page's toggle control to a [`ThemeController`].

use std::cell::RefCell;
use std::rc::Rc;

use themeswitch_app::services::theme_controller::ThemeController;
use themeswitch_app::settings::ThemeSettings;
use themeswitch_domain::theme::Theme;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::error::{ElementRole, WebError};
use crate::settings::page_settings;
use crate::storage::BrowserStorage;
use crate::surface::{DomSurface, find_element, window_document};

type PageController = ThemeController<BrowserStorage, DomSurface>;

/// Guard that keeps the click listener attached.
///
/// Dropping the guard detaches the listener; [`forget`](Self::forget) keeps it
/// for the lifetime of the page.
pub struct ThemeBinding {
    controller: Rc<RefCell<PageController>>,
    toggle: HtmlElement,
    on_click: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl ThemeBinding {
    /// Resolve every element, apply the persisted theme, and listen for clicks.
    ///
    /// All lookups happen before the page is touched, so a failed bind leaves
    /// the document unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Settings`] for invalid settings,
    /// [`WebError::MissingElement`] when the toggle or an icon is absent, and
    /// [`WebError::Js`] when the browser rejects a selector or the listener.
    pub fn bind(document: &Document, settings: &ThemeSettings) -> Result<Self, WebError> {
        settings.validate()?;
        let surface = DomSurface::bind(document, settings)?;
        let toggle = find_element(document, &settings.toggle_selector, ElementRole::Toggle)?;

        let controller = Rc::new(RefCell::new(ThemeController::init(
            BrowserStorage::local(),
            surface,
            settings,
        )));

        let handler = Rc::clone(&controller);
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            handler.borrow_mut().toggle();
        });
        toggle
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| WebError::js(&err))?;

        tracing::info!(theme = %controller.borrow().theme(), "theme toggle bound");
        Ok(Self {
            controller,
            toggle,
            on_click: Some(on_click),
        })
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.controller.borrow().theme()
    }

    /// Flip the theme as if the control had been clicked.
    pub fn toggle(&self) -> Theme {
        self.controller.borrow_mut().toggle()
    }

    /// Leave the listener attached for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(on_click) = self.on_click.take() {
            on_click.forget();
        }
    }
}

impl Drop for ThemeBinding {
    fn drop(&mut self) {
        if let Some(on_click) = self.on_click.take() {
            let _ = self
                .toggle
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

/// Bind the current page using its embedded settings (or the defaults).
///
/// # Errors
///
/// Returns [`WebError::NoWindow`] / [`WebError::NoDocument`] outside a browser
/// page, plus every error of [`page_settings`] and [`ThemeBinding::bind`].
pub fn bind_page() -> Result<ThemeBinding, WebError> {
    let document = window_document()?;
    let settings = page_settings(&document)?;
    ThemeBinding::bind(&document, &settings)
}
