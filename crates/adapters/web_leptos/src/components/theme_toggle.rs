//! Dark/light theme toggle button rendered by Leptos.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use themeswitch_app::ports::ThemeSurface;
use themeswitch_app::services::theme_controller::ThemeController;
use themeswitch_app::settings::ThemeSettings;
use themeswitch_domain::icon::{ThemeIcon, Visibility};
use themeswitch_domain::theme::Theme;

use crate::error::WebError;
use crate::storage::BrowserStorage;
use crate::surface::{document_root, window_document};

/// Surface that sets the root attribute directly and feeds icon visibility
/// into signals read by the view.
struct SignalSurface {
    root: web_sys::Element,
    root_attribute: String,
    light_icon: WriteSignal<Visibility>,
    dark_icon: WriteSignal<Visibility>,
}

impl SignalSurface {
    /// Resolve the root element of `document`; the icons are rendered by the
    /// component itself.
    fn bind(
        document: &web_sys::Document,
        settings: &ThemeSettings,
        light_icon: WriteSignal<Visibility>,
        dark_icon: WriteSignal<Visibility>,
    ) -> Result<Self, WebError> {
        Ok(Self {
            root: document_root(document)?,
            root_attribute: settings.root_attribute.clone(),
            light_icon,
            dark_icon,
        })
    }
}

impl ThemeSurface for SignalSurface {
    fn apply_theme(&self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.root_attribute, theme.as_str()) {
            leptos::logging::warn!("failed to set {}: {err:?}", self.root_attribute);
        }
    }

    fn set_icon(&self, icon: ThemeIcon, visibility: Visibility) {
        match icon {
            ThemeIcon::LightMode => self.light_icon.set(visibility),
            ThemeIcon::DarkMode => self.dark_icon.set(visibility),
        }
    }
}

/// A toggle button that switches between light and dark themes.
///
/// Renders the same markup the page binding expects (`.theme-btn` holding
/// `.light-mode` and `.dark-mode` icons). Reads [`ThemeSettings`] from context
/// when provided, the defaults otherwise.
///
/// A document without a root element aborts rendering with a thrown error.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let settings = use_context::<ThemeSettings>().unwrap_or_default();
    let (light_icon, set_light_icon) = signal(Visibility::Hidden);
    let (dark_icon, set_dark_icon) = signal(Visibility::Hidden);

    let surface = window_document()
        .and_then(|document| {
            SignalSurface::bind(&document, &settings, set_light_icon, set_dark_icon)
        })
        .unwrap_or_else(|err| {
            leptos::logging::error!("theme toggle unavailable: {err}");
            wasm_bindgen::throw_str(&err.to_string())
        });
    let controller = Rc::new(RefCell::new(ThemeController::init(
        BrowserStorage::local(),
        surface,
        &settings,
    )));

    let toggle = move |_| {
        controller.borrow_mut().toggle();
    };

    view! {
        <button class="theme-btn" on:click=toggle title="Toggle theme">
            <span class="light-mode" style:display=move || light_icon.get().css_display()>
                "\u{2600}"
            </span>
            <span class="dark-mode" style:display=move || dark_icon.get().css_display()>
                "\u{263E}"
            </span>
        </button>
    }
}
