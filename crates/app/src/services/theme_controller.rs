//! Theme controller — resolves, applies, toggles, and persists the page theme.

use themeswitch_domain::icon::{ThemeIcon, Visibility};
use themeswitch_domain::theme::Theme;

use crate::ports::{PreferenceStore, ThemeSurface};
use crate::settings::ThemeSettings;

/// Owns the active theme for the lifetime of a page.
///
/// After [`init`](Self::init) and after every [`toggle`](Self::toggle) the
/// surface's theme attribute, the visible icon, and (when storage accepts
/// writes) the persisted value all agree with [`theme`](Self::theme).
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    storage_key: String,
    current: Theme,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Resolve the persisted theme, apply it to `surface`, and sync the icons.
    ///
    /// Nothing is written to the store during initialization.
    pub fn init(store: S, surface: D, settings: &ThemeSettings) -> Self {
        let current = resolve_theme(&store, &settings.storage_key, settings.default_theme);
        tracing::debug!(theme = %current, "theme resolved");

        let controller = Self {
            store,
            surface,
            storage_key: settings.storage_key.clone(),
            current,
        };
        controller.surface.apply_theme(current);
        controller.sync_display();
        controller
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flip the theme, apply it, persist it, then sync the icons.
    ///
    /// A rejected write is logged and otherwise ignored: the page keeps the new
    /// theme while storage keeps the old one until the next reload.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.surface.apply_theme(self.current);
        if let Err(err) = self.store.save(&self.storage_key, self.current.as_str()) {
            tracing::warn!(
                error = %err,
                key = %self.storage_key,
                theme = %self.current,
                "failed to persist theme"
            );
        }
        self.sync_display();
        tracing::debug!(theme = %self.current, "theme toggled");
        self.current
    }

    fn sync_display(&self) {
        for icon in ThemeIcon::ALL {
            self.surface.set_icon(icon, Visibility::of(icon, self.current));
        }
    }
}

fn resolve_theme<S: PreferenceStore>(store: &S, key: &str, fallback: Theme) -> Theme {
    match store.load(key) {
        Ok(Some(value)) if value.is_empty() => fallback,
        Ok(Some(value)) => match value.parse::<Theme>() {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(error = %err, key, "ignoring persisted theme");
                fallback
            }
        },
        Ok(None) => fallback,
        Err(err) => {
            tracing::debug!(error = %err, key, "persisted theme unreadable, using default");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use themeswitch_domain::error::ThemeSwitchError;

    #[derive(Default)]
    struct InMemoryStore {
        values: RefCell<HashMap<String, String>>,
        fail_reads: bool,
        fail_writes: bool,
        writes: Cell<usize>,
    }

    impl InMemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for InMemoryStore {
        fn load(&self, key: &str) -> Result<Option<String>, ThemeSwitchError> {
            if self.fail_reads {
                return Err(ThemeSwitchError::Storage(Box::new(std::io::Error::other(
                    "storage disabled",
                ))));
            }
            Ok(self.get(key))
        }

        fn save(&self, key: &str, value: &str) -> Result<(), ThemeSwitchError> {
            if self.fail_writes {
                return Err(ThemeSwitchError::Storage(Box::new(std::io::Error::other(
                    "quota exceeded",
                ))));
            }
            self.writes.set(self.writes.get() + 1);
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        attribute: Cell<Option<Theme>>,
        light_icon: Cell<Option<Visibility>>,
        dark_icon: Cell<Option<Visibility>>,
    }

    impl RecordingSurface {
        fn shown_icons(&self) -> Vec<ThemeIcon> {
            let mut shown = Vec::new();
            if self.light_icon.get() == Some(Visibility::Shown) {
                shown.push(ThemeIcon::LightMode);
            }
            if self.dark_icon.get() == Some(Visibility::Shown) {
                shown.push(ThemeIcon::DarkMode);
            }
            shown
        }
    }

    impl ThemeSurface for RecordingSurface {
        fn apply_theme(&self, theme: Theme) {
            self.attribute.set(Some(theme));
        }

        fn set_icon(&self, icon: ThemeIcon, visibility: Visibility) {
            match icon {
                ThemeIcon::LightMode => self.light_icon.set(Some(visibility)),
                ThemeIcon::DarkMode => self.dark_icon.set(Some(visibility)),
            }
        }
    }

    fn make_controller<'a>(
        store: &'a InMemoryStore,
        surface: &'a RecordingSurface,
    ) -> ThemeController<&'a InMemoryStore, &'a RecordingSurface> {
        ThemeController::init(store, surface, &ThemeSettings::default())
    }

    #[test]
    fn should_default_to_light_when_nothing_persisted() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();

        let controller = make_controller(&store, &surface);

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(surface.attribute.get(), Some(Theme::Light));
        assert_eq!(surface.light_icon.get(), Some(Visibility::Shown));
        assert_eq!(surface.dark_icon.get(), Some(Visibility::Hidden));
    }

    #[test]
    fn should_restore_dark_when_persisted() {
        let store = InMemoryStore::with("theme", "dark");
        let surface = RecordingSurface::default();

        let controller = make_controller(&store, &surface);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(surface.attribute.get(), Some(Theme::Dark));
        assert_eq!(surface.dark_icon.get(), Some(Visibility::Shown));
        assert_eq!(surface.light_icon.get(), Some(Visibility::Hidden));
    }

    #[test]
    fn should_not_write_during_init() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();

        let _controller = make_controller(&store, &surface);

        assert_eq!(store.writes.get(), 0);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn should_fall_back_to_default_when_persisted_value_is_empty() {
        let store = InMemoryStore::with("theme", "");
        let surface = RecordingSurface::default();

        let controller = make_controller(&store, &surface);

        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn should_fall_back_to_default_when_persisted_value_is_unknown() {
        let store = InMemoryStore::with("theme", "sepia");
        let surface = RecordingSurface::default();

        let controller = make_controller(&store, &surface);

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(surface.attribute.get(), Some(Theme::Light));
    }

    #[test]
    fn should_fall_back_to_default_when_storage_unreadable() {
        let store = InMemoryStore {
            fail_reads: true,
            ..InMemoryStore::default()
        };
        let surface = RecordingSurface::default();

        let controller = make_controller(&store, &surface);

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(surface.shown_icons(), vec![ThemeIcon::LightMode]);
    }

    #[test]
    fn should_use_configured_default_theme() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();
        let settings = ThemeSettings {
            default_theme: Theme::Dark,
            ..ThemeSettings::default()
        };

        let controller = ThemeController::init(&store, &surface, &settings);

        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn should_read_and_write_configured_storage_key() {
        let store = InMemoryStore::with("site-theme", "dark");
        let surface = RecordingSurface::default();
        let settings = ThemeSettings {
            storage_key: "site-theme".to_string(),
            ..ThemeSettings::default()
        };

        let mut controller = ThemeController::init(&store, &surface, &settings);
        assert_eq!(controller.theme(), Theme::Dark);

        controller.toggle();
        assert_eq!(store.get("site-theme").as_deref(), Some("light"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn should_flip_theme_on_toggle() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();
        let mut controller = make_controller(&store, &surface);

        let toggled = controller.toggle();

        assert_eq!(toggled, Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(surface.attribute.get(), Some(Theme::Dark));
    }

    #[test]
    fn should_restore_start_after_two_toggles() {
        for start in [Theme::Light, Theme::Dark] {
            let store = InMemoryStore::with("theme", start.as_str());
            let surface = RecordingSurface::default();
            let mut controller = make_controller(&store, &surface);

            assert_eq!(controller.toggle(), start.toggled());
            assert_eq!(controller.toggle(), start);
            assert_eq!(surface.attribute.get(), Some(start));
        }
    }

    #[test]
    fn should_persist_new_theme_after_every_toggle() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();
        let mut controller = make_controller(&store, &surface);

        for _ in 0..4 {
            let theme = controller.toggle();
            assert_eq!(store.get("theme").as_deref(), Some(theme.as_str()));
        }
        assert_eq!(store.writes.get(), 4);
    }

    #[test]
    fn should_show_exactly_one_icon_after_every_update() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();
        let mut controller = make_controller(&store, &surface);
        assert_eq!(surface.shown_icons(), vec![ThemeIcon::LightMode]);

        for _ in 0..3 {
            let theme = controller.toggle();
            assert_eq!(surface.shown_icons(), vec![ThemeIcon::for_theme(theme)]);
        }
    }

    /// Store and surface writing into one shared call log.
    #[derive(Clone, Default)]
    struct CallLog(Rc<RefCell<Vec<&'static str>>>);

    impl CallLog {
        fn push(&self, call: &'static str) {
            self.0.borrow_mut().push(call);
        }

        fn take(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl PreferenceStore for CallLog {
        fn load(&self, _key: &str) -> Result<Option<String>, ThemeSwitchError> {
            self.push("load");
            Ok(None)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), ThemeSwitchError> {
            self.push("save");
            Ok(())
        }
    }

    impl ThemeSurface for CallLog {
        fn apply_theme(&self, _theme: Theme) {
            self.push("apply");
        }

        fn set_icon(&self, _icon: ThemeIcon, _visibility: Visibility) {
            self.push("icon");
        }
    }

    #[test]
    fn should_load_then_apply_then_sync_icons_on_init() {
        let log = CallLog::default();

        let _controller =
            ThemeController::init(log.clone(), log.clone(), &ThemeSettings::default());

        assert_eq!(log.take(), vec!["load", "apply", "icon", "icon"]);
    }

    #[test]
    fn should_apply_then_persist_then_sync_icons_on_toggle() {
        let log = CallLog::default();
        let mut controller =
            ThemeController::init(log.clone(), log.clone(), &ThemeSettings::default());
        log.take();

        controller.toggle();

        assert_eq!(log.take(), vec!["apply", "save", "icon", "icon"]);
    }

    #[test]
    fn should_keep_new_theme_when_write_fails() {
        let store = InMemoryStore {
            fail_writes: true,
            ..InMemoryStore::with("theme", "light")
        };
        let surface = RecordingSurface::default();
        let mut controller = make_controller(&store, &surface);

        let toggled = controller.toggle();

        assert_eq!(toggled, Theme::Dark);
        assert_eq!(surface.attribute.get(), Some(Theme::Dark));
        assert_eq!(surface.shown_icons(), vec![ThemeIcon::DarkMode]);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn should_follow_load_click_click_scenario() {
        let store = InMemoryStore::default();
        let surface = RecordingSurface::default();
        let mut controller = make_controller(&store, &surface);
        assert_eq!(controller.theme(), Theme::Light);

        controller.toggle();
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(surface.shown_icons(), vec![ThemeIcon::DarkMode]);

        controller.toggle();
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(surface.shown_icons(), vec![ThemeIcon::LightMode]);
    }

    #[test]
    fn should_restore_persisted_choice_on_next_load() {
        let store = InMemoryStore::default();
        {
            let surface = RecordingSurface::default();
            let mut controller = make_controller(&store, &surface);
            controller.toggle();
        }

        let surface = RecordingSurface::default();
        let controller = make_controller(&store, &surface);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(surface.shown_icons(), vec![ThemeIcon::DarkMode]);
    }
}
