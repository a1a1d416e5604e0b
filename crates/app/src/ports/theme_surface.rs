//! Theme surface port — the rendered page the controller projects onto.

use std::rc::Rc;

use themeswitch_domain::icon::{ThemeIcon, Visibility};
use themeswitch_domain::theme::Theme;

/// Where the active theme becomes visible: the root element's theme
/// attribute and the toggle's two icons.
///
/// Surfaces are bound to existing elements up front, so updates cannot fail.
pub trait ThemeSurface {
    /// Set the root element's theme attribute.
    fn apply_theme(&self, theme: Theme);

    /// Show or hide one of the toggle icons.
    fn set_icon(&self, icon: ThemeIcon, visibility: Visibility);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn apply_theme(&self, theme: Theme) {
        (**self).apply_theme(theme);
    }

    fn set_icon(&self, icon: ThemeIcon, visibility: Visibility) {
        (**self).set_icon(icon, visibility);
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for Rc<T> {
    fn apply_theme(&self, theme: Theme) {
        (**self).apply_theme(theme);
    }

    fn set_icon(&self, icon: ThemeIcon, visibility: Visibility) {
        (**self).set_icon(icon, visibility);
    }
}
