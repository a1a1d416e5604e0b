//! Toggle icons and their visibility for a given theme.

use crate::theme::Theme;

/// One of the two mutually exclusive indicators inside the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeIcon {
    /// Shown while the light theme is active.
    LightMode,
    /// Shown while the dark theme is active.
    DarkMode,
}

impl ThemeIcon {
    pub const ALL: [Self; 2] = [Self::LightMode, Self::DarkMode];

    /// The icon that indicates `theme`.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self::DarkMode
        } else {
            Self::LightMode
        }
    }
}

impl std::fmt::Display for ThemeIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LightMode => f.write_str("light-mode icon"),
            Self::DarkMode => f.write_str("dark-mode icon"),
        }
    }
}

/// Whether an icon is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Visibility of `icon` while `theme` is active.
    ///
    /// Exactly one icon of [`ThemeIcon::ALL`] is [`Shown`](Self::Shown) for any theme.
    #[must_use]
    pub fn of(icon: ThemeIcon, theme: Theme) -> Self {
        if ThemeIcon::for_theme(theme) == icon {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    /// CSS `display` value carrying this visibility.
    #[must_use]
    pub fn css_display(self) -> &'static str {
        match self {
            Self::Shown => "inline",
            Self::Hidden => "none",
        }
    }
}
