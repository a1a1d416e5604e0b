//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ThemeSwitchError`] when crossing a port boundary.

/// A persisted or configured value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {value:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum ThemeSwitchError {
    /// A value could not be interpreted as a theme.
    #[error("invalid theme")]
    InvalidTheme(#[from] ParseThemeError),

    /// The preference store failed to read or write.
    #[error("preference storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
