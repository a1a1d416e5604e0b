//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is synchronous: the controller runs on the UI thread and never
//! suspends between reading, applying, and persisting a theme.

pub mod preference_store;
pub mod theme_surface;

pub use preference_store::PreferenceStore;
pub use theme_surface::ThemeSurface;
