//! # themeswitch-app
//!
//! Application layer — the theme controller use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — durable key/value storage for the chosen theme
//!   - `ThemeSurface` — root theme attribute and toggle icon visibility
//! - Define the **driving/inbound** use-case:
//!   - `ThemeController` — resolve at load, toggle on click, persist, sync icons
//! - Define `ThemeSettings`, the storage key and DOM selectors adapters bind with
//!
//! ## Dependency rule
//! Depends on `themeswitch-domain` only (plus `serde` for settings).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod settings;
