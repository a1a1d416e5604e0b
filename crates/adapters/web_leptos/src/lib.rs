//! # themeswitch-web
//!
//! Browser adapter: persists the theme in `localStorage`, projects it onto the
//! page, and flips it on click.
//!
//! Two ways in:
//! - [`bind_page`] attaches to server-rendered markup (`.theme-btn`,
//!   `.light-mode`, `.dark-mode`); used by the `themeswitch` binary.
//! - [`ThemeToggle`] renders that markup as a Leptos component.

mod binding;
mod components;
pub mod error;
pub mod settings;
pub mod storage;
pub mod surface;

pub use binding::{ThemeBinding, bind_page};
pub use components::ThemeToggle;
pub use error::{ElementRole, WebError};
