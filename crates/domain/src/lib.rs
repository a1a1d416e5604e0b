//! # themeswitch-domain
//!
//! Pure domain model for the light/dark theme toggle.
//!
//! ## Responsibilities
//! - Define the [`Theme`](theme::Theme) enumeration and its string form
//! - Define the toggle's [`ThemeIcon`](icon::ThemeIcon)s and the
//!   theme → [`Visibility`](icon::Visibility) projection
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod icon;
pub mod theme;
