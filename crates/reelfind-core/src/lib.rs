//! # Reelfind Core
//!
//! Platform-independent library behind the Reelfind movie search page.
//!
//! Everything here runs without a browser, so the whole search and animation
//! lifecycle is testable on the host. The Dioxus app only wires these pieces
//! to signals and DOM events.
//!
//! ## Modules
//!
//! - [`session`] - `SearchSession`: submit lifecycle, latest-request-wins
//! - [`api`] - `MovieSearchApi` trait and the reqwest client
//! - [`movie`] - `MovieRecord`, `ResultSet`, lenient response parsing
//! - [`notifier`] - `Notifier` trait and `Notice` values
//! - [`presentation`] - card views and their animation lifecycle hooks
//! - [`animation`] - easing, tweens and the handle-owning animator
//! - [`config`] - fixed endpoint, defaults and timings
//! - [`error`] - error taxonomy

#![forbid(unsafe_code)]

pub mod animation;
pub mod api;
pub mod config;
pub mod error;
pub mod movie;
pub mod notifier;
pub mod presentation;
pub mod session;

#[cfg(test)]
mod test_utils;
