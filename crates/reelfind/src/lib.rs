//! Reelfind: search a public movie catalog by title and browse the matches
//! as animated cards.
//!
//! The search lifecycle, response parsing and animation engine live in
//! `reelfind-core`. This crate binds them to Dioxus signals and the DOM.

#![forbid(unsafe_code)]

pub mod components;
pub mod notifier;
pub mod platform;
